//! Colours for the study page
//!
//! Step cards use a pale tint per step; action buttons use a saturated
//! colour per kind of source.

use app_core::study::StepColor;

/// Colour value (hex string)
pub type Color = String;

/// Base colour palette
pub mod palette {
    /// Page background
    pub const PAGE_BACKGROUND: &str = "#F3F4F6";
    /// Header background
    pub const HEADER_BACKGROUND: &str = "#1F2937";
    /// Content surface
    pub const SURFACE: &str = "#FFFFFF";
    /// Embedded-source panel
    pub const SOURCE_PANEL: &str = "#F9FAFB";
    /// Muted text
    pub const TEXT_MUTED: &str = "#9CA3AF";
    /// Secondary text
    pub const TEXT_SECONDARY: &str = "#4B5563";

    /// Amber tint
    pub const AMBER_50: &str = "#FFFBEB";
    /// Yellow tint
    pub const YELLOW_50: &str = "#FEFCE8";
    /// Green tint
    pub const GREEN_50: &str = "#F0FDF4";
    /// Blue tint
    pub const BLUE_50: &str = "#EFF6FF";
    /// Gray tint
    pub const GRAY_50: &str = "#F9FAFB";

    /// Red action
    pub const RED_500: &str = "#EF4444";
    /// Blue action
    pub const BLUE_500: &str = "#3B82F6";
    /// Green action
    pub const GREEN_500: &str = "#22C55E";

    /// Error alert background
    pub const RED_100: &str = "#FEE2E2";
    /// Error alert border
    pub const RED_400: &str = "#F87171";
    /// Error alert text
    pub const RED_700: &str = "#B91C1C";
}

/// Card background for a step
pub fn step_background(color: StepColor) -> Color {
    match color {
        StepColor::Amber => palette::AMBER_50,
        StepColor::Yellow => palette::YELLOW_50,
        StepColor::Green => palette::GREEN_50,
        StepColor::Blue => palette::BLUE_50,
        StepColor::Gray => palette::GRAY_50,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_backgrounds_are_distinct() {
        let colors = [StepColor::Amber, StepColor::Yellow, StepColor::Green, StepColor::Blue];
        let backgrounds: Vec<Color> = colors.iter().map(|c| step_background(*c)).collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_step_background_hex() {
        assert_eq!(step_background(StepColor::Amber), "#FFFBEB");
        assert!(step_background(StepColor::Gray).starts_with('#'));
    }
}
