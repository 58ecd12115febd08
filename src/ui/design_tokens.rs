// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the screens and custom widgets.
//!
//! - **Palette**: Base colors
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//!
//! ```
//! use iced_labeler::ui::design_tokens::spacing;
//!
//! let padding = spacing::MD; // 16px
//! assert_eq!(padding, spacing::XS * 2.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Primary blue

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    /// Edge length of a color button swatch.
    pub const SWATCH: f32 = 28.0;

    /// Width of the splash progress bar.
    pub const SPLASH_BAR_WIDTH: f32 = 360.0;
    pub const SPLASH_BAR_HEIGHT: f32 = 10.0;

    pub const KEY_COLUMN_WIDTH: f32 = 140.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_monotonic() {
        let scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn typography_scale_is_monotonic() {
        assert!(typography::CAPTION < typography::BODY);
        assert!(typography::BODY < typography::TITLE_MD);
        assert!(typography::TITLE_MD < typography::TITLE_LG);
    }
}
