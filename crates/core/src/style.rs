//! Visual-style preset constants.
//!
//! These match the style tags offered by the generation form. The backend
//! accepts free-text tags; the preset list is what the console advertises.

pub const STYLE_BOLD: &str = "bold";
pub const STYLE_ELEGANT: &str = "elegant";
pub const STYLE_VIBRANT: &str = "vibrant";
pub const STYLE_VINTAGE: &str = "vintage";
pub const STYLE_MINIMAL: &str = "minimal";

/// All preset style tags, in form order.
pub const PRESET_STYLES: &[&str] = &[
    STYLE_BOLD,
    STYLE_ELEGANT,
    STYLE_VIBRANT,
    STYLE_VINTAGE,
    STYLE_MINIMAL,
];

/// Whether `style` is one of the advertised presets.
pub fn is_preset_style(style: &str) -> bool {
    PRESET_STYLES.contains(&style)
}
