//! Typography - Font Sizes and Weights

/// Typography constants
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_3XL: f32 = 30.0;

    // Display sizes
    /// Hero name heading
    pub const HERO_NAME: f32 = 36.0;
    /// Hero avatar glyph
    pub const HERO_GLYPH: f32 = 60.0;
    /// Project card glyph
    pub const CARD_GLYPH: f32 = 36.0;
}
