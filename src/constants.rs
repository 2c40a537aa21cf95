//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Navigation bar height in pixels
pub const NAV_BAR_HEIGHT: f32 = 64.0;

/// Maximum content column width (centered)
pub const CONTENT_MAX_WIDTH: f32 = 1152.0;

/// Horizontal content padding
pub const CONTENT_PADDING_X: f32 = 24.0;

/// Vertical content padding
pub const CONTENT_PADDING_Y: f32 = 48.0;

/// Hero avatar diameter
pub const AVATAR_SIZE: f32 = 192.0;

/// Navigation monogram badge size
pub const MONOGRAM_SIZE: f32 = 40.0;

/// Project card width in the grids
pub const PROJECT_CARD_WIDTH: f32 = 344.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;
