//! Theme - Light/Dark Style Profiles
//!
//! The active [`ThemeMode`] is the single style-profile parameter: every
//! color used by the views comes from the [`Palette`] resolved for the mode.

pub mod colors;
pub mod typography;

use serde::{Deserialize, Serialize};

pub use colors::{Palette, palette};

/// Visual theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The opposite mode
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Map to the widget kit's theme mode
    pub fn component_mode(self) -> gpui_component::ThemeMode {
        match self {
            ThemeMode::Light => gpui_component::ThemeMode::Light,
            ThemeMode::Dark => gpui_component::ThemeMode::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
