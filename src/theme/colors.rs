//! Colors - Portfolio Palettes
//!
//! One [`Palette`] per theme mode. Category and status accents are shared
//! across both modes.

use gpui::{Rgba, rgb};

use crate::catalog::records::CategoryKey;
use crate::theme::ThemeMode;

/// Resolved color set for one theme mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Window and page background
    pub background: Rgba,
    /// Section card background
    pub card: Rgba,
    /// Card, nav, and footer borders
    pub border: Rgba,
    /// Headings and body text
    pub text_primary: Rgba,
    /// Taglines and descriptions
    pub text_secondary: Rgba,
    /// Metadata (locations, durations, footer)
    pub text_muted: Rgba,
    /// Link and highlight accent
    pub accent: Rgba,
    /// Hover background for nav controls
    pub control_hover: Rgba,
}

/// Resolve the palette for a theme mode
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => Palette {
            background: rgb(0x0f172a),
            card: rgb(0x1e293b),
            border: rgb(0x334155),
            text_primary: rgb(0xffffff),
            text_secondary: rgb(0xd1d5db),
            text_muted: rgb(0x94a3b8),
            accent: rgb(0x3b82f6),
            control_hover: rgb(0x334155),
        },
        ThemeMode::Light => Palette {
            background: rgb(0xffffff),
            card: rgb(0xffffff),
            border: rgb(0xe5e7eb),
            text_primary: rgb(0x111827),
            text_secondary: rgb(0x4b5563),
            text_muted: rgb(0x6b7280),
            accent: rgb(0x3b82f6),
            control_hover: rgb(0xe5e7eb),
        },
    }
}

/// Shared accents, independent of the theme mode
pub struct PortfolioColors;

impl PortfolioColors {
    /// Skill category heading accent
    pub fn category_accent(key: CategoryKey) -> Rgba {
        match key {
            CategoryKey::Frontend => rgb(0x3b82f6),
            CategoryKey::Backend => rgb(0x22c55e),
            CategoryKey::AiMl => rgb(0xa855f7),
            CategoryKey::Tools => rgb(0xf97316),
        }
    }

    /// Monogram and avatar badge background
    pub fn badge_bg() -> Rgba {
        rgb(0x6366f1)
    }

    /// Achievement trophy accent
    pub fn trophy() -> Rgba {
        rgb(0xeab308)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_between_modes() {
        let dark = palette(ThemeMode::Dark);
        let light = palette(ThemeMode::Light);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.text_primary, light.text_primary);
    }

    #[test]
    fn accent_is_shared_across_modes() {
        assert_eq!(
            palette(ThemeMode::Dark).accent,
            palette(ThemeMode::Light).accent
        );
    }

    #[test]
    fn every_category_has_an_accent() {
        let accents: Vec<_> = [
            CategoryKey::Frontend,
            CategoryKey::Backend,
            CategoryKey::AiMl,
            CategoryKey::Tools,
        ]
        .into_iter()
        .map(PortfolioColors::category_accent)
        .collect();
        // All four are distinct
        for (i, a) in accents.iter().enumerate() {
            for b in accents.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
