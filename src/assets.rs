//! Embedded assets for portfolio-gui
//!
//! Uses rust-embed to bundle icons and other assets at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Custom icon names for portfolio-gui
pub enum CustomIconName {
    /// Theme toggle, light target
    Sun,
    /// Theme toggle, dark target
    Moon,
    /// Email link
    Mail,
    /// Phone number
    Phone,
    /// Location marker
    MapPin,
    /// GitHub profile link
    Github,
    /// LinkedIn profile link
    Linkedin,
    /// Project demo link marker
    ExternalLink,
    /// Achievements section
    Award,
    /// Durations
    Calendar,
    /// Education section
    GraduationCap,
    /// Experience section
    Briefcase,
    /// Skills and full-stack projects sections
    Code,
    /// AI projects section
    Brain,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Sun => "icons/sun.svg",
            CustomIconName::Moon => "icons/moon.svg",
            CustomIconName::Mail => "icons/mail.svg",
            CustomIconName::Phone => "icons/phone.svg",
            CustomIconName::MapPin => "icons/map-pin.svg",
            CustomIconName::Github => "icons/github.svg",
            CustomIconName::Linkedin => "icons/linkedin.svg",
            CustomIconName::ExternalLink => "icons/external-link.svg",
            CustomIconName::Award => "icons/award.svg",
            CustomIconName::Calendar => "icons/calendar.svg",
            CustomIconName::GraduationCap => "icons/graduation-cap.svg",
            CustomIconName::Briefcase => "icons/briefcase.svg",
            CustomIconName::Code => "icons/code.svg",
            CustomIconName::Brain => "icons/brain.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}
