//! Navigation - Active Page
//!
//! Defines the two top-level content views and their display order.

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Biography, skills, experience, education, achievements
    #[default]
    About,
    /// AI and full-stack project grids
    Projects,
}

impl ActivePage {
    /// Navigation label for the page
    pub fn title(self) -> &'static str {
        match self {
            ActivePage::About => "About",
            ActivePage::Projects => "Projects",
        }
    }

    /// All pages in navigation order
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::About, ActivePage::Projects]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_is_the_default_page() {
        assert_eq!(ActivePage::default(), ActivePage::About);
    }

    #[test]
    fn navigation_order_is_about_then_projects() {
        assert_eq!(ActivePage::all(), &[ActivePage::About, ActivePage::Projects]);
    }

    #[test]
    fn titles_are_distinct() {
        assert_ne!(ActivePage::About.title(), ActivePage::Projects.title());
    }
}
