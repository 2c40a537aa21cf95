//! ViewState - Active Page and Theme Mode
//!
//! The one mutable store in the application. Owned by a GPUI `Entity`;
//! mutators report whether anything changed so the caller can `cx.notify()`.

use crate::app::navigation::ActivePage;
use crate::theme::ThemeMode;

/// Session-scoped view state: which page is shown, which theme is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    page: ActivePage,
    theme: ThemeMode,
}

impl ViewState {
    /// Currently active page
    pub fn page(&self) -> ActivePage {
        self.page
    }

    /// Currently active theme mode
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Select a page. Returns false when `page` is already active, so the
    /// caller can skip the re-render notification.
    pub fn select_page(&mut self, page: ActivePage) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Flip Dark <-> Light and return the new mode
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_about_dark() {
        let state = ViewState::default();
        assert_eq!(state.page(), ActivePage::About);
        assert_eq!(state.theme(), ThemeMode::Dark);
    }

    #[test]
    fn select_page_is_last_write_wins() {
        let mut state = ViewState::default();
        assert!(state.select_page(ActivePage::Projects));
        assert_eq!(state.page(), ActivePage::Projects);
        assert!(state.select_page(ActivePage::About));
        assert!(state.select_page(ActivePage::Projects));
        assert_eq!(state.page(), ActivePage::Projects);
    }

    #[test]
    fn selecting_the_active_page_is_a_no_op() {
        let mut state = ViewState::default();
        assert!(!state.select_page(ActivePage::About));
        assert_eq!(state.page(), ActivePage::About);
    }

    #[test]
    fn toggling_theme_twice_restores_the_initial_mode() {
        let mut state = ViewState::default();
        let initial = state.theme();
        assert_eq!(state.toggle_theme(), ThemeMode::Light);
        assert_eq!(state.toggle_theme(), initial);
    }

    #[test]
    fn page_and_theme_are_independent() {
        let mut state = ViewState::default();
        state.toggle_theme();
        assert_eq!(state.page(), ActivePage::About);
        state.select_page(ActivePage::Projects);
        assert_eq!(state.theme(), ThemeMode::Light);
    }
}
