//! Navigation Bar Component
//!
//! Persistent top bar: identity monogram and name, the two page-select
//! controls, and the theme toggle. Rendered on every page.

use gpui::{
    ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*, px, rgb,
};
use gpui_component::{Icon, Theme, h_flex};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::assets::CustomIconName;
use crate::catalog;
use crate::constants::{MONOGRAM_SIZE, NAV_BAR_HEIGHT};
use crate::theme::typography::Typography;
use crate::theme::{Palette, ThemeMode, palette};

/// Navigation bar component
pub struct NavBar {
    entities: AppEntities,
}

impl NavBar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render on page or theme changes
        cx.observe(&entities.view, |_this, _, cx| cx.notify()).detach();

        Self { entities }
    }

    /// Render one page-select control
    fn render_page_button(
        &self,
        page: ActivePage,
        is_active: bool,
        palette: &Palette,
    ) -> impl IntoElement {
        let entities = self.entities.clone();
        let hover_bg = palette.control_hover;

        div()
            .id(page.title())
            .px_3()
            .py_1()
            .rounded_md()
            .cursor_pointer()
            .text_size(px(Typography::TEXT_BASE))
            .text_color(if is_active {
                palette.accent
            } else {
                palette.text_secondary
            })
            .when(is_active, |this| this.font_weight(FontWeight::SEMIBOLD))
            .hover(move |s| s.bg(hover_bg))
            .on_click(move |_: &ClickEvent, _window, cx| {
                entities.view.update(cx, |view, cx| {
                    if view.select_page(page) {
                        tracing::info!(page = ?page, "page selected");
                        cx.notify();
                    }
                });
            })
            .child(page.title())
    }

    /// Render the theme toggle control
    fn render_theme_toggle(&self, mode: ThemeMode, palette: &Palette) -> impl IntoElement {
        let entities = self.entities.clone();
        let hover_bg = palette.control_hover;
        // The icon shows the mode the toggle switches to
        let icon = if mode.is_dark() {
            CustomIconName::Sun
        } else {
            CustomIconName::Moon
        };

        div()
            .id("theme-toggle")
            .p_2()
            .rounded_md()
            .cursor_pointer()
            .text_color(palette.text_primary)
            .hover(move |s| s.bg(hover_bg))
            .on_click(move |_: &ClickEvent, window, cx| {
                let mode = entities.view.update(cx, |view, cx| {
                    let mode = view.toggle_theme();
                    cx.notify();
                    mode
                });
                // Keep the widget kit's theme in step with the store
                Theme::change(mode.component_mode(), Some(window), cx);
                tracing::info!(mode = ?mode, "theme toggled");
            })
            .child(Icon::from(icon))
    }
}

impl Render for NavBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = self.entities.view.read(cx);
        let (active_page, mode) = (view.page(), view.theme());
        let palette = palette(mode);
        let identity = catalog::identity();

        div()
            .h(px(NAV_BAR_HEIGHT))
            .w_full()
            .flex_none()
            .border_b_1()
            .border_color(palette.border)
            .bg(palette.background)
            .flex()
            .items_center()
            .justify_between()
            .px(px(24.0))
            // Left side: monogram and name
            .child(
                h_flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(MONOGRAM_SIZE))
                            .rounded_md()
                            .bg(crate::theme::colors::PortfolioColors::badge_bg())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(rgb(0xffffff))
                            .font_weight(FontWeight::BOLD)
                            .child(identity.monogram),
                    )
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(FontWeight::BOLD)
                            .child(identity.name),
                    ),
            )
            // Right side: page selectors and theme toggle
            .child(
                h_flex()
                    .items_center()
                    .gap_6()
                    .child(self.render_page_button(
                        ActivePage::About,
                        active_page == ActivePage::About,
                        &palette,
                    ))
                    .child(self.render_page_button(
                        ActivePage::Projects,
                        active_page == ActivePage::Projects,
                        &palette,
                    ))
                    .child(self.render_theme_toggle(mode, &palette)),
            )
    }
}
