//! Workspace - Main Shell
//!
//! The workspace holds the navigation bar, the routed page body, and the
//! footer. Page views are created lazily and cached across navigation.

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px};

use crate::app::entities::AppEntities;
use crate::app::navigation::ActivePage;
use crate::components::layout::footer::Footer;
use crate::components::layout::nav_bar::NavBar;
use crate::constants::{CONTENT_MAX_WIDTH, CONTENT_PADDING_X, CONTENT_PADDING_Y};
use crate::features::about::page::AboutPage;
use crate::features::projects::page::ProjectsPage;
use crate::theme::palette;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    nav_bar: Entity<NavBar>,
    footer: Entity<Footer>,
    // Page views (created lazily and cached)
    about_page: Option<Entity<AboutPage>>,
    projects_page: Option<Entity<ProjectsPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let nav_bar = cx.new(|cx| NavBar::new(entities.clone(), cx));
        let footer = cx.new(|cx| Footer::new(entities.clone(), cx));

        // The About page is visible initially
        let about_page = Some(cx.new(|cx| AboutPage::new(entities.clone(), cx)));

        // Re-render on page or theme changes
        cx.observe(&entities.view, |_this, _, cx| cx.notify()).detach();

        Self {
            entities,
            nav_bar,
            footer,
            about_page,
            projects_page: None,
        }
    }

    /// Get or create the page view for the given page
    fn get_or_create_page(&mut self, page: ActivePage, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        match page {
            ActivePage::About => {
                let entities = self.entities.clone();
                self.about_page
                    .get_or_insert_with(|| cx.new(|cx| AboutPage::new(entities, cx)))
                    .clone()
                    .into_any_element()
            }
            ActivePage::Projects => {
                let entities = self.entities.clone();
                self.projects_page
                    .get_or_insert_with(|| cx.new(|cx| ProjectsPage::new(entities, cx)))
                    .clone()
                    .into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (active_page, theme) = {
            let view = self.entities.view.read(cx);
            (view.page(), view.theme())
        };
        let palette = palette(theme);
        let content = self.get_or_create_page(active_page, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(palette.background)
            .text_color(palette.text_primary)
            .child(self.nav_bar.clone())
            .child(
                // Scrolling page body, centered content column
                div()
                    .id("page-scroll")
                    .flex_1()
                    .overflow_y_scroll()
                    .child(
                        div().w_full().flex().justify_center().child(
                            div()
                                .w_full()
                                .max_w(px(CONTENT_MAX_WIDTH))
                                .px(px(CONTENT_PADDING_X))
                                .py(px(CONTENT_PADDING_Y))
                                .child(content),
                        ),
                    ),
            )
            .child(self.footer.clone())
    }
}
