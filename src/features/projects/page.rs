//! Projects Page
//!
//! Composes exactly two sections in fixed order: the AI projects grid and
//! the full-stack projects grid, each in catalog order.

use gpui::{
    Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, h_flex, v_flex};

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::catalog;
use crate::catalog::records::{ProjectCategory, ProjectEntry};
use crate::constants::PROJECT_CARD_WIDTH;
use crate::theme::typography::Typography;
use crate::theme::{Palette, palette};

/// Projects page component
pub struct ProjectsPage {
    entities: AppEntities,
}

impl ProjectsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render on theme changes
        cx.observe(&entities.view, |_this, _, cx| cx.notify()).detach();

        Self { entities }
    }

    /// One project card
    fn render_project_card(
        &self,
        project: &'static ProjectEntry,
        palette: &Palette,
    ) -> impl IntoElement {
        v_flex()
            .w(px(PROJECT_CARD_WIDTH))
            .p(px(24.0))
            .rounded_lg()
            .border_1()
            .border_color(palette.border)
            .bg(palette.card)
            .gap_3()
            .child(div().text_size(px(Typography::CARD_GLYPH)).child(project.glyph))
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .font_weight(FontWeight::SEMIBOLD)
                    .child(project.title),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(palette.text_secondary)
                    .child(project.description),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(palette.accent)
                    .child(project.tech),
            )
            // Decorative link markers, as on the source page
            .child(
                h_flex()
                    .mt_1()
                    .gap_4()
                    .text_size(px(Typography::TEXT_SM))
                    .text_color(palette.text_muted)
                    .child(
                        h_flex()
                            .items_center()
                            .gap_2()
                            .child(Icon::from(CustomIconName::Github))
                            .child("Code"),
                    )
                    .child(
                        h_flex()
                            .items_center()
                            .gap_2()
                            .child(Icon::from(CustomIconName::ExternalLink))
                            .child("Demo"),
                    ),
            )
    }

    /// One project section: heading plus a wrapping card grid
    fn render_section(
        &self,
        icon: CustomIconName,
        title: &'static str,
        category: ProjectCategory,
        palette: &Palette,
    ) -> impl IntoElement {
        v_flex()
            .gap_6()
            .child(
                h_flex()
                    .items_center()
                    .gap_3()
                    .child(div().text_color(palette.text_primary).child(Icon::from(icon)))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_3XL))
                            .font_weight(FontWeight::BOLD)
                            .child(title),
                    ),
            )
            .child(
                div().flex().flex_row().flex_wrap().gap_6().children(
                    catalog::projects_by_category(category)
                        .iter()
                        .map(|project| self.render_project_card(project, palette)),
                ),
            )
    }
}

impl Render for ProjectsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = palette(self.entities.view.read(cx).theme());

        v_flex()
            .gap(px(48.0))
            .child(self.render_section(
                CustomIconName::Brain,
                "AI Projects",
                ProjectCategory::Ai,
                &palette,
            ))
            .child(self.render_section(
                CustomIconName::Code,
                "Full-Stack Projects",
                ProjectCategory::FullStack,
                &palette,
            ))
    }
}
