//! Footer Component
//!
//! Persistent footer with the copyright line and outbound contact links.

use gpui::{
    ClickEvent, Context, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, h_flex};

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::catalog;
use crate::constants::{CONTENT_MAX_WIDTH, CONTENT_PADDING_X};
use crate::helpers::links;
use crate::theme::typography::Typography;
use crate::theme::{Palette, palette};

/// Footer component
pub struct Footer {
    entities: AppEntities,
}

impl Footer {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render on theme changes
        cx.observe(&entities.view, |_this, _, cx| cx.notify()).detach();

        Self { entities }
    }

    /// Render one outbound icon link
    fn render_link_icon(
        &self,
        id: &'static str,
        icon: CustomIconName,
        url: String,
        palette: &Palette,
    ) -> impl IntoElement {
        let hover_bg = palette.control_hover;

        div()
            .id(id)
            .p_1()
            .rounded_md()
            .cursor_pointer()
            .text_color(palette.text_muted)
            .hover(move |s| s.bg(hover_bg))
            .on_click(move |_: &ClickEvent, _window, _cx| {
                if let Err(e) = links::open_external(&url) {
                    tracing::warn!(error = %e, url = %url, "failed to open link");
                }
            })
            .child(Icon::from(icon))
    }
}

impl Render for Footer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = palette(self.entities.view.read(cx).theme());
        let identity = catalog::identity();

        div()
            .w_full()
            .flex_none()
            .border_t_1()
            .border_color(palette.border)
            .flex()
            .justify_center()
            .child(
                h_flex()
                    .w_full()
                    .max_w(px(CONTENT_MAX_WIDTH))
                    .px(px(CONTENT_PADDING_X))
                    .py(px(20.0))
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(palette.text_muted)
                            .child(format!(
                                "© 2025 {}. All rights reserved.",
                                identity.name
                            )),
                    )
                    .child(
                        h_flex()
                            .gap_4()
                            .child(self.render_link_icon(
                                "footer-linkedin",
                                CustomIconName::Linkedin,
                                identity.linkedin_url.to_string(),
                                &palette,
                            ))
                            .child(self.render_link_icon(
                                "footer-github",
                                CustomIconName::Github,
                                identity.github_url.to_string(),
                                &palette,
                            ))
                            .child(self.render_link_icon(
                                "footer-mail",
                                CustomIconName::Mail,
                                links::mailto(identity.email),
                                &palette,
                            )),
                    ),
            )
    }
}
