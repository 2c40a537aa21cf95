//! Section Card Helpers
//!
//! Shared card container and icon-headed section title used by both pages.

use gpui::{Div, FontWeight, IntoElement, ParentElement, Styled, div, px};
use gpui_component::{Icon, h_flex};

use crate::assets::CustomIconName;
use crate::theme::Palette;
use crate::theme::typography::Typography;

/// Bordered card container for a page section
pub fn section_card(palette: &Palette) -> Div {
    div()
        .w_full()
        .p(px(32.0))
        .rounded_lg()
        .border_1()
        .border_color(palette.border)
        .bg(palette.card)
}

/// Section heading with a leading icon
pub fn section_title(
    icon: CustomIconName,
    title: &'static str,
    palette: &Palette,
) -> impl IntoElement {
    h_flex()
        .items_center()
        .gap_3()
        .child(div().text_color(palette.text_primary).child(Icon::from(icon)))
        .child(
            div()
                .text_size(px(Typography::TEXT_2XL))
                .font_weight(FontWeight::BOLD)
                .child(title),
        )
}
