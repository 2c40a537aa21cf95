//! About Page
//!
//! Composes the biography sections in fixed order: hero, summary, skills,
//! experience, education, achievements.

use gpui::{
    ClickEvent, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::*, px, rgb,
};
use gpui_component::{Icon, h_flex, v_flex};

use crate::app::entities::AppEntities;
use crate::assets::CustomIconName;
use crate::catalog;
use crate::catalog::records::{ExperienceEntry, SkillCategory};
use crate::components::card::{section_card, section_title};
use crate::constants::AVATAR_SIZE;
use crate::helpers::links;
use crate::theme::colors::PortfolioColors;
use crate::theme::typography::Typography;
use crate::theme::{Palette, palette};

/// About page component
pub struct AboutPage {
    entities: AppEntities,
}

impl AboutPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Re-render on theme changes
        cx.observe(&entities.view, |_this, _, cx| cx.notify()).detach();

        Self { entities }
    }

    /// Hero social button opening an external profile
    fn render_social_button(
        &self,
        id: &'static str,
        icon: CustomIconName,
        url: String,
    ) -> impl IntoElement {
        div()
            .id(id)
            .px_4()
            .py_2()
            .rounded_lg()
            .bg(rgb(0x111827))
            .text_color(rgb(0xffffff))
            .cursor_pointer()
            .hover(|s| s.bg(rgb(0x1f2937)))
            .on_click(move |_: &ClickEvent, _window, _cx| {
                if let Err(e) = links::open_external(&url) {
                    tracing::warn!(error = %e, url = %url, "failed to open link");
                }
            })
            .child(Icon::from(icon))
    }

    /// Contact detail with a leading icon
    fn render_contact_item(
        &self,
        icon: CustomIconName,
        text: &'static str,
        palette: &Palette,
    ) -> impl IntoElement {
        h_flex()
            .items_center()
            .gap_2()
            .text_size(px(Typography::TEXT_SM))
            .text_color(palette.text_secondary)
            .child(Icon::from(icon))
            .child(text)
    }

    fn render_hero(&self, palette: &Palette) -> impl IntoElement {
        let identity = catalog::identity();

        v_flex()
            .items_center()
            .py(px(32.0))
            .gap_4()
            // Avatar badge
            .child(
                div()
                    .size(px(AVATAR_SIZE))
                    .rounded_full()
                    .bg(PortfolioColors::badge_bg())
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_size(px(Typography::HERO_GLYPH))
                    .child("👨‍💻"),
            )
            .child(
                div()
                    .text_size(px(Typography::HERO_NAME))
                    .font_weight(FontWeight::BOLD)
                    .child(identity.name),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_XL))
                    .text_color(palette.text_secondary)
                    .child(identity.tagline),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_6()
                    .child(self.render_contact_item(
                        CustomIconName::MapPin,
                        identity.location,
                        palette,
                    ))
                    .child(self.render_contact_item(CustomIconName::Mail, identity.email, palette))
                    .child(self.render_contact_item(
                        CustomIconName::Phone,
                        identity.phone,
                        palette,
                    )),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_4()
                    .child(self.render_social_button(
                        "hero-github",
                        CustomIconName::Github,
                        identity.github_url.to_string(),
                    ))
                    .child(self.render_social_button(
                        "hero-linkedin",
                        CustomIconName::Linkedin,
                        identity.linkedin_url.to_string(),
                    )),
            )
    }

    fn render_summary(&self, palette: &Palette) -> impl IntoElement {
        let identity = catalog::identity();

        section_card(palette)
            .child(
                h_flex()
                    .items_center()
                    .gap_3()
                    .child(div().text_size(px(Typography::TEXT_2XL)).child("👋"))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_2XL))
                            .font_weight(FontWeight::BOLD)
                            .child("About Me"),
                    ),
            )
            .child(
                v_flex()
                    .mt_4()
                    .gap_4()
                    .text_size(px(Typography::TEXT_LG))
                    .children(identity.summary.iter().map(|paragraph| div().child(*paragraph))),
            )
    }

    /// One skill category column
    fn render_skill_category(
        &self,
        category: &'static SkillCategory,
        palette: &Palette,
    ) -> impl IntoElement {
        v_flex()
            .flex_1()
            .gap_3()
            .child(
                div()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(PortfolioColors::category_accent(category.key))
                    .child(category.title),
            )
            .children(category.skills.iter().map(|skill| {
                h_flex()
                    .items_center()
                    .gap_3()
                    .child(div().text_size(px(Typography::TEXT_XL)).child(skill.icon))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(palette.text_primary)
                            .child(skill.name),
                    )
            }))
    }

    fn render_skills(&self, palette: &Palette) -> impl IntoElement {
        section_card(palette)
            .child(section_title(CustomIconName::Code, "Technical Skills", palette))
            .child(
                h_flex().mt_6().gap(px(32.0)).children(
                    catalog::skill_categories()
                        .iter()
                        .map(|category| self.render_skill_category(category, palette)),
                ),
            )
    }

    /// One experience entry with its achievements
    fn render_experience_entry(
        &self,
        entry: &'static ExperienceEntry,
        palette: &Palette,
    ) -> impl IntoElement {
        v_flex()
            .gap_4()
            .child(
                h_flex()
                    .items_start()
                    .justify_between()
                    .child(
                        v_flex()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_XL))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child(entry.role),
                            )
                            .child(
                                div()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(palette.accent)
                                    .child(entry.organization),
                            )
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(palette.text_muted)
                                    .child(entry.location),
                            ),
                    )
                    .child(
                        h_flex()
                            .items_center()
                            .gap_2()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(palette.text_muted)
                            .child(Icon::from(CustomIconName::Calendar))
                            .child(entry.duration),
                    ),
            )
            .child(v_flex().gap_2().children(entry.achievements.iter().map(|achievement| {
                h_flex()
                    .items_start()
                    .gap_3()
                    .child(div().text_color(palette.accent).child("•"))
                    .child(
                        div()
                            .text_size(px(Typography::TEXT_SM))
                            .child(*achievement),
                    )
            })))
    }

    fn render_experience(&self, palette: &Palette) -> impl IntoElement {
        section_card(palette)
            .child(section_title(CustomIconName::Briefcase, "Experience", palette))
            .child(
                v_flex().mt_6().gap_6().children(
                    catalog::experiences()
                        .iter()
                        .map(|entry| self.render_experience_entry(entry, palette)),
                ),
            )
    }

    fn render_education(&self, palette: &Palette) -> impl IntoElement {
        let education = catalog::education();

        section_card(palette)
            .child(section_title(
                CustomIconName::GraduationCap,
                "Education",
                palette,
            ))
            .child(
                h_flex()
                    .mt_6()
                    .items_start()
                    .justify_between()
                    .child(
                        v_flex()
                            .gap_1()
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_XL))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .child(education.institution),
                            )
                            .child(
                                div()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(palette.accent)
                                    .child(education.degree),
                            )
                            .child(
                                div()
                                    .mt_2()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(palette.text_muted)
                                    .child(education.gpa),
                            )
                            .child(
                                div()
                                    .mt_4()
                                    .text_size(px(Typography::TEXT_SM))
                                    .font_weight(FontWeight::MEDIUM)
                                    .child("Relevant Coursework:"),
                            )
                            .child(
                                div()
                                    .text_size(px(Typography::TEXT_SM))
                                    .text_color(palette.text_secondary)
                                    .child(education.coursework),
                            ),
                    )
                    .child(
                        h_flex()
                            .items_center()
                            .gap_2()
                            .text_size(px(Typography::TEXT_SM))
                            .text_color(palette.text_muted)
                            .child(Icon::from(CustomIconName::Calendar))
                            .child(education.duration),
                    ),
            )
    }

    fn render_achievements(&self, palette: &Palette) -> impl IntoElement {
        section_card(palette)
            .child(section_title(
                CustomIconName::Award,
                "Achievements & Certifications",
                palette,
            ))
            .child(v_flex().mt_6().gap_3().children(catalog::achievements().iter().map(
                |achievement| {
                    h_flex()
                        .items_start()
                        .gap_3()
                        .child(div().text_color(PortfolioColors::trophy()).child("🏆"))
                        .child(
                            div()
                                .text_size(px(Typography::TEXT_SM))
                                .child(*achievement),
                        )
                },
            )))
    }
}

impl Render for AboutPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let palette = palette(self.entities.view.read(cx).theme());

        v_flex()
            .gap(px(48.0))
            .child(self.render_hero(&palette))
            .child(self.render_summary(&palette))
            .child(self.render_skills(&palette))
            .child(self.render_experience(&palette))
            .child(self.render_education(&palette))
            .child(self.render_achievements(&palette))
    }
}
