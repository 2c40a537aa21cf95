//! ContentCatalog - Compiled-In Portfolio Content
//!
//! Accessor functions over the static records in [`data`]. Every accessor is
//! deterministic and side-effect-free; the returned slices live for the
//! whole process and their order is the display order.

pub mod records;

mod data;

use records::{
    EducationEntry, ExperienceEntry, Identity, ProjectCategory, ProjectEntry, SkillCategory,
};

/// Who the portfolio is about
pub fn identity() -> &'static Identity {
    &data::IDENTITY
}

/// Skill groups in display order: Frontend, Backend, AI/ML, Tools
pub fn skill_categories() -> &'static [SkillCategory] {
    data::SKILL_CATEGORIES
}

/// Work experience entries in display order
pub fn experiences() -> &'static [ExperienceEntry] {
    data::EXPERIENCES
}

/// The education block
pub fn education() -> &'static EducationEntry {
    &data::EDUCATION
}

/// AI project cards in display order
pub fn ai_projects() -> &'static [ProjectEntry] {
    data::AI_PROJECTS
}

/// Full-stack project cards in display order
pub fn full_stack_projects() -> &'static [ProjectEntry] {
    data::FULL_STACK_PROJECTS
}

/// Project cards for one category
pub fn projects_by_category(category: ProjectCategory) -> &'static [ProjectEntry] {
    match category {
        ProjectCategory::Ai => data::AI_PROJECTS,
        ProjectCategory::FullStack => data::FULL_STACK_PROJECTS,
    }
}

/// Achievement and certification lines in display order
pub fn achievements() -> &'static [&'static str] {
    data::ACHIEVEMENTS
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::records::CategoryKey;

    #[test]
    fn four_skill_categories_in_fixed_order() {
        let keys: Vec<_> = skill_categories().iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                CategoryKey::Frontend,
                CategoryKey::Backend,
                CategoryKey::AiMl,
                CategoryKey::Tools,
            ]
        );
    }

    #[test]
    fn every_skill_category_is_non_empty() {
        for category in skill_categories() {
            assert!(
                !category.skills.is_empty(),
                "category {:?} has no skills",
                category.key
            );
        }
    }

    #[test]
    fn accessors_are_deterministic() {
        assert_eq!(skill_categories(), skill_categories());
        assert_eq!(experiences(), experiences());
        assert_eq!(achievements(), achievements());
        assert_eq!(ai_projects(), ai_projects());
    }

    #[test]
    fn project_categories_map_to_their_grids() {
        assert_eq!(projects_by_category(ProjectCategory::Ai), ai_projects());
        assert_eq!(
            projects_by_category(ProjectCategory::FullStack),
            full_stack_projects()
        );
        assert_eq!(ai_projects().len(), 5);
        assert_eq!(full_stack_projects().len(), 2);
    }

    #[test]
    fn experience_achievements_keep_catalog_order() {
        let exp = &experiences()[0];
        assert_eq!(exp.organization, "Emirates Group IT");
        assert_eq!(exp.achievements.len(), 4);
        assert!(exp.achievements[0].starts_with("Migrated chatbot services"));
    }

    #[test]
    fn identity_contact_surfaces_are_present() {
        let id = identity();
        assert!(id.email.contains('@'));
        assert!(id.github_url.starts_with("https://"));
        assert!(id.linkedin_url.starts_with("https://"));
        assert!(!id.summary.is_empty());
    }
}
