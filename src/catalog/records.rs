//! Content record types
//!
//! Plain, immutable data shapes for everything the portfolio displays. All
//! instances are compiled in (`catalog::data`); nothing is parsed or
//! validated at runtime.

/// Skill category key, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Frontend,
    Backend,
    AiMl,
    Tools,
}

/// A single skill with its display glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    pub icon: &'static str,
}

/// An ordered group of skills under one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: CategoryKey,
    pub title: &'static str,
    pub skills: &'static [SkillEntry],
}

/// One work experience entry with its ordered achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub organization: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub achievements: &'static [&'static str],
}

/// The education block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub duration: &'static str,
    pub gpa: &'static str,
    pub coursework: &'static str,
}

/// Project grouping key, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Ai,
    FullStack,
}

/// A single project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
    pub glyph: &'static str,
}

/// Who the portfolio is about, plus contact surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub name: &'static str,
    pub monogram: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub summary: &'static [&'static str],
}
