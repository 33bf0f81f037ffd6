//! Static site content: experience, skills, contact details, CV location.
//!
//! Display strings are dictionary keys so both languages render from the same
//! tables; proper nouns (technologies, URLs) are literal.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Path of the downloadable CV, served from `public/`.
pub const CV_PATH: &str = "/cv.pdf";
/// File name suggested to the browser for the CV download.
pub const CV_DOWNLOAD_NAME: &str = "cv.pdf";

pub const CONTACT_EMAIL: &str = "hello@example.com";
pub const CONTACT_PHONE: &str = "+20 100 000 0000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role_key: &'static str,
    pub company_key: &'static str,
    pub summary_key: &'static str,
    /// Free-form period label, e.g. `2022 – Present`.
    pub period: &'static str,
    pub highlight_keys: &'static [&'static str],
    pub stack: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub title_key: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role_key: "experience.platform.role",
        company_key: "experience.platform.company",
        summary_key: "experience.platform.summary",
        period: "2022 – 2025",
        highlight_keys: &["experience.platform.h1", "experience.platform.h2"],
        stack: &["Rust", "TypeScript", "PostgreSQL", "Docker"],
    },
    ExperienceEntry {
        role_key: "experience.agency.role",
        company_key: "experience.agency.company",
        summary_key: "experience.agency.summary",
        period: "2019 – 2022",
        highlight_keys: &["experience.agency.h1", "experience.agency.h2"],
        stack: &["React", "Node.js", "MongoDB", "Tailwind CSS"],
    },
    ExperienceEntry {
        role_key: "experience.freelance.role",
        company_key: "experience.freelance.company",
        summary_key: "experience.freelance.summary",
        period: "2017 – 2019",
        highlight_keys: &["experience.freelance.h1"],
        stack: &["JavaScript", "PHP", "MySQL"],
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title_key: "skills.group.languages",
        skills: &["Rust", "TypeScript", "JavaScript", "SQL", "Python"],
    },
    SkillGroup {
        title_key: "skills.group.frontend",
        skills: &["Leptos", "React", "HTML", "CSS", "Tailwind CSS", "Accessibility"],
    },
    SkillGroup {
        title_key: "skills.group.backend",
        skills: &["Axum", "Node.js", "Express", "PostgreSQL", "MongoDB", "REST APIs"],
    },
    SkillGroup {
        title_key: "skills.group.tooling",
        skills: &["Git", "Docker", "GitHub Actions", "Linux", "Figma"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", url: "https://github.com/" },
    SocialLink { label: "LinkedIn", url: "https://www.linkedin.com/" },
];

/// `mailto:` link for the contact address.
pub fn mailto() -> String {
    format!("mailto:{CONTACT_EMAIL}")
}

/// `tel:` link for the contact phone number, spaces removed.
pub fn tel() -> String {
    let digits: String = CONTACT_PHONE.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
