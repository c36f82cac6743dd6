//! Portfolio content table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every piece of copy on the page (bio, skills, projects, timelines, contact
//! links) lives in `content/portfolio.json`, embedded at compile time. The
//! page renders from this table, so editing content never touches component
//! code.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

/// Anchor ids rendered by the page, in document order.
pub const SECTION_IDS: [&str; 4] = ["work", "about", "events", "contact"];

/// Contact links (mail included) open in a new tab without a referrer.
pub const CONTACT_LINK_TARGET: &str = "_blank";
pub const CONTACT_LINK_REL: &str = "noreferrer";

const BUILTIN_JSON: &str = include_str!("../content/portfolio.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("nav item '{label}' points at unknown section '{anchor}'")]
    UnknownAnchor { label: String, anchor: String },

    #[error("contact link '{0}' has an empty href")]
    EmptyHref(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub nav: Vec<NavItem>,
    pub hero: Hero,
    pub skills: Vec<SkillGroup>,
    pub work_heading: String,
    pub projects: Vec<Project>,
    pub about: About,
    pub experience: Vec<TimelineEntry>,
    pub events: Vec<TimelineEntry>,
    pub contact: Contact,
    pub footer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub typed_word: String,
    pub blurb: String,
    #[serde(default)]
    pub typing: TypingSpeed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSpeed {
    pub speed_ms: u32,
    pub delay_ms: u32,
}

impl Default for TypingSpeed {
    fn default() -> Self {
        let timing = crate::state::typewriter::TypewriterConfig::default();
        Self { speed_ms: timing.speed_ms, delay_ms: timing.delay_ms }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: String,
    pub accent: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub eyebrow: String,
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub subtitle: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub highlight: String,
    pub links: Vec<ContactLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

impl SiteContent {
    /// Parse and validate a content table.
    pub fn parse(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// The embedded table, or an empty page if it fails to parse.
    pub fn builtin() -> Self {
        match Self::parse(BUILTIN_JSON) {
            Ok(content) => content,
            Err(_e) => {
                #[cfg(feature = "hydrate")]
                log::error!("embedded portfolio content rejected: {_e}");
                Self::default()
            }
        }
    }

    pub fn builtin_json() -> &'static str {
        BUILTIN_JSON
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        for item in &self.nav {
            if !SECTION_IDS.contains(&item.anchor.as_str()) {
                return Err(ContentError::UnknownAnchor { label: item.label.clone(), anchor: item.anchor.clone() });
            }
        }
        if let Some(link) = self.contact.links.iter().find(|link| link.href.trim().is_empty()) {
            return Err(ContentError::EmptyHref(link.label.clone()));
        }
        Ok(())
    }
}

/// CSS modifier for a project or skill accent; unknown names fall back to indigo.
pub fn accent_class(accent: &str) -> &'static str {
    match accent {
        "pink" => "accent--pink",
        "cyan" => "accent--cyan",
        "yellow" => "accent--yellow",
        "blue" => "accent--blue",
        _ => "accent--indigo",
    }
}
