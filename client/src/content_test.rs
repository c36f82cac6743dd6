use super::*;

#[test]
fn builtin_content_parses_and_validates() {
    let content = SiteContent::parse(SiteContent::builtin_json()).expect("embedded content should parse");
    assert_eq!(content, SiteContent::builtin());
    assert!(!content.owner.is_empty());
    assert_eq!(content.contact.links.len(), 3);
    assert!(!content.projects.is_empty());
    assert!(!content.experience.is_empty());
    assert!(!content.events.is_empty());
}

#[test]
fn builtin_nav_targets_known_sections() {
    let content = SiteContent::builtin();
    let anchors = content.nav.iter().map(|n| n.anchor.as_str()).collect::<Vec<_>>();
    assert_eq!(anchors, vec!["about", "work", "contact"]);
}

#[test]
fn builtin_contact_links_cover_email_github_linkedin() {
    let content = SiteContent::builtin();
    let labels = content.contact.links.iter().map(|l| l.label.as_str()).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Email", "GitHub", "LinkedIn"]);
    assert!(content.contact.links[0].href.starts_with("mailto:"));
}

#[test]
fn contact_links_open_new_tab_without_referrer() {
    assert_eq!(CONTACT_LINK_TARGET, "_blank");
    assert_eq!(CONTACT_LINK_REL, "noreferrer");
}

#[test]
fn builtin_projects_keep_page_copy() {
    let content = SiteContent::builtin();
    let categories = content.projects.iter().map(|p| p.category.as_str()).collect::<Vec<_>>();
    assert_eq!(categories, vec!["Design System", "SaaS Platform", "SaaS Platform", "E-Commerce", "SaaS Platform"]);
    assert_eq!(content.projects[0].title, "IPO Momentum Trading System");
    assert_eq!(content.projects[0].tags, vec!["React", "Storybook", "A11y"]);
    assert_eq!(content.projects[3].tags, vec!["Vue 3", "Tailwind", "Stripe"]);
}

#[test]
fn parse_rejects_malformed_json() {
    let err = SiteContent::parse("{ not json").unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[test]
fn parse_rejects_nav_to_unknown_section() {
    let mut content = SiteContent::builtin();
    content.nav.push(NavItem { label: "Blog".to_owned(), anchor: "blog".to_owned() });
    let json = serde_json::to_string(&content).unwrap();
    let err = SiteContent::parse(&json).unwrap_err();
    assert!(matches!(err, ContentError::UnknownAnchor { ref anchor, .. } if anchor == "blog"));
    assert_eq!(err.to_string(), "nav item 'Blog' points at unknown section 'blog'");
}

#[test]
fn validate_rejects_empty_contact_href() {
    let mut content = SiteContent::default();
    content.contact.links.push(ContactLink { label: "Email".to_owned(), href: "  ".to_owned(), icon: "mail".to_owned() });
    assert!(matches!(content.validate(), Err(ContentError::EmptyHref(label)) if label == "Email"));
}

#[test]
fn missing_typing_speed_uses_defaults() {
    let hero: Hero =
        serde_json::from_str(r#"{"badge":"b","headline":"h","typed_word":"w","blurb":"x"}"#).unwrap();
    assert_eq!(hero.typing, TypingSpeed::default());
}

#[test]
fn accent_class_falls_back_to_indigo() {
    assert_eq!(accent_class("pink"), "accent--pink");
    assert_eq!(accent_class("cyan"), "accent--cyan");
    assert_eq!(accent_class("mauve"), "accent--indigo");
}

#[test]
fn section_ids_cover_every_anchor() {
    for id in ["about", "work", "contact", "events"] {
        assert!(SECTION_IDS.contains(&id));
    }
}
