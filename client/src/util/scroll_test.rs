use super::*;
use std::cell::RefCell;
use std::collections::HashMap;

fn sections() -> HashMap<&'static str, u32> {
    HashMap::from([("about", 1), ("work", 2), ("contact", 3), ("events", 4)])
}

#[test]
fn existing_anchor_is_scrolled_into_view() {
    let sections = sections();
    let scrolled = RefCell::new(Vec::new());
    let found = scroll_to_with("contact", |id| sections.get(id).copied(), |el| scrolled.borrow_mut().push(*el));
    assert!(found);
    assert_eq!(scrolled.into_inner(), vec![3]);
}

#[test]
fn unknown_anchor_is_a_silent_noop() {
    let sections = sections();
    let scrolled = RefCell::new(Vec::new());
    let found = scroll_to_with("nonexistent", |id| sections.get(id).copied(), |el| scrolled.borrow_mut().push(*el));
    assert!(!found);
    assert!(scrolled.into_inner().is_empty());
}

#[test]
fn empty_anchor_skips_lookup() {
    let looked_up = RefCell::new(false);
    let found = scroll_to_with(
        " # ",
        |_| {
            *looked_up.borrow_mut() = true;
            Some(())
        },
        |_| {},
    );
    assert!(!found);
    assert!(!*looked_up.borrow());
}

#[test]
fn hash_prefixed_anchor_resolves() {
    let sections = sections();
    assert!(scroll_to_with("#work", |id| sections.get(id).copied(), |_| {}));
    assert_eq!(normalize_anchor("  #about "), "about");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_noop_outside_hydrate() {
    assert!(!scroll_to_section("contact"));
    scroll_to_top();
}
