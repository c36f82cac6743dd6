use super::*;

#[test]
fn starts_hidden() {
    assert!(!RevealState::default().is_visible());
}

#[test]
fn ratio_below_threshold_keeps_hidden() {
    let mut state = RevealState::default();
    assert!(!state.observe(0.0));
    assert!(!state.observe(0.05));
    assert!(!state.observe(0.099));
    assert!(!state.is_visible());
}

#[test]
fn threshold_ratio_reveals_exactly_once() {
    let mut state = RevealState::default();
    assert!(state.observe(REVEAL_THRESHOLD));
    assert!(state.is_visible());
    assert!(!state.observe(0.5));
    assert!(state.is_visible());
}

#[test]
fn leaving_viewport_never_hides_again() {
    let mut state = RevealState::default();
    state.observe(0.4);
    for ratio in [0.0, 0.02, 1.0, 0.0] {
        state.observe(ratio);
        assert!(state.is_visible());
    }
}

#[test]
fn nan_ratio_is_ignored() {
    let mut state = RevealState::default();
    assert!(!state.observe(f64::NAN));
    assert!(!state.is_visible());
}

#[test]
fn instances_are_independent() {
    let mut first = RevealState::default();
    let second = RevealState::default();
    first.observe(1.0);
    assert!(first.is_visible());
    assert!(!second.is_visible());
}

#[test]
fn class_and_style_reflect_state_and_delay() {
    assert_eq!(reveal_class(false), "scroll-reveal");
    assert_eq!(reveal_class(true), "scroll-reveal scroll-reveal--visible");
    assert_eq!(reveal_style(200), "transition-duration: 1000ms; transition-delay: 200ms;");
    assert_eq!(reveal_style(0), "transition-duration: 1000ms; transition-delay: 0ms;");
}
