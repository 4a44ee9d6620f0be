use super::*;

#[test]
fn starts_closed_without_content() {
    let state = OverlayState::<String>::default();
    assert!(!state.is_open());
    assert_eq!(state.content(), None);
}

#[test]
fn open_sets_content_and_close_clears_it() {
    let mut state = OverlayState::default();
    state.open("a.png".to_owned());
    assert!(state.is_open());
    assert_eq!(state.content().map(String::as_str), Some("a.png"));

    assert!(state.close());
    assert!(!state.is_open());
    assert_eq!(state.content(), None);
}

#[test]
fn close_when_closed_reports_nothing_showing() {
    let mut state = OverlayState::<String>::default();
    assert!(!state.close());
}

#[test]
fn reopening_replaces_content() {
    let mut state = OverlayState::default();
    state.open(1);
    state.open(2);
    assert_eq!(state.content(), Some(&2));
}

#[test]
fn open_close_twice_returns_to_initial_state() {
    let initial = OverlayState::<String>::default();
    let mut state = initial.clone();
    for src in ["first.png", "second.png"] {
        state.open(src.to_owned());
        assert_eq!(body_overflow(state.is_open()), "hidden");
        state.close();
        assert_eq!(body_overflow(state.is_open()), "");
    }
    assert_eq!(state, initial);
}
