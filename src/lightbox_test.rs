use super::*;

fn portrait() -> LightboxImage {
    LightboxImage { src: "img/portrait.jpg".to_owned(), alt: "Portrait at the lake".to_owned() }
}

#[test]
fn closed_lightbox_shows_nothing() {
    let state = OverlayState::default();
    assert_eq!(view(&state), ("", ""));
}

#[test]
fn open_lightbox_shows_source_and_caption() {
    let mut state = OverlayState::default();
    state.open(portrait());
    assert_eq!(view(&state), ("img/portrait.jpg", "Portrait at the lake"));
}

#[test]
fn missing_alt_gives_empty_caption() {
    let mut state = OverlayState::default();
    state.open(LightboxImage { src: "img/rust.svg".to_owned(), alt: String::new() });
    assert_eq!(view(&state), ("img/rust.svg", ""));
}

#[test]
fn open_close_twice_clears_image() {
    let mut state = OverlayState::default();
    for _ in 0..2 {
        state.open(portrait());
        state.close();
    }
    assert_eq!(view(&state), ("", ""));
    assert!(!state.is_open());
}

#[test]
fn markup_has_every_part_the_overlay_wires() {
    for part in ["lightbox-backdrop", "lightbox-caption", "lightbox-close", "<img"] {
        assert!(LIGHTBOX_MARKUP.contains(part), "missing {part}");
    }
}
