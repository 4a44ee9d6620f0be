use super::*;
use crate::overlay::OverlayState;

fn card() -> ProjectPreview {
    ProjectPreview {
        title: Some("Trail Planner".to_owned()),
        image_html: r#"<img src="img/trail.png" alt="Trail Planner">"#.to_owned(),
        description_html: "Offline maps in <strong>Rust</strong>.".to_owned(),
    }
}

#[test]
fn preview_composes_title_image_and_description() {
    let html = card().to_html();
    assert!(html.starts_with("<h3>Trail Planner</h3>"));
    assert!(html.contains(r#"<div class="modal-content"><img src="img/trail.png" alt="Trail Planner">"#));
    assert!(html.contains(r#"<div class="modal-text">Offline maps in <strong>Rust</strong>.</div>"#));
}

#[test]
fn missing_or_empty_heading_falls_back() {
    let mut preview = card();
    preview.title = None;
    assert_eq!(preview.title(), "Project");
    preview.title = Some(String::new());
    assert_eq!(preview.title(), "Project");
}

#[test]
fn title_text_is_escaped_but_markup_is_not() {
    let preview = ProjectPreview {
        title: Some("Tom & Jerry <beta>".to_owned()),
        image_html: String::new(),
        description_html: "<em>new</em>".to_owned(),
    };
    let html = preview.to_html();
    assert!(html.contains("<h3>Tom &amp; Jerry &lt;beta&gt;</h3>"));
    assert!(html.contains("<em>new</em>"));
}

#[test]
fn card_without_image_or_description_still_renders() {
    let html = ProjectPreview::default().to_html();
    assert_eq!(html, r#"<h3>Project</h3><div class="modal-content"><div class="modal-text"></div></div>"#);
}

#[test]
fn closing_modal_clears_body_content() {
    let mut state = OverlayState::default();
    state.open(card());
    assert!(state.content().map(ProjectPreview::to_html).is_some());
    state.close();
    assert_eq!(state.content().map(ProjectPreview::to_html).unwrap_or_default(), "");
}

#[test]
fn markup_has_every_part_the_modal_wires() {
    for part in ["modal-backdrop", "modal-close", "modal-body"] {
        assert!(MODAL_MARKUP.contains(part), "missing {part}");
    }
}
