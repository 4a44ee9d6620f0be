use super::*;

const HERE: &str = "https://folio.example/projects.html";

fn ctx<'a>(history_length: u32, referrer: &'a str, href: &'a str) -> GoBackContext<'a> {
    GoBackContext { history_length, referrer, location: HERE, href }
}

#[test]
fn same_origin_matches_scheme_host_port() {
    assert!(same_origin("https://folio.example/index.html", HERE));
    assert!(!same_origin("http://folio.example/index.html", HERE));
    assert!(!same_origin("https://folio.example:8443/", HERE));
    assert!(!same_origin("https://search.example/?q=folio", HERE));
}

#[test]
fn same_origin_resolves_relative_referrer() {
    assert!(same_origin("/about.html", HERE));
}

#[test]
fn empty_or_malformed_referrer_is_not_same_origin() {
    assert!(!same_origin("", HERE));
    assert!(!same_origin("http://[::1", HERE));
    assert!(!same_origin("https://folio.example/", "not a url"));
}

#[test]
fn opaque_origins_never_match() {
    assert!(!same_origin("data:text/html,hi", "data:text/html,hi"));
}

#[test]
fn same_origin_referrer_with_history_goes_back() {
    let action = decide(&ctx(3, "https://folio.example/index.html", "index.html"));
    assert_eq!(action, GoBackAction::HistoryBack);
}

#[test]
fn single_history_entry_does_not_go_back() {
    let action = decide(&ctx(1, "https://folio.example/index.html", "index.html#projects"));
    assert_eq!(action, GoBackAction::FollowHref);
}

#[test]
fn foreign_referrer_with_fragment_href_follows_link() {
    let action = decide(&ctx(4, "https://search.example/", "index.html#projects"));
    assert_eq!(action, GoBackAction::FollowHref);
}

#[test]
fn no_referrer_and_plain_href_redirects_home() {
    let action = decide(&ctx(2, "", "index.html"));
    assert_eq!(action, GoBackAction::RedirectHome);
}

#[test]
fn no_referrer_and_empty_href_redirects_home() {
    let action = decide(&ctx(1, "", ""));
    assert_eq!(action, GoBackAction::RedirectHome);
}
