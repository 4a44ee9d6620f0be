use super::*;

#[test]
fn blank_input_yields_defaults() {
    assert_eq!(SiteConfig::from_json("").unwrap(), SiteConfig::default());
    assert_eq!(SiteConfig::from_json("  \n ").unwrap(), SiteConfig::default());
}

#[test]
fn defaults_match_markup_contract() {
    let config = SiteConfig::default();
    assert_eq!(config.theme.storage_key, "preferred-theme");
    assert_eq!(config.home_url, "index.html#home");
    assert_eq!(config.selectors.menu_toggle, ".menu-toggle");
    assert_eq!(config.selectors.theme_toggle_id, "themeToggle");
    assert_eq!(config.copy.revert_ms, 1200);
    assert_eq!(config.copy.done_label, "Copied!");
    assert!(!config.debug);
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "theme": { "storage_key": "folio-theme" }, "debug": true }"#).unwrap();
    assert_eq!(config.theme.storage_key, "folio-theme");
    assert_eq!(config.theme.attribute, "data-theme");
    assert!(config.debug);
    assert_eq!(config.selectors, Selectors::default());
}

#[test]
fn unknown_fields_are_ignored() {
    let config = SiteConfig::from_json(r#"{ "analytics": "off" }"#).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn malformed_json_is_config_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
    assert!(!err.is_missing_element());
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = SiteConfig::from_json(r#"{ "copy": { "revert_ms": "soon" } }"#).unwrap_err();
    assert!(matches!(err, BehaviorError::Config(_)));
}
