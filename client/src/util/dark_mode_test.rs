#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_dark_outside_browser() {
    assert!(read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn toggle_moves_root_class_between_themes() {
    let light = toggle(DEFAULT_DARK);
    assert_eq!(root_class(light), "");
    assert_eq!(root_class(toggle(light)), DARK_CLASS);
}

#[test]
fn server_shell_renders_default_theme() {
    assert_eq!(root_class(DEFAULT_DARK), DARK_CLASS);
    assert_eq!(read_preference(), DEFAULT_DARK);
}

#[test]
fn root_class_only_marks_dark() {
    assert_eq!(root_class(true), "dark");
    assert_eq!(root_class(false), "");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
