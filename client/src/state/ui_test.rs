use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_is_dark_landing() {
    let state = UiState::default();
    assert_eq!(state.page, Page::Landing);
    assert!(state.dark_mode);
    assert!(state.notice.is_none());
}

#[test]
fn navigate_reports_change() {
    let mut state = UiState::default();
    assert!(state.navigate(Page::Login));
    assert!(!state.navigate(Page::Login));
    assert_eq!(state.page, Page::Login);
}

#[test]
fn navigate_signup_landing_login_ends_on_login() {
    let mut state = UiState::default();
    state.navigate(Page::Signup);
    state.navigate(Page::Landing);
    state.navigate(Page::Login);
    assert_eq!(state.page, Page::Login);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_anchors_match_landing_ids() {
    let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
    assert_eq!(anchors, vec!["features", "creative-lab", "pricing", "demo"]);
}

#[test]
fn section_labels_are_distinct() {
    let mut labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), Section::ALL.len());
}

// =============================================================
// KeyGate
// =============================================================

#[test]
fn key_status_from_bool() {
    assert_eq!(KeyStatus::from(true), KeyStatus::Ready);
    assert_eq!(KeyStatus::from(false), KeyStatus::Missing);
}

#[test]
fn gate_without_host_always_shows_content() {
    for status in [KeyStatus::Unknown, KeyStatus::Ready, KeyStatus::Missing] {
        let gate = KeyGate { host_present: false, status };
        assert_eq!(gate.view(), RootView::Content);
    }
}

#[test]
fn gate_with_host_follows_status() {
    let mut gate = KeyGate { host_present: true, status: KeyStatus::Unknown };
    assert_eq!(gate.view(), RootView::Loading);
    gate.status = KeyStatus::Missing;
    assert_eq!(gate.view(), RootView::Activation);
    gate.status = KeyStatus::Ready;
    assert_eq!(gate.view(), RootView::Content);
}

#[test]
fn widgets_blocked_only_when_key_missing() {
    assert!(KeyGate::default().widgets_activated());
    assert!(KeyGate { host_present: true, status: KeyStatus::Ready }.widgets_activated());
    assert!(!KeyGate { host_present: false, status: KeyStatus::Missing }.widgets_activated());
}
