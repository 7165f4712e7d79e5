use super::*;
use crate::net::types::AdStrategy;

fn strategy_widget(input: &str) -> WidgetState<AdStrategy> {
    let mut state = WidgetState::new(STRATEGY_FAILED);
    state.input = input.to_owned();
    state
}

fn skincare_strategy() -> AdStrategy {
    AdStrategy {
        headline: "Skin that scales".to_owned(),
        target_audience: "Women 25-40 who research ingredients".to_owned(),
        channels: vec!["Meta".to_owned(), "TikTok".to_owned()],
        suggested_budget: "$5k/mo".to_owned(),
        creative_hook: "Dermatologists hate this routine".to_owned(),
        primary_pain_point: Some("Breakouts".to_owned()),
        roas_projection: Some("+31%".to_owned()),
    }
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn new_widget_is_idle() {
    let state: WidgetState<String> = WidgetState::new(CREATIVE_FAILED);
    assert!(state.input.is_empty());
    assert!(!state.loading);
    assert!(state.result.is_none());
    assert!(state.error.is_none());
}

#[test]
fn blank_input_is_ignored_and_state_unchanged() {
    for input in ["", "   ", "\n\t"] {
        let mut state = strategy_widget(input);
        let before = state.clone();
        assert_eq!(state.begin_submit(true), SubmitDecision::Ignore);
        assert_eq!(state, before);
    }
}

#[test]
fn submit_sets_loading_and_trims() {
    let mut state = strategy_widget("  A premium skincare brand ");
    assert_eq!(state.begin_submit(true), SubmitDecision::Send("A premium skincare brand".to_owned()));
    assert!(state.loading);
}

#[test]
fn resubmit_while_loading_is_noop() {
    let mut state = strategy_widget("A premium skincare brand");
    let _ = state.begin_submit(true);
    let before = state.clone();
    assert_eq!(state.begin_submit(true), SubmitDecision::Ignore);
    assert_eq!(state, before);
}

#[test]
fn unactivated_submit_requests_activation() {
    let mut state = strategy_widget("A premium skincare brand");
    assert_eq!(state.begin_submit(false), SubmitDecision::Activate);
    assert!(!state.loading);
}

#[test]
fn submit_clears_previous_error() {
    let mut state = strategy_widget("A premium skincare brand");
    let _ = state.begin_submit(true);
    state.finish(Err(ApiError::network("offline")));
    assert!(state.error.is_some());
    let _ = state.begin_submit(true);
    assert!(state.error.is_none());
}

// =============================================================
// finish
// =============================================================

#[test]
fn finish_ok_stores_result() {
    let mut state = strategy_widget("A premium skincare brand");
    let _ = state.begin_submit(true);
    assert_eq!(state.finish(Ok(skincare_strategy())), FinishAction::None);
    assert!(!state.loading);
    let result = state.result.unwrap();
    assert!(!result.headline.is_empty());
    assert!(!result.channels.is_empty());
}

#[test]
fn finish_err_leaves_result_empty_and_stops_loading() {
    let mut state = strategy_widget("A premium skincare brand");
    let _ = state.begin_submit(true);
    let action = state.finish(Err(ApiError::new(ErrorKind::MalformedResponse, "empty response")));
    assert_eq!(action, FinishAction::None);
    assert!(state.result.is_none());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(STRATEGY_FAILED));
}

#[test]
fn finish_err_keeps_previous_result() {
    let mut state = strategy_widget("A premium skincare brand");
    let _ = state.begin_submit(true);
    state.finish(Ok(skincare_strategy()));
    let _ = state.begin_submit(true);
    state.finish(Err(ApiError::network("offline")));
    assert_eq!(state.result, Some(skincare_strategy()));
}

#[test]
fn unauthorized_error_requests_reactivation() {
    let mut state: WidgetState<String> = WidgetState::new(CREATIVE_FAILED);
    state.input = "a blue sneaker on white background".to_owned();
    let _ = state.begin_submit(true);
    let action = state.finish(Err(ApiError::new(ErrorKind::Unauthorized, "API key not valid")));
    assert_eq!(action, FinishAction::Reactivate);
    assert_eq!(state.error.as_deref(), Some(CREATIVE_FAILED));
}
