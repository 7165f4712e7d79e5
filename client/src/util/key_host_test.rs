use super::*;
use futures::executor::block_on;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Host whose key appears once the picker has been opened (or never).
struct MockHost {
    selected: AtomicBool,
    picker_selects: bool,
    opened: AtomicUsize,
}

impl MockHost {
    fn new(selected: bool, picker_selects: bool) -> Self {
        Self { selected: AtomicBool::new(selected), picker_selects, opened: AtomicUsize::new(0) }
    }
}

impl KeyHost for MockHost {
    fn has_selected_key(&self) -> HostFuture<'_, bool> {
        Box::pin(async { self.selected.load(Ordering::SeqCst) })
    }

    fn open_select_key(&self) -> HostFuture<'_, ()> {
        Box::pin(async {
            self.opened.fetch_add(1, Ordering::SeqCst);
            if self.picker_selects {
                self.selected.store(true, Ordering::SeqCst);
            }
        })
    }
}

#[test]
fn handle_defaults_to_absent() {
    assert!(!KeyHostHandle::default().is_present());
    assert!(KeyHostHandle::absent().host().is_none());
}

#[test]
fn detect_is_absent_outside_browser() {
    assert!(!KeyHostHandle::detect().is_present());
}

#[test]
fn resolve_status_prefers_host() {
    let host = MockHost::new(true, false);
    let status = block_on(resolve_status(Some(&host), async { false }));
    assert_eq!(status, KeyStatus::Ready);
}

#[test]
fn resolve_status_uses_fallback_without_host() {
    assert_eq!(block_on(resolve_status(None, async { true })), KeyStatus::Ready);
    assert_eq!(block_on(resolve_status(None, async { false })), KeyStatus::Missing);
}

#[test]
fn activate_requeries_after_picker() {
    let host = MockHost::new(false, true);
    assert_eq!(block_on(activate(Some(&host))), Some(KeyStatus::Ready));
    assert_eq!(host.opened.load(Ordering::SeqCst), 1);
}

#[test]
fn activate_reports_missing_when_picker_cancelled() {
    let host = MockHost::new(false, false);
    assert_eq!(block_on(activate(Some(&host))), Some(KeyStatus::Missing));
}

#[test]
fn activate_without_host_is_none() {
    assert_eq!(block_on(activate(None)), None);
}

#[test]
fn handle_shares_injected_host() {
    let handle = KeyHostHandle::new(Arc::new(MockHost::new(true, false)));
    assert!(handle.is_present());
    let host = handle.host().unwrap();
    assert!(block_on(host.has_selected_key()));
}
