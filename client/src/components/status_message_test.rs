use super::*;

#[test]
fn classes_differ_by_kind() {
    assert!(message_class(MessageKind::Success).ends_with("--success"));
    assert!(message_class(MessageKind::Error).ends_with("--error"));
}
