use super::*;

#[test]
fn submit_label_reflects_busy_state() {
    assert_eq!(submit_label(false), "新規登録");
    assert_eq!(submit_label(true), "登録中...");
}

#[test]
fn message_class_distinguishes_tones() {
    assert_ne!(message_class(MessageTone::Error), message_class(MessageTone::Info));
    assert!(message_class(MessageTone::Error).ends_with("--error"));
    assert!(message_class(MessageTone::Info).ends_with("--info"));
}
