use delver_core::Phase;

#[test]
fn test_default_is_idle() {
    assert_eq!(Phase::default(), Phase::Idle);
}

#[test]
fn test_running_predicate() {
    assert!(Phase::Running.is_running());
    assert!(!Phase::Idle.is_running());
    assert!(!Phase::Complete.is_running());
    assert!(!Phase::Failed.is_running());
}

#[test]
fn test_settled_predicate() {
    assert!(Phase::Complete.is_settled());
    assert!(Phase::Failed.is_settled());
    assert!(!Phase::Idle.is_settled());
    assert!(!Phase::Running.is_settled());
}

#[test]
fn test_display_names() {
    assert_eq!(Phase::Idle.display_name(), "Idle");
    assert_eq!(Phase::Running.display_name(), "Running");
    assert_eq!(Phase::Complete.display_name(), "Complete");
    assert_eq!(Phase::Failed.display_name(), "Failed");
}
