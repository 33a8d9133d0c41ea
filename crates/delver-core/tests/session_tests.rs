use delver_core::client::ClientError;
use delver_core::report::ResearchReport;
use delver_core::{Phase, Session};

#[test]
fn test_new_session_is_idle() {
    let session = Session::new();
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.report().is_none());
    assert!(session.error().is_none());
}

#[test]
fn test_begin_enters_running() {
    let mut session = Session::new();
    session.begin().unwrap();
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_second_submission_rejected_while_running() {
    let mut session = Session::new();
    session.begin().unwrap();
    assert!(session.begin().is_err());
    // Still running; the in-flight request was not disturbed
    assert_eq!(session.phase(), Phase::Running);
}

#[test]
fn test_settle_success_stores_report() {
    let mut session = Session::new();
    session.begin().unwrap();
    session.settle(Ok(ResearchReport::new("q", "s")));

    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.report().unwrap().query, "q");
    assert!(session.error().is_none());
}

#[test]
fn test_settle_failure_stores_message() {
    let mut session = Session::new();
    session.begin().unwrap();
    session.settle(Err(ClientError::Backend {
        status: 500,
        message: "LLM timeout".to_string(),
    }));

    assert_eq!(session.phase(), Phase::Failed);
    assert_eq!(session.error(), Some("LLM timeout"));
    assert!(session.report().is_none());
}

#[test]
fn test_resubmission_replaces_previous_outcome() {
    let mut session = Session::new();

    session.begin().unwrap();
    session.settle(Err(ClientError::Network("connection refused".to_string())));
    assert_eq!(session.phase(), Phase::Failed);

    // The session stays interactive after a failure
    session.begin().unwrap();
    assert_eq!(session.phase(), Phase::Running);
    assert!(session.error().is_none());

    session.settle(Ok(ResearchReport::new("second", "s")));
    assert_eq!(session.report().unwrap().query, "second");

    // A completed session accepts a fresh submission and clears the report
    session.begin().unwrap();
    assert!(session.report().is_none());
}
