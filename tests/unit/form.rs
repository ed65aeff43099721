use rust_client::form::{FormState, SubmitDecision, SubmissionOutcome};

#[test]
fn edit_events_update_the_draft() {
    let mut form = FormState::new();
    assert_eq!(form.title(), "");
    assert_eq!(form.description(), "");

    form.title_changed("Sprint");
    form.title_changed("Sprint Plan");
    form.description_changed("Q1 roadmap");

    assert_eq!(form.title(), "Sprint Plan");
    assert_eq!(form.description(), "Q1 roadmap");
    assert!(form.existing_projects().is_empty());
}

#[test]
fn submit_requested_rejects_empty_fields() {
    let mut form = FormState::new();
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Reject(SubmissionOutcome::RejectedEmpty { .. })
    ));

    form.title_changed("Sprint Plan");
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Reject(SubmissionOutcome::RejectedEmpty { .. })
    ));

    form.description_changed("Q1 roadmap");
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Submit(_)
    ));
}

#[test]
fn submit_requested_builds_the_wire_request() {
    let mut form = FormState::new();
    form.title_changed("Sprint Plan");
    form.description_changed("Q1 roadmap");

    let SubmitDecision::Submit(request) = form.submit_requested(42) else {
        panic!("expected a submit decision");
    };
    assert_eq!(request.title, "Sprint Plan");
    assert_eq!(request.description, "Q1 roadmap");
    assert_eq!(request.board_id, 42);
}

#[test]
fn duplicate_title_is_rejected_even_with_different_description() {
    let mut form = FormState::new();
    form.title_changed("Dup");
    form.description_changed("A");
    form.response_received(&SubmissionOutcome::Created);

    form.title_changed("Dup");
    form.description_changed("B");
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Reject(SubmissionOutcome::RejectedDuplicate { .. })
    ));
}

#[test]
fn duplicate_check_is_case_sensitive_and_exact() {
    let mut form = FormState::new();
    form.title_changed("Dup");
    form.description_changed("A");
    form.response_received(&SubmissionOutcome::Created);

    form.title_changed("dup");
    form.description_changed("B");
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Submit(_)
    ));

    form.title_changed("Dup ");
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Submit(_)
    ));
}

#[test]
fn empty_check_runs_before_duplicate_check() {
    let mut form = FormState::new();
    form.title_changed("Dup");
    form.description_changed("A");
    form.response_received(&SubmissionOutcome::Created);

    // Duplicate title but missing description: the emptiness rejection wins
    form.title_changed("Dup");
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Reject(SubmissionOutcome::RejectedEmpty { .. })
    ));
}

#[test]
fn in_flight_submissions_are_rejected_until_a_response_arrives() {
    let mut form = FormState::new();
    form.title_changed("Sprint Plan");
    form.description_changed("Q1 roadmap");

    form.submit_started();
    assert!(form.is_in_flight());
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Reject(SubmissionOutcome::RejectedInFlight)
    ));

    form.response_received(&SubmissionOutcome::ServerRejected { status: 500 });
    assert!(!form.is_in_flight());
    assert!(matches!(
        form.submit_requested(42),
        SubmitDecision::Submit(_)
    ));
}

#[test]
fn created_outcome_appends_to_cache_and_clears_the_draft() {
    let mut form = FormState::new();
    form.title_changed("Sprint Plan");
    form.description_changed("Q1 roadmap");
    form.submit_started();

    form.response_received(&SubmissionOutcome::Created);

    assert_eq!(form.title(), "");
    assert_eq!(form.description(), "");
    assert_eq!(form.existing_projects().len(), 1);
    assert_eq!(form.existing_projects()[0].title, "Sprint Plan");
    assert_eq!(form.existing_projects()[0].description, "Q1 roadmap");
    assert!(!form.is_in_flight());
}

#[test]
fn failure_outcomes_preserve_the_draft_and_cache() {
    let failures = [
        SubmissionOutcome::ServerRejected { status: 500 },
        SubmissionOutcome::NetworkFailed {
            message: "connection refused".to_string(),
        },
    ];

    for outcome in failures {
        let mut form = FormState::new();
        form.title_changed("Sprint Plan");
        form.description_changed("Q1 roadmap");
        form.submit_started();

        form.response_received(&outcome);

        assert_eq!(form.title(), "Sprint Plan");
        assert_eq!(form.description(), "Q1 roadmap");
        assert!(form.existing_projects().is_empty());
        assert!(!form.is_in_flight());
    }
}

#[test]
fn cache_grows_monotonically_across_submissions() {
    let mut form = FormState::new();
    for i in 0..3 {
        form.title_changed(format!("Project {}", i));
        form.description_changed("desc");
        form.submit_started();
        form.response_received(&SubmissionOutcome::Created);
    }
    assert_eq!(form.existing_projects().len(), 3);
}
