//! End-to-end progress store scenario, driven entirely through raw
//! dispatcher messages the way a real signup session would be.

use onboard::signup::{subscribe, Dispatcher, SharedProgress, SignupProgress, StaticConfig, StepStatus};
use serde_json::json;
use std::rc::Rc;

fn session() -> (Dispatcher, SharedProgress<StaticConfig>) {
    let config = StaticConfig::new()
        .async_step("account-creation")
        .flow("new-flow", &["site-selection"])
        .flow("another-new-flow", &["no-step-matches"]);

    let store = SignupProgress::new(config).into_shared();
    let mut dispatcher = Dispatcher::new();
    subscribe(&mut dispatcher, Rc::clone(&store));
    (dispatcher, store)
}

fn submit(dispatcher: &mut Dispatcher, step_name: &str) {
    dispatcher.dispatch(&json!({
        "type": "SUBMIT_SIGNUP_STEP",
        "data": { "stepName": step_name },
    }));
}

#[test]
fn store_is_empty_at_first() {
    let (_, store) = session();
    assert_eq!(store.borrow().get().len(), 0);
}

#[test]
fn submitted_step_is_stored_once_with_its_form_data() {
    let (mut dispatcher, store) = session();

    dispatcher.dispatch(&json!({
        "type": "SUBMIT_SIGNUP_STEP",
        "data": {
            "stepName": "site-selection",
            "formData": { "url": "my-site.example.com" },
        },
    }));

    assert_eq!(store.borrow().len(), 1);
    assert_eq!(store.borrow().get()[0].step_name, "site-selection");

    // A bare re-submit neither duplicates the record nor clobbers its data.
    submit(&mut dispatcher, "site-selection");

    let records = store.borrow().get();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].form_data, json!({ "url": "my-site.example.com" }));
    assert_eq!(records[0].status, StepStatus::Completed);
}

#[test]
fn snapshot_cannot_be_used_to_mutate_the_store() {
    let (mut dispatcher, store) = session();
    submit(&mut dispatcher, "site-selection");

    let mut snapshot = store.borrow().get();
    snapshot.pop();

    assert_eq!(store.borrow().get().len(), 1);
}

#[test]
fn multiple_steps_are_stored_in_submission_order() {
    let (mut dispatcher, store) = session();
    submit(&mut dispatcher, "site-selection");
    submit(&mut dispatcher, "theme-selection");

    let records = store.borrow().get();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].step_name, "site-selection");
    assert_eq!(records[1].step_name, "theme-selection");
}

#[test]
fn submit_status_depends_on_the_step_having_an_api_request() {
    let (mut dispatcher, store) = session();
    submit(&mut dispatcher, "site-selection");
    submit(&mut dispatcher, "account-creation");

    let store = store.borrow();
    assert_eq!(
        store.find("site-selection").unwrap().status,
        StepStatus::Completed
    );
    assert_eq!(
        store.find("account-creation").unwrap().status,
        StepStatus::Pending
    );
}

#[test]
fn only_freshly_saved_steps_are_marked_in_progress() {
    let (mut dispatcher, store) = session();
    submit(&mut dispatcher, "site-selection");

    dispatcher.dispatch(&json!({
        "type": "SAVE_SIGNUP_STEP",
        "data": { "stepName": "site-selection" },
    }));
    assert_ne!(
        store.borrow().get()[0].status,
        StepStatus::InProgress,
        "saving an already-settled step must not regress it"
    );

    dispatcher.dispatch(&json!({
        "type": "SAVE_SIGNUP_STEP",
        "data": { "stepName": "last-step" },
    }));
    let records = store.borrow().get();
    assert_eq!(records.last().unwrap().step_name, "last-step");
    assert_eq!(records.last().unwrap().status, StepStatus::InProgress);
}

#[test]
fn processing_a_completed_step_leaves_it_completed() {
    let (mut dispatcher, store) = session();
    submit(&mut dispatcher, "site-selection");
    assert_eq!(store.borrow().get()[0].status, StepStatus::Completed);

    dispatcher.dispatch(&json!({
        "type": "PROCESSED_SIGNUP_STEP",
        "data": { "stepName": "site-selection" },
    }));
    assert_eq!(store.borrow().get()[0].status, StepStatus::Completed);
}

#[test]
fn changing_flows_prunes_steps_the_new_flow_does_not_contain() {
    let (mut dispatcher, store) = session();
    submit(&mut dispatcher, "site-selection");
    submit(&mut dispatcher, "theme-selection");
    assert!(store.borrow().len() > 1);

    dispatcher.dispatch(&json!({
        "type": "CHANGE_SIGNUP_FLOW",
        "data": { "flowName": "new-flow" },
    }));
    assert_eq!(store.borrow().len(), 1);
    assert_eq!(store.borrow().get()[0].step_name, "site-selection");

    dispatcher.dispatch(&json!({
        "type": "CHANGE_SIGNUP_FLOW",
        "data": { "flowName": "another-new-flow" },
    }));
    assert_eq!(store.borrow().len(), 0);
}

#[test]
fn malformed_and_unrecognized_messages_are_ignored() {
    let (mut dispatcher, store) = session();
    submit(&mut dispatcher, "site-selection");

    dispatcher.dispatch(&json!({ "type": "NOT_A_REAL_ACTION", "data": {} }));
    dispatcher.dispatch(&json!("not even an object"));
    dispatcher.dispatch(&json!({ "data": { "stepName": "orphan" } }));
    dispatcher.dispatch(&json!({ "type": "SUBMIT_SIGNUP_STEP", "data": {} }));

    assert_eq!(store.borrow().len(), 1);
}
