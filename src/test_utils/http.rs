use axum_test::{TestResponse, TestServer};
use serde_json::Value;

use crate::{AppState, Ledger, build_router};

/// Create a test server around `ledger`.
#[track_caller]
pub(crate) fn get_test_server(ledger: Ledger) -> TestServer {
    TestServer::try_new(build_router(AppState::new(ledger))).expect("Could not create test server.")
}

/// Create a test server around a ledger with a budget of 2000.
#[track_caller]
pub(crate) fn get_test_server_with_budget() -> TestServer {
    let mut ledger = Ledger::new();
    ledger
        .set_budget(2000.0)
        .expect("Could not set the test budget.");

    get_test_server(ledger)
}

/// Assert that the response is a failure of the given kind and return its body.
#[track_caller]
pub(crate) fn assert_failure(response: &TestResponse, kind: &str) -> Value {
    let body = response.json::<Value>();

    assert_eq!(body["success"], false, "want a failure, got {body}");
    assert_eq!(body["kind"], kind, "want failure kind {kind}, got {body}");

    body
}

/// Assert that the response is a success and return its body.
#[track_caller]
pub(crate) fn assert_success(response: &TestResponse) -> Value {
    let body = response.json::<Value>();

    assert_eq!(body["success"], true, "want a success, got {body}");

    body
}
