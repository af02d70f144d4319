//! Defines the endpoints for listing spendings.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, endpoints::IdPath, envelope::EnvelopeId};

/// A route handler for listing the spendings of all envelopes.
pub async fn get_spendings_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    let spendings = state.lock_ledger()?.spendings(None);

    Ok(Json(json!({
        "success": true,
        "spendings": spendings,
    }))
    .into_response())
}

/// A route handler for listing the spendings of one envelope.
pub async fn get_envelope_spendings_endpoint(
    State(state): State<AppState>,
    path: IdPath<EnvelopeId>,
) -> Result<Response, Error> {
    let Path(envelope_id) = path?;
    let ledger = state.lock_ledger()?;
    let envelope = ledger.envelope(envelope_id)?;
    let spendings = ledger.spendings(Some(envelope_id));

    Ok(Json(json!({
        "success": true,
        "envelope": envelope,
        "spendings": spendings,
    }))
    .into_response())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        Ledger,
        endpoints::{self, format_endpoint},
        test_utils::{assert_failure, assert_success, get_test_server},
    };

    fn get_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_budget(2000.0).unwrap();
        ledger.create_envelope("Groceries", 400.0).unwrap();
        ledger.create_envelope("Transport", 150.0).unwrap();
        ledger.create_spending(1, "Coffee", 5.0).unwrap();
        ledger.create_spending(2, "Bus", 3.5).unwrap();
        ledger.create_spending(1, "Bread", 4.25).unwrap();
        ledger
    }

    #[tokio::test]
    async fn lists_empty_spendings_initially() {
        let server = get_test_server(Ledger::new());

        let response = server.get(endpoints::SPENDINGS).await;

        response.assert_status_ok();
        assert_eq!(assert_success(&response)["spendings"], json!([]));
    }

    #[tokio::test]
    async fn lists_all_spendings() {
        let server = get_test_server(get_ledger());

        let body = assert_success(&server.get(endpoints::SPENDINGS).await);

        assert_eq!(
            body["spendings"],
            json!([
                {"id": 1, "envelopeId": 1, "name": "Coffee", "amountCents": 500},
                {"id": 2, "envelopeId": 2, "name": "Bus", "amountCents": 350},
                {"id": 3, "envelopeId": 1, "name": "Bread", "amountCents": 425},
            ])
        );
    }

    #[tokio::test]
    async fn lists_spendings_of_one_envelope() {
        let server = get_test_server(get_ledger());

        let response = server
            .get(&format_endpoint(endpoints::ENVELOPE_SPENDINGS, 1))
            .await;

        response.assert_status_ok();
        let body = assert_success(&response);
        assert_eq!(body["envelope"]["name"], "Groceries");
        assert_eq!(
            body["spendings"],
            json!([
                {"id": 1, "envelopeId": 1, "name": "Coffee", "amountCents": 500},
                {"id": 3, "envelopeId": 1, "name": "Bread", "amountCents": 425},
            ])
        );
    }

    #[tokio::test]
    async fn missing_envelope_is_not_found() {
        let server = get_test_server(get_ledger());

        let response = server
            .get(&format_endpoint(endpoints::ENVELOPE_SPENDINGS, 999))
            .await;

        response.assert_status_not_found();
        assert_failure(&response, "not_found");
    }
}
