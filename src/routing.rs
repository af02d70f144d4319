//! Application router configuration for the ledger's JSON API.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    AppState, Error,
    budget::{get_budget_endpoint, set_budget_endpoint},
    endpoints,
    envelope::{
        create_envelope_endpoint, delete_envelope_endpoint, edit_envelope_endpoint,
        get_envelope_endpoint, get_envelopes_endpoint,
    },
    spending::{
        create_spending_endpoint, delete_spending_endpoint, get_envelope_spendings_endpoint,
        get_spendings_endpoint, reset_all_spendings_endpoint, reset_envelope_spendings_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::BUDGET,
            get(get_budget_endpoint).post(set_budget_endpoint),
        )
        .route(
            endpoints::ENVELOPES,
            get(get_envelopes_endpoint).post(create_envelope_endpoint),
        )
        .route(
            endpoints::ENVELOPE,
            get(get_envelope_endpoint)
                .put(edit_envelope_endpoint)
                .delete(delete_envelope_endpoint),
        )
        .route(
            endpoints::ENVELOPE_SPENDINGS,
            get(get_envelope_spendings_endpoint)
                .post(create_spending_endpoint)
                .delete(reset_envelope_spendings_endpoint),
        )
        .route(
            endpoints::SPENDINGS,
            get(get_spendings_endpoint).delete(reset_all_spendings_endpoint),
        )
        .route(
            endpoints::SPENDING,
            axum::routing::delete(delete_spending_endpoint),
        )
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Get the budget, every envelope, and how much is left in each.
async fn get_summary_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    let summary = state.lock_ledger()?.summary();

    Ok(Json(json!({
        "success": true,
        "summary": summary,
    }))
    .into_response())
}

async fn get_404_not_found() -> Response {
    Error::RouteNotFound.into_response()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        Ledger, endpoints,
        test_utils::{assert_failure, assert_success, get_test_server},
    };

    #[tokio::test]
    async fn unknown_route_is_json_not_found() {
        let server = get_test_server(Ledger::new());

        let response = server.get("/api/nope").await;

        response.assert_status_not_found();
        assert_failure(&response, "not_found");
    }

    #[tokio::test]
    async fn summary_reports_every_envelope() {
        let mut ledger = Ledger::new();
        ledger.set_budget(1000.0).unwrap();
        let groceries = ledger.create_envelope("Groceries", 400.0).unwrap();
        ledger.create_envelope("Rent", 500.0).unwrap();
        ledger.create_spending(groceries.id, "Coffee", 12.5).unwrap();
        let server = get_test_server(ledger);

        let response = server.get(endpoints::SUMMARY).await;

        response.assert_status_ok();
        assert_eq!(
            assert_success(&response)["summary"],
            json!({
                "budgetCents": 100000,
                "allocatedCents": 90000,
                "remainingBudgetCents": 10000,
                "envelopes": [
                    {
                        "id": 1,
                        "name": "Groceries",
                        "amountCents": 40000,
                        "spentCents": 1250,
                        "remainingCents": 38750,
                    },
                    {
                        "id": 2,
                        "name": "Rent",
                        "amountCents": 50000,
                        "spentCents": 0,
                        "remainingCents": 50000,
                    },
                ],
            })
        );
    }
}
