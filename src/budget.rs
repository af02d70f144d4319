//! Defines the endpoints for setting and getting the total budget.
//!
//! The budget is a single value, so POST is used for both creating and replacing it.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    json_body::{Fields, JsonBody},
};

/// A route handler for setting the total budget from the body `{"budget": <number>}`.
pub async fn set_budget_endpoint(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Response, Error> {
    let fields = Fields::from_body(body)?;
    let amount = fields.amount("budget")?;

    let budget_cents = state.lock_ledger()?.set_budget(amount)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "budgetCents": budget_cents,
        })),
    )
        .into_response())
}

/// A route handler for getting the total budget and the part of it that is not allocated.
pub async fn get_budget_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    let ledger = state.lock_ledger()?;

    Ok(Json(json!({
        "success": true,
        "budgetCents": ledger.budget(),
        "remainingBudgetCents": ledger.remaining_budget(),
    }))
    .into_response())
}
