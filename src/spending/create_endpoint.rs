//! Defines the endpoint for recording a spending against an envelope.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    endpoints::IdPath,
    envelope::EnvelopeId,
    json_body::{Fields, JsonBody},
};

/// A route handler for creating a spending from the body `{"name": <text>, "amount": <number>}`.
pub async fn create_spending_endpoint(
    State(state): State<AppState>,
    path: IdPath<EnvelopeId>,
    body: JsonBody,
) -> Result<Response, Error> {
    let Path(envelope_id) = path?;
    let mut ledger = state.lock_ledger()?;
    ledger.envelope(envelope_id)?;

    let fields = Fields::from_body(body)?;
    let name = fields.text("name")?;
    let amount = fields.amount("amount")?;

    let spending = ledger.create_spending(envelope_id, name, amount)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "spending": spending,
        })),
    )
        .into_response())
}
