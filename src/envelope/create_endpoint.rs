//! Defines the endpoint for creating a new envelope.

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

/// A route handler for creating an envelope from the body `{"name": <text>, "amount": <number>}`.
pub async fn create_envelope_endpoint(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<Response, Error> {
    let fields = Fields::from_body(body)?;
    let name = fields.text("name")?;
    let amount = fields.amount("amount")?;

    let envelope = state.lock_ledger()?.create_envelope(name, amount)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": envelope,
        })),
    )
        .into_response())
}
