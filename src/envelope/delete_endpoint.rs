//! Defines the endpoint for deleting an envelope.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, endpoints::IdPath, envelope::EnvelopeId};

/// A route handler for deleting an envelope together with its spendings.
pub async fn delete_envelope_endpoint(
    State(state): State<AppState>,
    path: IdPath<EnvelopeId>,
) -> Result<Response, Error> {
    let Path(envelope_id) = path?;
    let envelope = state.lock_ledger()?.delete_envelope(envelope_id)?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Envelope {} deleted", envelope.name),
    }))
    .into_response())
}
