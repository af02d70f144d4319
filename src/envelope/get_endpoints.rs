//! Defines the endpoints for listing envelopes and getting a single envelope.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, endpoints::IdPath, envelope::EnvelopeId};

/// A route handler for listing all envelopes.
pub async fn get_envelopes_endpoint(State(state): State<AppState>) -> Result<Response, Error> {
    let envelopes = state.lock_ledger()?.envelopes();

    Ok(Json(json!({
        "success": true,
        "envelopes": envelopes,
    }))
    .into_response())
}

/// A route handler for getting an envelope and what is left of its allocation.
///
/// Responds with 404 if the envelope does not exist.
pub async fn get_envelope_endpoint(
    State(state): State<AppState>,
    path: IdPath<EnvelopeId>,
) -> Result<Response, Error> {
    let Path(envelope_id) = path?;
    let ledger = state.lock_ledger()?;
    let envelope = ledger.envelope(envelope_id)?;
    let remaining_cents = ledger.remaining_envelope_balance(envelope_id)?;

    Ok(Json(json!({
        "success": true,
        "envelope": envelope,
        "remainingCents": remaining_cents,
    }))
    .into_response())
}
