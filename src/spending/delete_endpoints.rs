//! Defines the endpoints for deleting one spending or resetting the spendings of envelopes.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{AppState, Error, endpoints::IdPath, envelope::EnvelopeId, spending::SpendingId};

/// A route handler for deleting a single spending.
pub async fn delete_spending_endpoint(
    State(state): State<AppState>,
    path: IdPath<SpendingId>,
) -> Result<Response, Error> {
    let Path(spending_id) = path?;
    let spending = state.lock_ledger()?.delete_spending(spending_id)?;

    Ok(Json(json!({
        "success": true,
        "message": format!("{} was successfully deleted", spending.name),
    }))
    .into_response())
}

/// A route handler for deleting all spendings of one envelope.
///
/// The envelope keeps its allocation.
pub async fn reset_envelope_spendings_endpoint(
    State(state): State<AppState>,
    path: IdPath<EnvelopeId>,
) -> Result<Response, Error> {
    let Path(envelope_id) = path?;
    let mut ledger = state.lock_ledger()?;
    let envelope = ledger.envelope(envelope_id)?;
    ledger.reset_envelope_spendings(envelope_id)?;

    Ok(Json(json!({
        "success": true,
        "message": format!(
            "All spendings for {} envelope were successfully deleted",
            envelope.name
        ),
    }))
    .into_response())
}

/// A route handler for deleting the spendings of every envelope.
pub async fn reset_all_spendings_endpoint(
    State(state): State<AppState>,
) -> Result<Response, Error> {
    state.lock_ledger()?.reset_all_spendings();

    Ok(Json(json!({
        "success": true,
        "message": "Spendings were successfully reset",
    }))
    .into_response())
}
