//! Defines the endpoint for updating an envelope.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    endpoints::IdPath,
    envelope::EnvelopeId,
    json_body::{Fields, JsonBody},
};

/// A route handler for replacing the name and amount of an envelope.
///
/// The body has the same shape as for creating an envelope. Both fields are
/// required since the envelope is replaced as a whole.
pub async fn edit_envelope_endpoint(
    State(state): State<AppState>,
    path: IdPath<EnvelopeId>,
    body: JsonBody,
) -> Result<Response, Error> {
    let Path(envelope_id) = path?;
    let mut ledger = state.lock_ledger()?;
    // A missing envelope is reported before a bad body.
    ledger.envelope(envelope_id)?;

    let fields = Fields::from_body(body)?;
    let name = fields.text("name")?;
    let amount = fields.amount("amount")?;

    let updated_envelope = ledger.update_envelope(envelope_id, name, amount)?;

    Ok(Json(json!({
        "success": true,
        "updatedEnvelope": updated_envelope,
    }))
    .into_response())
}
