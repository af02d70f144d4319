//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/envelopes/{envelope_id}', use [format_endpoint].

use axum::extract::{Path, rejection::PathRejection};

/// An ID read from a route parameter, or the reason axum could not parse it.
///
/// Handlers take this instead of `Path<T>` so that an ID such as `abc` is
/// reported with the app's own error response.
pub type IdPath<T> = Result<Path<T>, PathRejection>;

/// The route to set and get the total budget.
pub const BUDGET: &str = "/api/budget";
/// The route to create and list envelopes.
pub const ENVELOPES: &str = "/api/envelopes";
/// The route to get, update and delete a single envelope.
pub const ENVELOPE: &str = "/api/envelopes/{envelope_id}";
/// The route to create, list and reset the spendings of a single envelope.
pub const ENVELOPE_SPENDINGS: &str = "/api/envelopes/{envelope_id}/spendings";
/// The route to list and reset the spendings of all envelopes.
pub const SPENDINGS: &str = "/api/spendings";
/// The route to delete a single spending.
pub const SPENDING: &str = "/api/spendings/{spending_id}";
/// The route to get the budget, envelopes and derived totals in one response.
pub const SUMMARY: &str = "/api/summary";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/envelopes/{envelope_id}', '{envelope_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
