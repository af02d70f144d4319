//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{envelope::EnvelopeId, money::Cents, spending::SpendingId};

/// What an amount was checked against when it did not fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    /// The unallocated part of the total budget.
    Budget,
    /// The unspent part of the named envelope's allocation.
    Envelope(String),
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::Budget => write!(f, "the remaining budget"),
            Limit::Envelope(name) => write!(f, "the remaining balance of the envelope {name}"),
        }
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user input was malformed or out of range, e.g. an amount with
    /// three decimal places, a zero amount, an empty name or a missing field.
    #[error("{0}")]
    ValidationFailed(String),

    /// An envelope was created before a budget was set.
    #[error("A budget must be set to create an envelope")]
    BudgetNotSet,

    /// Another envelope already uses the name, ignoring case.
    #[error("An envelope with that name already exists: {0}")]
    DuplicateName(String),

    /// The amount is more than what is left in the budget or envelope.
    ///
    /// `remaining` is included so that clients can react without querying
    /// the ledger again.
    #[error(
        "The amount of {requested} is greater than {limit}: {remaining} ({} cents)",
        remaining.as_i64()
    )]
    CapacityExceeded {
        /// What the amount was checked against.
        limit: Limit,
        /// The amount that was asked for.
        requested: Cents,
        /// The amount that was available.
        remaining: Cents,
    },

    /// The budget was lowered below the amount already allocated to envelopes.
    #[error(
        "The new budget of {requested} must be at least the current envelope total of {allocated}"
    )]
    BudgetLowerThanAllocated {
        /// The budget that was asked for.
        requested: Cents,
        /// The sum of all envelope allocations.
        allocated: Cents,
    },

    /// An envelope was resized below what has already been spent from it.
    #[error("The new amount of {requested} must be at least the {spent} already spent")]
    AllocationLowerThanSpent {
        /// The allocation that was asked for.
        requested: Cents,
        /// The sum of the envelope's spendings.
        spent: Cents,
    },

    /// There is no envelope with the ID.
    #[error("The envelope {0} does not exist")]
    EnvelopeNotFound(EnvelopeId),

    /// There is no spending with the ID.
    #[error("The spending {0} does not exist")]
    SpendingNotFound(SpendingId),

    /// The requested route does not exist.
    #[error("The requested resource could not be found")]
    RouteNotFound,

    /// Could not acquire the ledger lock.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// The ledger reached a state that should be impossible.
    ///
    /// The string should only be logged for debugging on the server.
    #[error("internal ledger fault: {0}")]
    Internal(String),
}

impl Error {
    /// A stable identifier for the kind of failure, used in JSON error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::ValidationFailed(_) => "validation_failed",
            Error::BudgetNotSet => "budget_not_set",
            Error::DuplicateName(_) => "duplicate_name",
            Error::CapacityExceeded { .. } => "capacity_exceeded",
            Error::BudgetLowerThanAllocated { .. } => "budget_lower_than_allocated",
            Error::AllocationLowerThanSpent { .. } => "allocation_lower_than_spent",
            Error::EnvelopeNotFound(_) | Error::SpendingNotFound(_) | Error::RouteNotFound => {
                "not_found"
            }
            Error::LedgerLockError | Error::Internal(_) => "internal",
        }
    }

    /// The HTTP status code that best describes the error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::ValidationFailed(_)
            | Error::BudgetNotSet
            | Error::DuplicateName(_)
            | Error::CapacityExceeded { .. }
            | Error::BudgetLowerThanAllocated { .. }
            | Error::AllocationLowerThanSpent { .. } => StatusCode::BAD_REQUEST,
            Error::EnvelopeNotFound(_) | Error::SpendingNotFound(_) | Error::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            Error::LedgerLockError | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(error) => Error::ValidationFailed(error.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                Error::ValidationFailed("Request body cannot be empty.".to_owned())
            }
            rejection => {
                tracing::debug!("Rejected JSON body: {}", rejection.body_text());
                Error::ValidationFailed("Request body must be valid JSON.".to_owned())
            }
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        // No envelope or spending can have an ID that is not a number.
        tracing::debug!("Rejected path: {}", rejection.body_text());
        Error::RouteNotFound
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            // Internal details are not intended to be shown to the client.
            Error::LedgerLockError | Error::Internal(_) => {
                tracing::error!("An unexpected error occurred: {}", self);
                json!({
                    "success": false,
                    "kind": self.kind(),
                    "message": "An unexpected error occurred, check the server logs for more details.",
                })
            }
            Error::CapacityExceeded { remaining, .. } => json!({
                "success": false,
                "kind": self.kind(),
                "message": self.to_string(),
                "remainingCents": remaining,
            }),
            error => json!({
                "success": false,
                "kind": error.kind(),
                "message": error.to_string(),
            }),
        };

        (status_code, Json(body)).into_response()
    }
}
