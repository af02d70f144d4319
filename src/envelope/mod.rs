//! Envelopes and their endpoints.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoints;

pub use core::{Envelope, EnvelopeId};
pub use create_endpoint::create_envelope_endpoint;
pub use delete_endpoint::delete_envelope_endpoint;
pub use edit_endpoint::edit_envelope_endpoint;
pub use get_endpoints::{get_envelope_endpoint, get_envelopes_endpoint};
