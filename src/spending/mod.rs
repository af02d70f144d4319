//! Spendings and their endpoints.

mod core;
mod create_endpoint;
mod delete_endpoints;
mod list_endpoints;

pub use core::{Spending, SpendingId};
pub use create_endpoint::create_spending_endpoint;
pub use delete_endpoints::{
    delete_spending_endpoint, reset_all_spendings_endpoint, reset_envelope_spendings_endpoint,
};
pub use list_endpoints::{get_envelope_spendings_endpoint, get_spendings_endpoint};
