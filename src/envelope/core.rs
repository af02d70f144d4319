use serde::{Deserialize, Serialize};

use crate::money::Cents;

/// Alias for the integer type used for envelope IDs.
pub type EnvelopeId = i64;

/// A named spending category with a fixed allocation out of the total budget,
/// e.g. 'Groceries' or 'Rent'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// The ID of the envelope.
    pub id: EnvelopeId,
    /// The name of the envelope, unique ignoring case.
    pub name: String,
    /// How much of the budget is allocated to the envelope.
    #[serde(rename = "amountCents")]
    pub amount: Cents,
}

impl Envelope {
    /// Whether `name` refers to this envelope's name, ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
