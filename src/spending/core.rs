use serde::{Deserialize, Serialize};

use crate::{envelope::EnvelopeId, money::Cents};

/// Alias for the integer type used for spending IDs.
pub type SpendingId = i64;

/// One recorded transaction debited against an envelope's allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spending {
    /// The ID of the spending.
    pub id: SpendingId,
    /// The envelope the spending is debited from.
    pub envelope_id: EnvelopeId,
    /// What the money was spent on.
    pub name: String,
    /// How much was spent.
    #[serde(rename = "amountCents")]
    pub amount: Cents,
}
