//! Populates a ledger with a month of demo data.

use crate::{Error, Ledger, LedgerStore};

const DEMO_BUDGET: f64 = 2000.0;

const DEMO_ENVELOPES: [(&str, f64); 5] = [
    ("Groceries", 400.0),
    ("Rent", 800.0),
    ("Transportation", 150.0),
    ("Entertainment", 100.0),
    ("Utilities", 200.0),
];

/// Spendings as (envelope index into [DEMO_ENVELOPES], name, amount).
const DEMO_SPENDINGS: [(usize, &str, f64); 5] = [
    (0, "Walmart grocery run", 85.5),
    (0, "Farmers market", 32.0),
    (2, "Gas station", 45.0),
    (3, "Movie tickets", 28.0),
    (4, "Electric bill", 95.0),
];

/// Set the demo budget and create the demo envelopes and spendings.
///
/// Everything goes through the same checks as client requests, so seeding a
/// ledger that already holds data may fail part way, e.g. with a duplicate
/// envelope name.
pub fn seed_demo_ledger<S: LedgerStore>(ledger: &mut Ledger<S>) -> Result<(), Error> {
    ledger.set_budget(DEMO_BUDGET)?;

    let mut envelope_ids = Vec::with_capacity(DEMO_ENVELOPES.len());
    for (name, amount) in DEMO_ENVELOPES {
        envelope_ids.push(ledger.create_envelope(name, amount)?.id);
    }

    for (envelope_index, name, amount) in DEMO_SPENDINGS {
        ledger.create_spending(envelope_ids[envelope_index], name, amount)?;
    }

    tracing::info!(
        "Seeded the ledger with {} envelopes and {} spendings",
        DEMO_ENVELOPES.len(),
        DEMO_SPENDINGS.len()
    );

    Ok(())
}
