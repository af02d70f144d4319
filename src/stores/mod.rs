//! Contains the trait and implementation for objects that store the ledger's budget, envelopes and spendings.

mod ledger;
mod memory;

pub use ledger::LedgerStore;
pub use memory::InMemoryLedgerStore;
