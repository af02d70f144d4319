//! Defines the ledger store trait.

use crate::{
    envelope::{Envelope, EnvelopeId},
    money::Cents,
    spending::{Spending, SpendingId},
};

/// Holds the budget, envelopes and spendings of a ledger.
///
/// Implementations are plain storage: they do not check that amounts fit in
/// the budget or that a spending's envelope exists, that is the job of the
/// [invariants](crate::invariants) module.
///
/// IDs are assigned from a counter per collection that starts at 1, only ever
/// increases and is never reset, even after the rows it produced are removed.
pub trait LedgerStore {
    /// The total budget.
    fn budget(&self) -> Cents;

    /// Replace the total budget.
    fn set_budget(&mut self, budget: Cents);

    /// Add an envelope with a fresh ID.
    fn insert_envelope(&mut self, name: String, amount: Cents) -> Envelope;

    /// All envelopes, in the order they were created.
    fn envelopes(&self) -> Vec<Envelope>;

    /// Get an envelope by its ID.
    fn get_envelope(&self, id: EnvelopeId) -> Option<Envelope>;

    /// Replace the envelope that has the same ID as `envelope`.
    ///
    /// Returns `false` if there is no such envelope.
    fn replace_envelope(&mut self, envelope: Envelope) -> bool;

    /// Remove an envelope, leaving its spendings alone.
    ///
    /// Returns `false` if there is no such envelope.
    fn remove_envelope(&mut self, id: EnvelopeId) -> bool;

    /// Add a spending with a fresh ID.
    fn insert_spending(&mut self, envelope_id: EnvelopeId, name: String, amount: Cents)
    -> Spending;

    /// All spendings, in the order they were created.
    fn spendings(&self) -> Vec<Spending>;

    /// The spendings debited from the envelope `envelope_id`.
    fn spendings_for(&self, envelope_id: EnvelopeId) -> Vec<Spending>;

    /// Get a spending by its ID.
    fn get_spending(&self, id: SpendingId) -> Option<Spending>;

    /// Remove a spending.
    ///
    /// Returns `false` if there is no such spending.
    fn remove_spending(&mut self, id: SpendingId) -> bool;

    /// Remove every spending debited from the envelope `envelope_id` and
    /// return how many were removed.
    fn remove_spendings_for(&mut self, envelope_id: EnvelopeId) -> usize;

    /// Remove every spending and return how many were removed.
    fn clear_spendings(&mut self) -> usize;
}
