//! Implements a ledger store that lives in memory for the lifetime of the process.

use crate::{
    envelope::{Envelope, EnvelopeId},
    money::Cents,
    spending::{Spending, SpendingId},
    stores::LedgerStore,
};

/// Stores the budget, envelopes and spendings in vectors.
///
/// Everything is lost when the store is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryLedgerStore {
    budget: Cents,
    envelopes: Vec<Envelope>,
    spendings: Vec<Spending>,
    next_envelope_id: EnvelopeId,
    next_spending_id: SpendingId,
}

impl InMemoryLedgerStore {
    /// Create an empty store with a budget of zero.
    pub fn new() -> Self {
        Self {
            budget: Cents::ZERO,
            envelopes: Vec::new(),
            spendings: Vec::new(),
            next_envelope_id: 1,
            next_spending_id: 1,
        }
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn budget(&self) -> Cents {
        self.budget
    }

    fn set_budget(&mut self, budget: Cents) {
        self.budget = budget;
    }

    fn insert_envelope(&mut self, name: String, amount: Cents) -> Envelope {
        let envelope = Envelope {
            id: self.next_envelope_id,
            name,
            amount,
        };
        self.next_envelope_id += 1;
        self.envelopes.push(envelope.clone());

        envelope
    }

    fn envelopes(&self) -> Vec<Envelope> {
        self.envelopes.clone()
    }

    fn get_envelope(&self, id: EnvelopeId) -> Option<Envelope> {
        self.envelopes
            .iter()
            .find(|envelope| envelope.id == id)
            .cloned()
    }

    fn replace_envelope(&mut self, envelope: Envelope) -> bool {
        match self.envelopes.iter_mut().find(|e| e.id == envelope.id) {
            Some(existing) => {
                *existing = envelope;
                true
            }
            None => false,
        }
    }

    fn remove_envelope(&mut self, id: EnvelopeId) -> bool {
        let count_before = self.envelopes.len();
        self.envelopes.retain(|envelope| envelope.id != id);

        self.envelopes.len() != count_before
    }

    fn insert_spending(
        &mut self,
        envelope_id: EnvelopeId,
        name: String,
        amount: Cents,
    ) -> Spending {
        let spending = Spending {
            id: self.next_spending_id,
            envelope_id,
            name,
            amount,
        };
        self.next_spending_id += 1;
        self.spendings.push(spending.clone());

        spending
    }

    fn spendings(&self) -> Vec<Spending> {
        self.spendings.clone()
    }

    fn spendings_for(&self, envelope_id: EnvelopeId) -> Vec<Spending> {
        self.spendings
            .iter()
            .filter(|spending| spending.envelope_id == envelope_id)
            .cloned()
            .collect()
    }

    fn get_spending(&self, id: SpendingId) -> Option<Spending> {
        self.spendings
            .iter()
            .find(|spending| spending.id == id)
            .cloned()
    }

    fn remove_spending(&mut self, id: SpendingId) -> bool {
        let count_before = self.spendings.len();
        self.spendings.retain(|spending| spending.id != id);

        self.spendings.len() != count_before
    }

    fn remove_spendings_for(&mut self, envelope_id: EnvelopeId) -> usize {
        let count_before = self.spendings.len();
        self.spendings
            .retain(|spending| spending.envelope_id != envelope_id);

        count_before - self.spendings.len()
    }

    fn clear_spendings(&mut self) -> usize {
        let count = self.spendings.len();
        self.spendings.clear();

        count
    }
}
