//! The operations that read and change a ledger.
//!
//! Every mutating operation runs the checks in [invariants](crate::invariants)
//! first and only touches the store once they pass, so a failed operation
//! leaves the ledger exactly as it was.

use serde::Serialize;

use crate::{
    Error,
    envelope::{Envelope, EnvelopeId},
    invariants::{
        check_budget, check_envelope, check_spending, remaining_budget,
        remaining_envelope_balance, total_envelope_allocation, total_spent, verify,
    },
    money::Cents,
    spending::{Spending, SpendingId},
    stores::{InMemoryLedgerStore, LedgerStore},
};

/// A budget split into envelopes, and the spendings debited from them.
#[derive(Debug, Clone, Default)]
pub struct Ledger<S = InMemoryLedgerStore> {
    store: S,
}

/// An envelope with how much of it has been spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeSummary {
    /// The envelope.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The sum of the envelope's spendings.
    pub spent_cents: Cents,
    /// The envelope's allocation minus what has been spent.
    pub remaining_cents: Cents,
}

/// The state of the whole ledger with the derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// The total budget.
    pub budget_cents: Cents,
    /// The sum of all envelope allocations.
    pub allocated_cents: Cents,
    /// The budget minus the allocations.
    pub remaining_budget_cents: Cents,
    /// Every envelope, in the order they were created.
    pub envelopes: Vec<EnvelopeSummary>,
}

impl Ledger<InMemoryLedgerStore> {
    /// Create an empty ledger held in memory.
    pub fn new() -> Self {
        Self::with_store(InMemoryLedgerStore::new())
    }
}

impl<S: LedgerStore> Ledger<S> {
    /// Create a ledger on top of `store`.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// The store holding the ledger's state.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the total budget.
    ///
    /// # Errors
    ///
    /// Returns [Error::ValidationFailed] if `amount` is not valid money, or
    /// [Error::BudgetLowerThanAllocated] if it would not cover the envelopes.
    pub fn set_budget(&mut self, amount: f64) -> Result<Cents, Error> {
        let budget = check_budget(&self.store, amount).inspect_err(log_rejection)?;

        self.store.set_budget(budget);
        tracing::info!("Set the budget to {budget}");
        self.debug_verify()?;

        Ok(budget)
    }

    /// The total budget, zero if it has not been set.
    pub fn budget(&self) -> Cents {
        self.store.budget()
    }

    /// The part of the budget that is not allocated to an envelope.
    pub fn remaining_budget(&self) -> Cents {
        remaining_budget(&self.store)
    }

    /// The part of an envelope's allocation that has not been spent.
    ///
    /// # Errors
    ///
    /// Returns [Error::EnvelopeNotFound] if the envelope does not exist.
    pub fn remaining_envelope_balance(&self, envelope_id: EnvelopeId) -> Result<Cents, Error> {
        remaining_envelope_balance(&self.store, envelope_id)
    }

    /// Create an envelope called `name` with `amount` allocated from the budget.
    ///
    /// # Errors
    ///
    /// Returns the first failing check of [check_envelope].
    pub fn create_envelope(&mut self, name: &str, amount: f64) -> Result<Envelope, Error> {
        let admission = check_envelope(&self.store, name, amount, None).inspect_err(log_rejection)?;

        let envelope = self.store.insert_envelope(admission.name, admission.amount);
        tracing::info!(
            "Created envelope {} \"{}\" with {}",
            envelope.id,
            envelope.name,
            envelope.amount
        );
        self.debug_verify()?;

        Ok(envelope)
    }

    /// All envelopes, in the order they were created.
    pub fn envelopes(&self) -> Vec<Envelope> {
        self.store.envelopes()
    }

    /// Get an envelope by its ID.
    ///
    /// # Errors
    ///
    /// Returns [Error::EnvelopeNotFound] if the envelope does not exist.
    pub fn envelope(&self, id: EnvelopeId) -> Result<Envelope, Error> {
        self.store
            .get_envelope(id)
            .ok_or(Error::EnvelopeNotFound(id))
    }

    /// Replace the name and allocation of an envelope, keeping its ID.
    ///
    /// The envelope's current allocation counts as available, so an envelope
    /// can be resized without shrinking it to zero first.
    ///
    /// # Errors
    ///
    /// Returns [Error::EnvelopeNotFound] if the envelope does not exist,
    /// otherwise the first failing check of [check_envelope].
    pub fn update_envelope(
        &mut self,
        id: EnvelopeId,
        name: &str,
        amount: f64,
    ) -> Result<Envelope, Error> {
        let current = self.envelope(id)?;
        let admission =
            check_envelope(&self.store, name, amount, Some(&current)).inspect_err(log_rejection)?;

        let updated = Envelope {
            id,
            name: admission.name,
            amount: admission.amount,
        };

        if !self.store.replace_envelope(updated.clone()) {
            return Err(Error::Internal(format!(
                "envelope {id} disappeared while it was being updated"
            )));
        }

        tracing::info!(
            "Updated envelope {id} from \"{}\" with {} to \"{}\" with {}",
            current.name,
            current.amount,
            updated.name,
            updated.amount
        );
        self.debug_verify()?;

        Ok(updated)
    }

    /// Delete an envelope and all of its spendings.
    ///
    /// # Errors
    ///
    /// Returns [Error::EnvelopeNotFound] if the envelope does not exist.
    pub fn delete_envelope(&mut self, id: EnvelopeId) -> Result<Envelope, Error> {
        let envelope = self.envelope(id)?;

        let removed_spendings = self.store.remove_spendings_for(id);

        if !self.store.remove_envelope(id) {
            return Err(Error::Internal(format!(
                "envelope {id} disappeared while it was being deleted"
            )));
        }

        tracing::info!(
            "Deleted envelope {id} \"{}\" and its {removed_spendings} spending(s)",
            envelope.name
        );
        self.debug_verify()?;

        Ok(envelope)
    }

    /// Record a spending of `amount` against the envelope `envelope_id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::EnvelopeNotFound] if the envelope does not exist,
    /// otherwise the first failing check of [check_spending].
    pub fn create_spending(
        &mut self,
        envelope_id: EnvelopeId,
        name: &str,
        amount: f64,
    ) -> Result<Spending, Error> {
        let envelope = self.envelope(envelope_id)?;
        let admission =
            check_spending(&self.store, &envelope, name, amount).inspect_err(log_rejection)?;

        let spending = self
            .store
            .insert_spending(envelope_id, admission.name, admission.amount);
        tracing::info!(
            "Recorded spending {} \"{}\" of {} against envelope {envelope_id}",
            spending.id,
            spending.name,
            spending.amount
        );
        self.debug_verify()?;

        Ok(spending)
    }

    /// All spendings, or only those of the envelope `envelope_id`.
    ///
    /// Filtering by an envelope that does not exist gives an empty list.
    pub fn spendings(&self, envelope_id: Option<EnvelopeId>) -> Vec<Spending> {
        match envelope_id {
            Some(envelope_id) => self.store.spendings_for(envelope_id),
            None => self.store.spendings(),
        }
    }

    /// Delete a single spending.
    ///
    /// # Errors
    ///
    /// Returns [Error::SpendingNotFound] if the spending does not exist.
    pub fn delete_spending(&mut self, id: SpendingId) -> Result<Spending, Error> {
        let spending = self
            .store
            .get_spending(id)
            .ok_or(Error::SpendingNotFound(id))?;

        if !self.store.remove_spending(id) {
            return Err(Error::Internal(format!(
                "spending {id} disappeared while it was being deleted"
            )));
        }

        tracing::info!("Deleted spending {id} \"{}\"", spending.name);

        Ok(spending)
    }

    /// Delete all spendings of one envelope, keeping the envelope's allocation.
    ///
    /// # Errors
    ///
    /// Returns [Error::EnvelopeNotFound] if the envelope does not exist.
    pub fn reset_envelope_spendings(&mut self, envelope_id: EnvelopeId) -> Result<usize, Error> {
        let envelope = self.envelope(envelope_id)?;

        let removed = self.store.remove_spendings_for(envelope_id);
        tracing::info!(
            "Reset envelope {envelope_id} \"{}\", removed {removed} spending(s)",
            envelope.name
        );

        Ok(removed)
    }

    /// Delete every spending of every envelope.
    pub fn reset_all_spendings(&mut self) -> usize {
        let removed = self.store.clear_spendings();
        tracing::info!("Reset all envelopes, removed {removed} spending(s)");

        removed
    }

    /// The budget, the allocated and remaining totals, and every envelope's spent and remaining amounts.
    pub fn summary(&self) -> LedgerSummary {
        let envelopes = self
            .store
            .envelopes()
            .into_iter()
            .map(|envelope| {
                let spent_cents = total_spent(&self.store, envelope.id);

                EnvelopeSummary {
                    remaining_cents: envelope.amount - spent_cents,
                    spent_cents,
                    envelope,
                }
            })
            .collect();

        let allocated_cents = total_envelope_allocation(&self.store);

        LedgerSummary {
            budget_cents: self.store.budget(),
            allocated_cents,
            remaining_budget_cents: self.store.budget() - allocated_cents,
            envelopes,
        }
    }

    /// In debug builds, check that a mutation kept the ledger's invariants.
    ///
    /// A violation is reported as [Error::Internal] rather than a panic, since
    /// callers may be holding the ledger lock.
    fn debug_verify(&self) -> Result<(), Error> {
        if !cfg!(debug_assertions) {
            return Ok(());
        }

        verify(&self.store).inspect_err(|error| {
            tracing::error!("The ledger is inconsistent after a mutation: {error}");
        })
    }
}

fn log_rejection(error: &Error) {
    tracing::debug!("Rejected ledger operation: {error}");
}

#[cfg(test)]
mod budget_tests {
    use crate::{Error, Ledger, money::Cents};

    #[test]
    fn budget_starts_at_zero() {
        let ledger = Ledger::new();

        assert_eq!(ledger.budget(), Cents::ZERO);
    }

    #[test]
    fn set_budget_stores_cents() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.set_budget(2000.0), Ok(Cents::new(200000)));
        assert_eq!(ledger.budget(), Cents::new(200000));
    }

    #[test]
    fn set_budget_rejects_amount_too_large_for_cents() {
        let mut ledger = Ledger::new();

        assert!(matches!(
            ledger.set_budget(1e17),
            Err(Error::ValidationFailed(_))
        ));
        assert_eq!(ledger.budget(), Cents::ZERO);
    }

    #[test]
    fn set_budget_can_raise_and_lower_budget() {
        let mut ledger = Ledger::new();
        ledger.set_budget(2000.0).unwrap();
        ledger.create_envelope("Groceries", 400.0).unwrap();

        assert_eq!(ledger.set_budget(3000.0), Ok(Cents::new(300000)));
        assert_eq!(ledger.set_budget(400.0), Ok(Cents::new(40000)));
        assert_eq!(ledger.remaining_budget(), Cents::ZERO);
    }

    #[test]
    fn failed_set_budget_keeps_old_budget() {
        let mut ledger = Ledger::new();
        ledger.set_budget(2000.0).unwrap();
        ledger.create_envelope("Groceries", 400.0).unwrap();

        assert_eq!(
            ledger.set_budget(0.01),
            Err(Error::BudgetLowerThanAllocated {
                requested: Cents::new(1),
                allocated: Cents::new(40000),
            })
        );
        assert!(matches!(ledger.set_budget(-1.0), Err(Error::ValidationFailed(_))));
        assert_eq!(ledger.budget(), Cents::new(200000));
    }
}

#[cfg(test)]
mod envelope_tests {
    use crate::{Error, Ledger, envelope::Envelope, money::Cents};

    fn get_ledger_with_budget() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.set_budget(2000.0).unwrap();
        ledger
    }

    #[test]
    fn create_envelope_allocates_from_budget() {
        let mut ledger = get_ledger_with_budget();

        let envelope = ledger.create_envelope("Groceries", 400.0).unwrap();

        assert_eq!(
            envelope,
            Envelope {
                id: 1,
                name: "Groceries".to_owned(),
                amount: Cents::new(40000),
            }
        );
        assert_eq!(ledger.remaining_budget(), Cents::new(160000));
        assert_eq!(ledger.envelope(envelope.id), Ok(envelope.clone()));
        assert_eq!(ledger.envelopes(), vec![envelope]);
    }

    #[test]
    fn create_envelope_fails_without_budget() {
        let mut ledger = Ledger::new();

        assert_eq!(
            ledger.create_envelope("Groceries", 400.0),
            Err(Error::BudgetNotSet)
        );
        assert!(ledger.envelopes().is_empty());
    }

    #[test]
    fn get_missing_envelope_fails() {
        let ledger = get_ledger_with_budget();

        assert_eq!(ledger.envelope(1), Err(Error::EnvelopeNotFound(1)));
    }

    #[test]
    fn update_envelope_keeps_id() {
        let mut ledger = get_ledger_with_budget();
        let groceries = ledger.create_envelope("Groceries", 400.0).unwrap();

        let updated = ledger
            .update_envelope(groceries.id, "Food", 500.0)
            .unwrap();

        assert_eq!(
            updated,
            Envelope {
                id: groceries.id,
                name: "Food".to_owned(),
                amount: Cents::new(50000),
            }
        );
        assert_eq!(ledger.envelopes(), vec![updated]);
        assert_eq!(ledger.remaining_budget(), Cents::new(150000));
    }

    #[test]
    fn update_envelope_amount_only_is_not_a_duplicate() {
        let mut ledger = get_ledger_with_budget();
        let groceries = ledger.create_envelope("Groceries", 400.0).unwrap();

        assert!(
            ledger
                .update_envelope(groceries.id, "Groceries", 300.0)
                .is_ok()
        );
    }

    #[test]
    fn update_envelope_can_use_all_of_its_own_allocation() {
        let mut ledger = get_ledger_with_budget();
        let groceries = ledger.create_envelope("Groceries", 1500.0).unwrap();
        ledger.create_envelope("Rent", 500.0).unwrap();

        assert!(
            ledger
                .update_envelope(groceries.id, "Groceries", 1500.0)
                .is_ok()
        );
        assert!(matches!(
            ledger.update_envelope(groceries.id, "Groceries", 1500.5),
            Err(Error::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn update_missing_envelope_fails() {
        let mut ledger = get_ledger_with_budget();

        assert_eq!(
            ledger.update_envelope(3, "Groceries", 1.0),
            Err(Error::EnvelopeNotFound(3))
        );
    }

    #[test]
    fn delete_envelope_cascades_to_spendings() {
        let mut ledger = get_ledger_with_budget();
        let groceries = ledger.create_envelope("Groceries", 400.0).unwrap();
        let rent = ledger.create_envelope("Rent", 800.0).unwrap();
        ledger.create_spending(groceries.id, "Coffee", 5.0).unwrap();
        ledger.create_spending(groceries.id, "Bread", 4.5).unwrap();
        let march = ledger.create_spending(rent.id, "March", 800.0).unwrap();

        assert_eq!(ledger.delete_envelope(groceries.id), Ok(groceries.clone()));

        assert_eq!(ledger.envelopes(), vec![rent]);
        assert_eq!(ledger.spendings(None), vec![march]);
        assert_eq!(ledger.spendings(Some(groceries.id)), vec![]);
        assert_eq!(ledger.remaining_budget(), Cents::new(120000));
    }

    #[test]
    fn delete_missing_envelope_fails() {
        let mut ledger = get_ledger_with_budget();

        assert_eq!(ledger.delete_envelope(1), Err(Error::EnvelopeNotFound(1)));
    }

    #[test]
    fn deleted_envelope_ids_are_not_reused() {
        let mut ledger = get_ledger_with_budget();
        let first = ledger.create_envelope("Groceries", 400.0).unwrap();
        ledger.delete_envelope(first.id).unwrap();

        let second = ledger.create_envelope("Groceries", 400.0).unwrap();

        assert_eq!(second.id, first.id + 1);
    }
}
