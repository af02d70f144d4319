//! The rules that keep a ledger consistent.
//!
//! Two invariants must hold after every mutation:
//!
//! - the budget is at least the sum of all envelope allocations, and
//! - each envelope's allocation is at least the sum of its spendings.
//!
//! The functions here only read the store. The [Ledger](crate::Ledger) calls
//! the `check_*` functions before it mutates the store and only mutates the
//! store when the check passes.

use crate::{
    Error,
    envelope::{Envelope, EnvelopeId},
    error::Limit,
    money::{Cents, is_valid_money, to_cents},
    stores::LedgerStore,
};

/// The name and amount of an envelope that passed [check_envelope].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvelopeAdmission {
    /// The trimmed envelope name.
    pub name: String,
    /// The allocation in cents.
    pub amount: Cents,
}

/// The name and amount of a spending that passed [check_spending].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingAdmission {
    /// The trimmed spending name.
    pub name: String,
    /// The amount spent in cents.
    pub amount: Cents,
}

/// The sum of all envelope allocations.
pub fn total_envelope_allocation(store: &impl LedgerStore) -> Cents {
    store
        .envelopes()
        .iter()
        .map(|envelope| envelope.amount)
        .sum()
}

/// The part of the budget that is not allocated to an envelope.
pub fn remaining_budget(store: &impl LedgerStore) -> Cents {
    store.budget() - total_envelope_allocation(store)
}

/// The sum of the spendings debited from the envelope `envelope_id`.
pub fn total_spent(store: &impl LedgerStore, envelope_id: EnvelopeId) -> Cents {
    store
        .spendings_for(envelope_id)
        .iter()
        .map(|spending| spending.amount)
        .sum()
}

/// The part of an envelope's allocation that has not been spent.
///
/// # Errors
///
/// Returns [Error::EnvelopeNotFound] if there is no envelope with the ID `envelope_id`.
pub fn remaining_envelope_balance(
    store: &impl LedgerStore,
    envelope_id: EnvelopeId,
) -> Result<Cents, Error> {
    let envelope = store
        .get_envelope(envelope_id)
        .ok_or(Error::EnvelopeNotFound(envelope_id))?;

    Ok(envelope.amount - total_spent(store, envelope_id))
}

/// Check that a new budget of `amount` is valid money and covers the envelope allocations.
///
/// # Errors
///
/// Returns [Error::ValidationFailed] if `amount` is not valid money, or
/// [Error::BudgetLowerThanAllocated] if it is less than the allocated total.
pub fn check_budget(store: &impl LedgerStore, amount: f64) -> Result<Cents, Error> {
    if !is_valid_money(amount) {
        return Err(Error::ValidationFailed(format!(
            "The budget must be a positive amount with at most two decimal places, got {amount}"
        )));
    }

    let requested = to_cents(amount);
    let allocated = total_envelope_allocation(store);

    if requested < allocated {
        return Err(Error::BudgetLowerThanAllocated {
            requested,
            allocated,
        });
    }

    Ok(requested)
}

/// Check whether an envelope called `name` with the allocation `amount` can be stored.
///
/// When an envelope is being updated, pass it as `updating`: its current
/// allocation is credited back to the remaining budget and its own name does
/// not count as a duplicate.
///
/// The checks run in this order and the first failure is returned:
///
/// 1. [Error::BudgetNotSet] if the budget is zero.
/// 2. [Error::ValidationFailed] if `amount` is not valid money.
/// 3. [Error::ValidationFailed] if `name` is empty after trimming.
/// 4. [Error::DuplicateName] if another envelope has the same name, ignoring case.
/// 5. [Error::CapacityExceeded] if `amount` is more than the remaining budget.
/// 6. [Error::AllocationLowerThanSpent] if the updated envelope would hold
///    less than has been spent from it.
pub fn check_envelope(
    store: &impl LedgerStore,
    name: &str,
    amount: f64,
    updating: Option<&Envelope>,
) -> Result<EnvelopeAdmission, Error> {
    if store.budget() == Cents::ZERO {
        return Err(Error::BudgetNotSet);
    }

    if !is_valid_money(amount) {
        return Err(Error::ValidationFailed(format!(
            "The envelope's amount must be a positive amount with at most two decimal places, got {amount}"
        )));
    }

    let name = name.trim();

    if name.is_empty() {
        return Err(Error::ValidationFailed(
            "The envelope's name cannot be empty".to_owned(),
        ));
    }

    let updating_id = updating.map(|envelope| envelope.id);
    let is_duplicate = store
        .envelopes()
        .iter()
        .any(|envelope| envelope.has_name(name) && Some(envelope.id) != updating_id);

    if is_duplicate {
        return Err(Error::DuplicateName(name.to_owned()));
    }

    let requested = to_cents(amount);
    let freed = updating.map_or(Cents::ZERO, |envelope| envelope.amount);
    let available = remaining_budget(store) + freed;

    if requested > available {
        return Err(Error::CapacityExceeded {
            limit: Limit::Budget,
            requested,
            remaining: available,
        });
    }

    if let Some(envelope) = updating {
        let spent = total_spent(store, envelope.id);

        if requested < spent {
            return Err(Error::AllocationLowerThanSpent { requested, spent });
        }
    }

    Ok(EnvelopeAdmission {
        name: name.to_owned(),
        amount: requested,
    })
}

/// Check whether a spending called `name` of `amount` fits in `envelope`.
///
/// # Errors
///
/// Returns [Error::ValidationFailed] if `name` is empty after trimming or
/// `amount` is not valid money, or [Error::CapacityExceeded] if `amount` is
/// more than what is left in the envelope.
pub fn check_spending(
    store: &impl LedgerStore,
    envelope: &Envelope,
    name: &str,
    amount: f64,
) -> Result<SpendingAdmission, Error> {
    let name = name.trim();

    if name.is_empty() {
        return Err(Error::ValidationFailed(
            "The spending's name cannot be empty".to_owned(),
        ));
    }

    if !is_valid_money(amount) {
        return Err(Error::ValidationFailed(format!(
            "The spending's amount must be a positive amount with at most two decimal places, got {amount}"
        )));
    }

    let requested = to_cents(amount);
    let remaining = envelope.amount - total_spent(store, envelope.id);

    if requested > remaining {
        return Err(Error::CapacityExceeded {
            limit: Limit::Envelope(envelope.name.clone()),
            requested,
            remaining,
        });
    }

    Ok(SpendingAdmission {
        name: name.to_owned(),
        amount: requested,
    })
}

/// Check that the whole ledger is consistent.
///
/// A failure here means a bug let an invalid mutation through.
///
/// # Errors
///
/// Returns [Error::Internal] describing the first violation found.
pub fn verify(store: &impl LedgerStore) -> Result<(), Error> {
    let allocated = total_envelope_allocation(store);

    if allocated > store.budget() {
        return Err(Error::Internal(format!(
            "envelopes allocate {allocated} but the budget is {}",
            store.budget()
        )));
    }

    for envelope in store.envelopes() {
        let spent = total_spent(store, envelope.id);

        if spent > envelope.amount {
            return Err(Error::Internal(format!(
                "envelope {} has {spent} spent out of {}",
                envelope.id, envelope.amount
            )));
        }
    }

    for spending in store.spendings() {
        if store.get_envelope(spending.envelope_id).is_none() {
            return Err(Error::Internal(format!(
                "spending {} refers to the missing envelope {}",
                spending.id, spending.envelope_id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod remaining_tests {
    use crate::{
        Error,
        money::Cents,
        stores::{InMemoryLedgerStore, LedgerStore},
    };

    use super::{remaining_budget, remaining_envelope_balance, total_envelope_allocation};

    #[test]
    fn remaining_budget_subtracts_allocations() {
        let mut store = InMemoryLedgerStore::new();
        store.set_budget(Cents::new(200000));
        store.insert_envelope("Groceries".to_owned(), Cents::new(40000));
        store.insert_envelope("Rent".to_owned(), Cents::new(80000));

        assert_eq!(total_envelope_allocation(&store), Cents::new(120000));
        assert_eq!(remaining_budget(&store), Cents::new(80000));
    }

    #[test]
    fn remaining_envelope_balance_subtracts_its_spendings_only() {
        let mut store = InMemoryLedgerStore::new();
        store.set_budget(Cents::new(200000));
        let groceries = store.insert_envelope("Groceries".to_owned(), Cents::new(40000));
        let rent = store.insert_envelope("Rent".to_owned(), Cents::new(80000));
        store.insert_spending(groceries.id, "Coffee".to_owned(), Cents::new(500));
        store.insert_spending(rent.id, "March".to_owned(), Cents::new(80000));

        assert_eq!(
            remaining_envelope_balance(&store, groceries.id),
            Ok(Cents::new(39500))
        );
        assert_eq!(remaining_envelope_balance(&store, rent.id), Ok(Cents::ZERO));
    }

    #[test]
    fn remaining_envelope_balance_fails_on_missing_envelope() {
        let store = InMemoryLedgerStore::new();

        assert_eq!(
            remaining_envelope_balance(&store, 9),
            Err(Error::EnvelopeNotFound(9))
        );
    }
}



#[cfg(test)]
mod check_spending_tests {
    use crate::{
        Error,
        error::Limit,
        money::Cents,
        stores::{InMemoryLedgerStore, LedgerStore},
    };

    use super::{SpendingAdmission, check_spending};

    #[test]
    fn admits_spending_that_fits() {
        let mut store = InMemoryLedgerStore::new();
        store.set_budget(Cents::new(200000));
        let groceries = store.insert_envelope("Groceries".to_owned(), Cents::new(40000));

        assert_eq!(
            check_spending(&store, &groceries, " Coffee ", 5.0),
            Ok(SpendingAdmission {
                name: "Coffee".to_owned(),
                amount: Cents::new(500),
            })
        );
    }

    #[test]
    fn rejects_blank_name_and_invalid_amounts() {
        let mut store = InMemoryLedgerStore::new();
        store.set_budget(Cents::new(200000));
        let groceries = store.insert_envelope("Groceries".to_owned(), Cents::new(40000));

        assert!(matches!(
            check_spending(&store, &groceries, "", 5.0),
            Err(Error::ValidationFailed(_))
        ));

        for amount in [0.0, -5.0, 0.001] {
            assert!(
                matches!(
                    check_spending(&store, &groceries, "Coffee", amount),
                    Err(Error::ValidationFailed(_))
                ),
                "want validation error for {amount}"
            );
        }
    }

    #[test]
    fn rejects_spending_over_remaining_balance() {
        let mut store = InMemoryLedgerStore::new();
        store.set_budget(Cents::new(200000));
        let groceries = store.insert_envelope("Groceries".to_owned(), Cents::new(40000));
        store.insert_spending(groceries.id, "Coffee".to_owned(), Cents::new(500));

        assert_eq!(
            check_spending(&store, &groceries, "Feast", 395.01),
            Err(Error::CapacityExceeded {
                limit: Limit::Envelope("Groceries".to_owned()),
                requested: Cents::new(39501),
                remaining: Cents::new(39500),
            })
        );
        assert!(check_spending(&store, &groceries, "Feast", 395.0).is_ok());
    }
}
