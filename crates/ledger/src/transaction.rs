//! Ledger transaction with compensating rollback.

use domain::{EquivalenceSet, Ingredient, IngredientName};

use crate::error::{LedgerError, Result};
use crate::state::TransactionState;

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Deduct units from stock.
    Consume,
    /// Add units to stock.
    Replenish,
}

impl TransactionKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Consume => "consume",
            TransactionKind::Replenish => "replenish",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of a committed transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerReceipt {
    /// Direction of the committed transaction.
    pub kind: TransactionKind,

    /// Units applied per ingredient, merged, in first-seen order.
    pub applied: Vec<(IngredientName, u32)>,
}

impl LedgerReceipt {
    /// Returns the units applied to `name`, or zero.
    pub fn units_of(&self, name: &IngredientName) -> u32 {
        self.applied
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, units)| *units)
            .unwrap_or(0)
    }
}

/// One consume or replenish transaction over an ingredient collection.
///
/// Every successful [`apply`](Self::apply) mutates stock immediately and is
/// recorded in `applied`. [`rollback`](Self::rollback) reverses exactly the
/// recorded units. A transaction dropped while still open rolls itself back.
pub struct LedgerTransaction<'a> {
    ingredients: &'a mut EquivalenceSet<Ingredient>,
    kind: TransactionKind,
    applied: Vec<(IngredientName, u32)>,
    state: TransactionState,
}

impl<'a> LedgerTransaction<'a> {
    /// Opens a transaction over `ingredients`.
    pub fn begin(ingredients: &'a mut EquivalenceSet<Ingredient>, kind: TransactionKind) -> Self {
        Self {
            ingredients,
            kind,
            applied: Vec::new(),
            state: TransactionState::Open,
        }
    }

    /// Returns the transaction direction.
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Returns the current state.
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Returns the units applied so far, per ingredient.
    pub fn applied(&self) -> &[(IngredientName, u32)] {
        &self.applied
    }

    /// Applies `units` to the named ingredient's stock.
    ///
    /// On error nothing is changed by this call; earlier applications stay
    /// in place until the transaction is rolled back.
    pub fn apply(&mut self, name: &IngredientName, units: u32) -> Result<()> {
        if !self.state.is_open() {
            return Err(LedgerError::TransactionClosed { state: self.state });
        }

        let current = self
            .ingredients
            .find(name)
            .map_err(|_| LedgerError::IngredientNotFound { name: name.clone() })?
            .clone();

        let stock = match self.kind {
            TransactionKind::Consume => {
                current
                    .stock
                    .checked_sub(units)
                    .ok_or_else(|| LedgerError::IngredientNotEnough {
                        name: name.clone(),
                        required: units,
                        available: current.stock,
                    })?
            }
            TransactionKind::Replenish => {
                current
                    .stock
                    .checked_add(units)
                    .ok_or_else(|| LedgerError::StockOverflow {
                        name: name.clone(),
                        stock: current.stock,
                        units,
                    })?
            }
        };

        self.ingredients.replace(&current, current.with_stock(stock))?;
        self.record(name, units);

        tracing::debug!(
            ingredient = %name,
            kind = %self.kind,
            units,
            stock,
            "stock updated"
        );
        Ok(())
    }

    /// Closes the transaction, keeping every applied delta.
    pub fn commit(mut self) -> Result<LedgerReceipt> {
        if !self.state.is_open() {
            return Err(LedgerError::TransactionClosed { state: self.state });
        }
        self.state = TransactionState::Committed;

        metrics::counter!(
            "ledger_transactions_total",
            "kind" => self.kind.as_str(),
            "outcome" => "committed"
        )
        .increment(1);

        Ok(LedgerReceipt {
            kind: self.kind,
            applied: std::mem::take(&mut self.applied),
        })
    }

    /// Closes the transaction, reversing every applied delta.
    pub fn rollback(mut self) -> Result<()> {
        self.revert()
    }

    fn record(&mut self, name: &IngredientName, units: u32) {
        match self.applied.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => *total += units,
            None => self.applied.push((name.clone(), units)),
        }
    }

    fn revert(&mut self) -> Result<()> {
        if !self.state.is_open() {
            return Err(LedgerError::TransactionClosed { state: self.state });
        }
        self.state = TransactionState::RolledBack;

        for (name, units) in self.applied.iter().rev() {
            let current = self.ingredients.find(name)?.clone();
            // Stock moved by exactly `units` in the opposite direction, so
            // neither arm can leave the u32 range.
            let stock = match self.kind {
                TransactionKind::Consume => current.stock + units,
                TransactionKind::Replenish => current.stock - units,
            };
            self.ingredients
                .replace(&current, current.with_stock(stock))?;
        }

        metrics::counter!("ledger_rollbacks_total").increment(1);
        metrics::counter!(
            "ledger_transactions_total",
            "kind" => self.kind.as_str(),
            "outcome" => "rolled_back"
        )
        .increment(1);
        tracing::warn!(
            kind = %self.kind,
            reverted = self.applied.len(),
            "ledger transaction rolled back"
        );
        self.applied.clear();
        Ok(())
    }
}

impl Drop for LedgerTransaction<'_> {
    fn drop(&mut self) {
        if self.state.is_open()
            && let Err(error) = self.revert()
        {
            tracing::error!(%error, "rollback of abandoned ledger transaction failed");
        }
    }
}
