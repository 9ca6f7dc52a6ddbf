//! All-or-nothing stock consumption and replenishment.

use domain::{EquivalenceSet, Ingredient, IngredientName};

use crate::change::StockChange;
use crate::error::{LedgerError, Result};
use crate::transaction::{LedgerReceipt, LedgerTransaction, TransactionKind};

/// Applies [`StockChange`]s to an ingredient collection atomically.
///
/// Either every entry of a change is applied, or the collection is left
/// exactly as it was before the call.
pub struct IngredientLedger<'a> {
    ingredients: &'a mut EquivalenceSet<Ingredient>,
}

impl<'a> IngredientLedger<'a> {
    /// Creates a ledger over `ingredients`.
    pub fn new(ingredients: &'a mut EquivalenceSet<Ingredient>) -> Self {
        Self { ingredients }
    }

    /// Returns the current stock of `name`.
    pub fn stock_of(&self, name: &IngredientName) -> Result<u32> {
        self.ingredients
            .find(name)
            .map(|ingredient| ingredient.stock)
            .map_err(|_| LedgerError::IngredientNotFound { name: name.clone() })
    }

    /// Deducts every entry of `required` from stock, or nothing.
    ///
    /// Fails with `IngredientNotFound` or `IngredientNotEnough` for the first
    /// entry that cannot be applied, after reversing the earlier ones.
    #[tracing::instrument(skip(self, required), fields(entries = required.len()))]
    pub fn consume(&mut self, required: &StockChange) -> Result<LedgerReceipt> {
        self.run(TransactionKind::Consume, required)
    }

    /// Adds every entry of `given` to stock, or nothing.
    #[tracing::instrument(skip(self, given), fields(entries = given.len()))]
    pub fn replenish(&mut self, given: &StockChange) -> Result<LedgerReceipt> {
        self.run(TransactionKind::Replenish, given)
    }

    /// Checks whether `required` could be consumed, without changing stock.
    ///
    /// Repeated ingredients are checked against their combined units.
    pub fn check_consume(
        ingredients: &EquivalenceSet<Ingredient>,
        required: &StockChange,
    ) -> Result<()> {
        let mut pending: Vec<(&IngredientName, u32)> = Vec::new();
        for (name, units) in required.entries() {
            let available = ingredients
                .find(name)
                .map_err(|_| LedgerError::IngredientNotFound { name: name.clone() })?
                .stock;
            let total = match pending.iter_mut().find(|(n, _)| *n == name) {
                Some((_, total)) => {
                    *total = total.saturating_add(units);
                    *total
                }
                None => {
                    pending.push((name, units));
                    units
                }
            };
            if total > available {
                return Err(LedgerError::IngredientNotEnough {
                    name: name.clone(),
                    required: total,
                    available,
                });
            }
        }
        Ok(())
    }

    fn run(&mut self, kind: TransactionKind, change: &StockChange) -> Result<LedgerReceipt> {
        let mut transaction = LedgerTransaction::begin(self.ingredients, kind);

        for (name, units) in change.entries() {
            if let Err(error) = transaction.apply(name, units) {
                tracing::warn!(
                    %error,
                    kind = %kind,
                    applied = transaction.applied().len(),
                    "ledger entry failed, rolling back"
                );
                transaction.rollback()?;
                return Err(error);
            }
        }

        transaction.commit()
    }
}
