//! Result types for sales operations and reports.

use std::fmt;

use chrono::NaiveDate;
use domain::{ItemName, Money, SalesRecord};
use ledger::{LedgerError, LedgerReceipt};

/// What happened to ingredient stock after a sale was recorded or voided.
///
/// None of these fail the sale itself; they are reported alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientStatus {
    /// Stock was updated according to the item's recipe.
    Updated(LedgerReceipt),

    /// The sold item is not on the menu; stock untouched.
    ItemNotFound { name: ItemName },

    /// The item has no recipe; stock untouched.
    RecipeUnspecified { name: ItemName },

    /// The ledger rejected the change and rolled it back; stock untouched.
    Failed(LedgerError),
}

impl IngredientStatus {
    /// Returns true if stock was changed.
    pub fn is_updated(&self) -> bool {
        matches!(self, IngredientStatus::Updated(_))
    }
}

impl fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientStatus::Updated(receipt) => {
                write!(f, "Ingredients updated ({} affected)", receipt.applied.len())
            }
            IngredientStatus::ItemNotFound { name } => {
                write!(f, "Ingredients not updated: {name} is not on the menu")
            }
            IngredientStatus::RecipeUnspecified { name } => {
                write!(f, "Ingredients not updated: recipe for {name} is unspecified")
            }
            IngredientStatus::Failed(error) => write!(f, "Ingredients not updated: {error}"),
        }
    }
}

/// Outcome of recording or voiding a sale.
///
/// The record operation itself succeeded; `ingredients` reports the
/// independent stock step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleOutcome {
    pub record: SalesRecord,
    pub ingredients: IngredientStatus,
}

/// Sales of one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    pub date: NaiveDate,
    pub records: Vec<SalesRecord>,
    pub total_revenue: Money,
}

impl SalesReport {
    /// Returns true if nothing was sold that day.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
