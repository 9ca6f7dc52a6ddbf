//! Ledger error types.

use domain::{EntityError, IngredientName};
use thiserror::Error;

use crate::state::TransactionState;

/// Errors that can occur during ledger operations.
///
/// Errors raised while applying a change are only returned after the
/// change has been fully rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No ingredient with this name is stocked.
    #[error("Ingredient not found: {name}")]
    IngredientNotFound { name: IngredientName },

    /// Stock is lower than the units required.
    #[error("Not enough {name}: required {required}, available {available}")]
    IngredientNotEnough {
        name: IngredientName,
        required: u32,
        available: u32,
    },

    /// Adding units would exceed the representable stock level.
    #[error("Stock overflow for {name}: {stock} + {units}")]
    StockOverflow {
        name: IngredientName,
        stock: u32,
        units: u32,
    },

    /// Scaling a recipe by the quantity sold overflowed.
    #[error("Quantity overflow for {name}: {units} x {factor}")]
    QuantityOverflow {
        name: IngredientName,
        units: u32,
        factor: u32,
    },

    /// The transaction has already been committed or rolled back.
    #[error("Transaction is {state}, expected Open")]
    TransactionClosed { state: TransactionState },

    /// Writing the new stock level back into the collection failed.
    #[error("Entity error: {0}")]
    Entity(#[from] EntityError),
}

/// Convenience type alias for ledger results.
pub type Result<T> = std::result::Result<T, LedgerError>;
