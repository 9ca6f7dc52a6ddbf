//! Ingredient stock ledger.
//!
//! A ledger call applies a list of per-ingredient stock deltas as one unit:
//! 1. Each delta is applied in order and recorded in the open transaction
//! 2. If any delta fails, every recorded delta is reversed
//! 3. Otherwise the transaction closes and yields a receipt
//!
//! Rollback replays exactly what was applied, never what was requested.

pub mod change;
pub mod error;
pub mod ledger;
pub mod state;
pub mod transaction;

pub use change::StockChange;
pub use error::{LedgerError, Result};
pub use ledger::IngredientLedger;
pub use state::TransactionState;
pub use transaction::{LedgerReceipt, LedgerTransaction, TransactionKind};
