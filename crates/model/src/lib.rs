//! Transactional aggregate model for the restaurant records.
//!
//! A [`Model`] owns a [`VersionedHistory`](history::VersionedHistory) of
//! [`AggregateSnapshot`]s and a working copy of the newest one. A command:
//! 1. Validates against the read-only model
//! 2. Mutates the working snapshot
//! 3. Commits it to history, or discards it on failure
//!
//! Recording a sale is the one mutation whose second step (consuming the
//! recipe from stock) may fail without failing the command; see
//! [`SaleOutcome`].

pub mod command;
pub mod error;
pub mod model;
pub mod outcome;
pub mod snapshot;
pub mod view;

pub use command::{Command, CommandResult, CommandState};
pub use error::{ModelError, Result};
pub use model::Model;
pub use outcome::{IngredientStatus, SaleOutcome, SalesReport};
pub use snapshot::{AggregateSnapshot, SnapshotData};
pub use view::{Filter, FilteredView, Filters, SnapshotMember};
