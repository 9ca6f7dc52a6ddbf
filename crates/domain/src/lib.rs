//! Domain layer for the restaurant record-keeping core.
//!
//! This crate provides:
//! - Value objects (`Money`, names, `Tag`)
//! - The `Entity` trait and its natural-key identity
//! - `EquivalenceSet`, the uniqueness-enforcing ordered collection
//! - The six entity types: customers, accounts, ingredients, menu items,
//!   reservations, and sales records

pub mod entities;
pub mod entity;
pub mod equivalence_set;
pub mod error;
pub mod value_objects;

pub use entities::{
    Account, Ingredient, Item, Person, Recipe, Reservation, ReservationKey, SalesKey, SalesRecord,
};
pub use entity::{Entity, EntityKind, Tagged};
pub use equivalence_set::{EquivalenceSet, SameAs};
pub use error::EntityError;
pub use value_objects::{IngredientName, ItemName, Money, Name, Tag, Username};
