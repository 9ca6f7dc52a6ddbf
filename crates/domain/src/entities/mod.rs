//! The six managed entity types.

mod account;
mod ingredient;
mod item;
mod person;
mod reservation;
mod sales;

pub use account::Account;
pub use ingredient::Ingredient;
pub use item::{Item, Recipe};
pub use person::Person;
pub use reservation::{Reservation, ReservationKey};
pub use sales::{SalesKey, SalesRecord};
