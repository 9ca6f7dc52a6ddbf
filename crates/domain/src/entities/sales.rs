//! Daily sales records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::value_objects::{ItemName, Money};

/// Natural key of a sales record: one row per item per day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SalesKey {
    pub date: NaiveDate,
    pub name: ItemName,
}

impl fmt::Display for SalesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.name, self.date)
    }
}

/// Units of a menu item sold on one day at one price.
///
/// Quantity and price are values of the record: a second record with the
/// same date and item name is the same record, not a new sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub name: ItemName,
    pub quantity_sold: u32,
    pub price: Money,
}

impl SalesRecord {
    /// Creates a sales record.
    pub fn new(date: NaiveDate, name: impl Into<ItemName>, quantity_sold: u32, price: Money) -> Self {
        Self {
            date,
            name: name.into(),
            quantity_sold,
            price,
        }
    }

    /// Returns quantity sold times unit price.
    pub fn revenue(&self) -> Money {
        self.price.multiply(self.quantity_sold)
    }
}

impl Entity for SalesRecord {
    type Key = SalesKey;
    const KIND: EntityKind = EntityKind::SalesRecord;

    fn key(&self) -> SalesKey {
        SalesKey {
            date: self.date,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 11, d).unwrap()
    }

    #[test]
    fn test_quantity_and_price_do_not_change_identity() {
        let a = SalesRecord::new(day(1), "Garlic Bread", 3, Money::from_cents(450));
        let b = SalesRecord::new(day(1), "Garlic Bread", 10, Money::from_cents(500));
        assert!(a.same_as(&b));
    }

    #[test]
    fn test_other_day_is_different_record() {
        let a = SalesRecord::new(day(1), "Garlic Bread", 3, Money::from_cents(450));
        let b = SalesRecord::new(day(2), "Garlic Bread", 3, Money::from_cents(450));
        assert!(!a.same_as(&b));
    }

    #[test]
    fn test_revenue() {
        let record = SalesRecord::new(day(1), "Garlic Bread", 3, Money::from_cents(450));
        assert_eq!(record.revenue().cents(), 1350);
    }

    #[test]
    fn test_date_serializes_as_iso() {
        let record = SalesRecord::new(day(1), "Garlic Bread", 3, Money::from_cents(450));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-11-01");
    }
}
