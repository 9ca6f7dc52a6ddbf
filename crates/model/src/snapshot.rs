//! Whole-aggregate snapshots and their plain export form.

use domain::{
    Account, EntityError, EquivalenceSet, Ingredient, Item, Person, Reservation, SalesRecord,
};
use serde::{Deserialize, Serialize};

/// One complete copy of all six entity collections.
///
/// Snapshots recorded in the history are never edited; the model mutates a
/// separate working copy and commits a clone of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateSnapshot {
    pub persons: EquivalenceSet<Person>,
    pub accounts: EquivalenceSet<Account>,
    pub ingredients: EquivalenceSet<Ingredient>,
    pub items: EquivalenceSet<Item>,
    pub reservations: EquivalenceSet<Reservation>,
    pub sales: EquivalenceSet<SalesRecord>,
}

impl AggregateSnapshot {
    /// Creates a snapshot with six empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if every collection pairs up element by element under
    /// its equivalence predicate.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.persons.is_equivalent_to(&other.persons)
            && self.accounts.is_equivalent_to(&other.accounts)
            && self.ingredients.is_equivalent_to(&other.ingredients)
            && self.items.is_equivalent_to(&other.items)
            && self.reservations.is_equivalent_to(&other.reservations)
            && self.sales.is_equivalent_to(&other.sales)
    }

    /// Returns the total number of entities across all collections.
    pub fn entity_count(&self) -> usize {
        self.persons.len()
            + self.accounts.len()
            + self.ingredients.len()
            + self.items.len()
            + self.reservations.len()
            + self.sales.len()
    }
}

/// Structured export form of a snapshot, for the storage layer.
///
/// Carries plain vectors with no uniqueness guarantee; converting back into
/// an [`AggregateSnapshot`] re-checks every collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotData {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub sales: Vec<SalesRecord>,
}

impl From<&AggregateSnapshot> for SnapshotData {
    fn from(snapshot: &AggregateSnapshot) -> Self {
        Self {
            persons: snapshot.persons.as_slice().to_vec(),
            accounts: snapshot.accounts.as_slice().to_vec(),
            ingredients: snapshot.ingredients.as_slice().to_vec(),
            items: snapshot.items.as_slice().to_vec(),
            reservations: snapshot.reservations.as_slice().to_vec(),
            sales: snapshot.sales.as_slice().to_vec(),
        }
    }
}

impl TryFrom<SnapshotData> for AggregateSnapshot {
    type Error = EntityError;

    /// Fails with `EntityError::Duplicate` on the first equivalent pair.
    fn try_from(data: SnapshotData) -> Result<Self, Self::Error> {
        Ok(Self {
            persons: EquivalenceSet::from_items(data.persons)?,
            accounts: EquivalenceSet::from_items(data.accounts)?,
            ingredients: EquivalenceSet::from_items(data.ingredients)?,
            items: EquivalenceSet::from_items(data.items)?,
            reservations: EquivalenceSet::from_items(data.reservations)?,
            sales: EquivalenceSet::from_items(data.sales)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use domain::{EntityKind, Money};

    fn sample() -> SnapshotData {
        SnapshotData {
            persons: vec![Person::new("Alex Yeoh", "87438807", "alex@example.com", "Geylang")],
            ingredients: vec![Ingredient::new("Cheese", "kilogram", Money::from_cents(1250), 20)],
            sales: vec![SalesRecord::new(
                NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
                "Garlic Bread",
                3,
                Money::from_cents(450),
            )],
            ..Default::default()
        }
    }

    #[test]
    fn test_export_then_import() {
        let snapshot = AggregateSnapshot::try_from(sample()).unwrap();
        assert_eq!(snapshot.entity_count(), 3);
        assert_eq!(SnapshotData::from(&snapshot), sample());
    }

    #[test]
    fn test_import_rejects_duplicates() {
        let mut data = sample();
        data.ingredients
            .push(Ingredient::new("Cheese", "gram", Money::from_cents(2), 1));

        let result = AggregateSnapshot::try_from(data);
        assert!(matches!(
            result,
            Err(EntityError::Duplicate {
                kind: EntityKind::Ingredient,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let data: SnapshotData = serde_json::from_str(r#"{"persons": []}"#).unwrap();
        let snapshot = AggregateSnapshot::try_from(data).unwrap();
        assert_eq!(snapshot, AggregateSnapshot::new());
    }

    #[test]
    fn test_equivalence_ignores_non_key_fields() {
        let a = AggregateSnapshot::try_from(sample()).unwrap();
        let mut data = sample();
        data.ingredients[0].stock = 1;
        let b = AggregateSnapshot::try_from(data).unwrap();

        assert!(a.is_equivalent_to(&b));
        assert_ne!(a, b);
    }
}
