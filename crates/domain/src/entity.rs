//! Core entity traits.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Tag;

/// The six managed entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Person,
    Account,
    Ingredient,
    Item,
    Reservation,
    SalesRecord,
}

impl EntityKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Account => "account",
            EntityKind::Ingredient => "ingredient",
            EntityKind::Item => "item",
            EntityKind::Reservation => "reservation",
            EntityKind::SalesRecord => "sales record",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for records stored in an [`EquivalenceSet`](crate::EquivalenceSet).
///
/// Identity is decided by a natural key rather than full field equality:
/// two values with the same key are the *same* entity even when other fields
/// differ, so adding the second one is a duplicate and changing them is an
/// edit. `PartialEq` stays strict and is what removal matches against.
pub trait Entity: Clone + PartialEq + fmt::Debug {
    /// The natural key identifying the entity.
    type Key: PartialEq + fmt::Display;

    /// Which collection this entity belongs to.
    const KIND: EntityKind;

    /// Returns the natural key.
    fn key(&self) -> Self::Key;

    /// Returns true if `other` denotes the same entity.
    fn same_as(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Entities whose schema carries tags.
pub trait Tagged: Entity {
    /// Returns the tag set.
    fn tags(&self) -> &BTreeSet<Tag>;

    /// Returns a copy of the entity with the tag set replaced.
    fn with_tags(&self, tags: BTreeSet<Tag>) -> Self;

    /// Returns true if the entity carries `tag`.
    fn has_tag(&self, tag: &Tag) -> bool {
        self.tags().contains(tag)
    }

    /// Returns a copy of the entity without `tag`.
    fn without_tag(&self, tag: &Tag) -> Self {
        let mut tags = self.tags().clone();
        tags.remove(tag);
        self.with_tags(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(EntityKind::Person.to_string(), "person");
        assert_eq!(EntityKind::SalesRecord.to_string(), "sales record");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&EntityKind::Ingredient).unwrap();
        let kind: EntityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, EntityKind::Ingredient);
    }
}
