//! Ordered collection that rejects equivalent elements.

use std::cmp::Ordering;
use std::fmt;

use crate::entity::Entity;
use crate::error::{EntityError, Result};

/// Equivalence predicate deciding whether two elements are the same entity.
pub type SameAs<T> = fn(&T, &T) -> bool;

/// Insertion-ordered collection in which no two elements are equivalent.
///
/// The equivalence predicate is injected at construction and defaults to
/// [`Entity::same_as`]. It governs uniqueness only: [`add`](Self::add),
/// [`replace`](Self::replace) and [`contains_equivalent`](Self::contains_equivalent).
/// Lookups through [`find`](Self::find) and [`position`](Self::position) always
/// match on [`Entity::key`]. Positions are stable across [`replace`](Self::replace),
/// so index-based and key-based edits of the same element yield identical
/// collections.
#[derive(Clone)]
pub struct EquivalenceSet<T: Entity> {
    items: Vec<T>,
    same_as: SameAs<T>,
}

impl<T: Entity> EquivalenceSet<T> {
    /// Creates an empty set using the entity's own equivalence predicate.
    pub fn new() -> Self {
        Self::with_policy(T::same_as)
    }

    /// Creates an empty set using a custom equivalence predicate.
    pub fn with_policy(same_as: SameAs<T>) -> Self {
        Self {
            items: Vec::new(),
            same_as,
        }
    }

    /// Builds a set from existing elements, rejecting any equivalent pair.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut set = Self::new();
        for item in items {
            set.add(item)?;
        }
        Ok(set)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the set, returning the elements in order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns true if an element equivalent to `candidate` exists.
    pub fn contains_equivalent(&self, candidate: &T) -> bool {
        self.items.iter().any(|e| (self.same_as)(e, candidate))
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or(EntityError::IndexOutOfBounds {
                kind: T::KIND,
                index,
                len: self.items.len(),
            })
    }

    /// Returns the first element whose natural key equals `key`.
    ///
    /// Matches on [`Entity::key`] regardless of the equivalence predicate. Under
    /// a custom predicate several elements may share a key; the earliest wins.
    pub fn find(&self, key: &T::Key) -> Result<&T> {
        self.items
            .iter()
            .find(|e| e.key() == *key)
            .ok_or_else(|| EntityError::NotFound {
                kind: T::KIND,
                key: key.to_string(),
            })
    }

    /// Returns the position of the first element whose natural key equals
    /// `key`, ignoring the equivalence predicate like [`find`](Self::find).
    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|e| e.key() == *key)
    }

    /// Appends `item` unless an equivalent element exists.
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.contains_equivalent(&item) {
            return Err(EntityError::Duplicate {
                kind: T::KIND,
                key: item.key().to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes the element strictly equal to `item`.
    pub fn remove(&mut self, item: &T) -> Result<T> {
        let index = self.strict_position(item)?;
        Ok(self.items.remove(index))
    }

    /// Replaces `target` with `edited` at the same position.
    ///
    /// Fails if `target` is absent, or if some other element is equivalent
    /// to `edited`. Nothing changes on failure.
    pub fn replace(&mut self, target: &T, edited: T) -> Result<()> {
        let index = self.strict_position(target)?;
        let clash = self
            .items
            .iter()
            .enumerate()
            .any(|(i, e)| i != index && (self.same_as)(e, &edited));
        if clash {
            return Err(EntityError::Duplicate {
                kind: T::KIND,
                key: edited.key().to_string(),
            });
        }
        self.items[index] = edited;
        Ok(())
    }

    /// Reorders the elements with a stable sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    /// Returns true if both sets hold pairwise-equivalent elements in order.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| (self.same_as)(a, b))
    }

    fn strict_position(&self, item: &T) -> Result<usize> {
        self.items
            .iter()
            .position(|e| e == item)
            .ok_or_else(|| EntityError::NotFound {
                kind: T::KIND,
                key: item.key().to_string(),
            })
    }
}

impl<T: Entity> Default for EquivalenceSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> PartialEq for EquivalenceSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Entity> fmt::Debug for EquivalenceSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T: Entity> IntoIterator for &'a EquivalenceSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
