//! Customer records.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind, Tagged};
use crate::value_objects::{Name, Tag};

/// A customer of the restaurant.
///
/// Customers are identified by name alone; contact details and tags are
/// editable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    /// Creates a customer without tags.
    pub fn new(
        name: impl Into<Name>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            tags: BTreeSet::new(),
        }
    }

    /// Adds tags, returning the updated customer.
    pub fn tagged<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

impl Entity for Person {
    type Key = Name;
    const KIND: EntityKind = EntityKind::Person;

    fn key(&self) -> Name {
        self.name.clone()
    }
}

impl Tagged for Person {
    fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_is_same_person() {
        let a = Person::new("Alex Yeoh", "87438807", "alexyeoh@example.com", "Geylang");
        let b = Person::new("Alex Yeoh", "99272758", "alex@example.com", "Serangoon").tagged(["vip"]);
        assert!(a.same_as(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_different_name_is_different_person() {
        let a = Person::new("Alex Yeoh", "87438807", "alexyeoh@example.com", "Geylang");
        let b = Person::new("Bernice Yu", "87438807", "alexyeoh@example.com", "Geylang");
        assert!(!a.same_as(&b));
    }

    #[test]
    fn test_without_tag() {
        let person = Person::new("Alex Yeoh", "87438807", "a@example.com", "Geylang")
            .tagged(["vip", "regular"]);
        let edited = person.without_tag(&Tag::new("vip"));
        assert!(!edited.has_tag(&Tag::new("vip")));
        assert!(edited.has_tag(&Tag::new("regular")));
        assert_eq!(edited.name, person.name);
    }
}
