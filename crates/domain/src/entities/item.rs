//! Menu items and their recipes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind, Tagged};
use crate::value_objects::{IngredientName, ItemName, Money, Tag};

/// Ingredients consumed to prepare one unit of a menu item.
///
/// Entries keep the order in which they were added; adding an ingredient
/// that is already listed increases its units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe {
    entries: Vec<(IngredientName, u32)>,
}

impl Recipe {
    /// Creates an empty recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `units` of an ingredient, returning the updated recipe.
    pub fn with(mut self, ingredient: impl Into<IngredientName>, units: u32) -> Self {
        self.add(ingredient, units);
        self
    }

    /// Adds `units` of an ingredient.
    pub fn add(&mut self, ingredient: impl Into<IngredientName>, units: u32) {
        let ingredient = ingredient.into();
        match self.entries.iter_mut().find(|(name, _)| *name == ingredient) {
            Some((_, existing)) => *existing = existing.saturating_add(units),
            None => self.entries.push((ingredient, units)),
        }
    }

    /// Iterates over `(ingredient, units)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&IngredientName, u32)> {
        self.entries.iter().map(|(name, units)| (name, *units))
    }

    /// Returns the units of `ingredient`, if listed.
    pub fn units_of(&self, ingredient: &IngredientName) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == ingredient)
            .map(|(_, units)| *units)
    }

    /// Returns the number of distinct ingredients.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no ingredient is listed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<IngredientName>> FromIterator<(N, u32)> for Recipe {
    fn from_iter<I: IntoIterator<Item = (N, u32)>>(iter: I) -> Self {
        let mut recipe = Recipe::new();
        for (name, units) in iter {
            recipe.add(name, units);
        }
        recipe
    }
}

/// A menu item.
///
/// The recipe is optional: items without one can still be sold, they just
/// do not draw down ingredient stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: ItemName,
    pub price: Money,
    #[serde(default)]
    pub recipe: Option<Recipe>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Item {
    /// Creates an item without a recipe or tags.
    pub fn new(name: impl Into<ItemName>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            recipe: None,
            tags: BTreeSet::new(),
        }
    }

    /// Attaches a recipe.
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipe = Some(recipe);
        self
    }

    /// Adds tags, returning the updated item.
    pub fn tagged<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

impl Entity for Item {
    type Key = ItemName;
    const KIND: EntityKind = EntityKind::Item;

    fn key(&self) -> ItemName {
        self.name.clone()
    }
}

impl Tagged for Item {
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
    fn test_recipe_keeps_insertion_order() {
        let recipe = Recipe::new().with("Cheese", 2).with("Garlic", 1);
        let names: Vec<_> = recipe.entries().map(|(n, _)| n.as_str().to_string()).collect();
        assert_eq!(names, vec!["Cheese", "Garlic"]);
    }

    #[test]
    fn test_recipe_merges_repeated_ingredient() {
        let recipe = Recipe::new().with("Cheese", 2).with("Garlic", 1).with("Cheese", 3);
        assert_eq!(recipe.len(), 2);
        assert_eq!(recipe.units_of(&IngredientName::new("Cheese")), Some(5));
    }

    #[test]
    fn test_recipe_from_iterator() {
        let recipe: Recipe = [("Cheese", 2), ("Garlic", 3), ("Cheese", 1)].into_iter().collect();
        assert_eq!(recipe.units_of(&IngredientName::new("Cheese")), Some(3));
        assert_eq!(recipe.units_of(&IngredientName::new("Garlic")), Some(3));
        assert!(recipe.units_of(&IngredientName::new("Basil")).is_none());
    }

    #[test]
    fn test_price_change_is_same_item() {
        let a = Item::new("Garlic Bread", Money::from_cents(450));
        let b = Item::new("Garlic Bread", Money::from_cents(500))
            .with_recipe(Recipe::new().with("Garlic", 1));
        assert!(a.same_as(&b));
    }

    #[test]
    fn test_recipe_serializes_as_list() {
        let item = Item::new("Garlic Bread", Money::from_cents(450))
            .with_recipe(Recipe::new().with("Garlic", 1));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["recipe"], serde_json::json!([["Garlic", 1]]));
    }
}
