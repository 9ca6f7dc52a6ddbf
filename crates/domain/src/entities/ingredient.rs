//! Stock ingredients.

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind};
use crate::value_objects::{IngredientName, Money};

/// A stock ingredient.
///
/// Identified by name; unit, price, stock level, and minimum are values that
/// may change without creating a new ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: IngredientName,
    /// Unit in which stock is counted (e.g. "kilogram", "packet").
    pub unit: String,
    /// Price per unit.
    pub price: Money,
    /// Units currently in stock.
    pub stock: u32,
    /// Stock level below which the ingredient should be reordered.
    #[serde(default)]
    pub minimum: u32,
}

impl Ingredient {
    /// Creates an ingredient with no reorder threshold.
    pub fn new(
        name: impl Into<IngredientName>,
        unit: impl Into<String>,
        price: Money,
        stock: u32,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            price,
            stock,
            minimum: 0,
        }
    }

    /// Sets the reorder threshold.
    pub fn with_minimum(mut self, minimum: u32) -> Self {
        self.minimum = minimum;
        self
    }

    /// Returns a copy with a different stock level.
    pub fn with_stock(&self, stock: u32) -> Self {
        Self {
            stock,
            ..self.clone()
        }
    }

    /// Returns true if stock has fallen below the reorder threshold.
    pub fn is_below_minimum(&self) -> bool {
        self.stock < self.minimum
    }
}

impl Entity for Ingredient {
    type Key = IngredientName;
    const KIND: EntityKind = EntityKind::Ingredient;

    fn key(&self) -> IngredientName {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_changes_do_not_change_identity() {
        let cheese = Ingredient::new("Cheese", "kilogram", Money::from_cents(1250), 20);
        let restocked = cheese.with_stock(40);
        assert!(cheese.same_as(&restocked));
        assert_ne!(cheese, restocked);
    }

    #[test]
    fn test_below_minimum() {
        let garlic = Ingredient::new("Garlic", "bulb", Money::from_cents(50), 3).with_minimum(5);
        assert!(garlic.is_below_minimum());
        assert!(!garlic.with_stock(5).is_below_minimum());
    }

    #[test]
    fn test_minimum_defaults_when_missing() {
        let json = r#"{"name":"Cheese","unit":"kilogram","price":1250,"stock":20}"#;
        let cheese: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(cheese.minimum, 0);
        assert_eq!(cheese.stock, 20);
    }
}
