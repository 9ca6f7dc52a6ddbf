//! Ordered per-ingredient stock deltas.

use domain::{IngredientName, Recipe};

use crate::error::{LedgerError, Result};

/// Ingredient units to consume or replenish, applied in insertion order.
///
/// The same ingredient may appear more than once; each occurrence is
/// applied separately and the transaction merges them when recording.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockChange {
    entries: Vec<(IngredientName, u32)>,
}

impl StockChange {
    /// Creates an empty change.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, returning the updated change.
    pub fn with(mut self, name: impl Into<IngredientName>, units: u32) -> Self {
        self.push(name, units);
        self
    }

    /// Appends an entry.
    pub fn push(&mut self, name: impl Into<IngredientName>, units: u32) {
        self.entries.push((name.into(), units));
    }

    /// Builds the change needed to prepare `quantity` servings of `recipe`.
    pub fn for_recipe(recipe: &Recipe, quantity: u32) -> Result<Self> {
        let mut change = Self::new();
        for (name, units) in recipe.entries() {
            let scaled = units
                .checked_mul(quantity)
                .ok_or_else(|| LedgerError::QuantityOverflow {
                    name: name.clone(),
                    units,
                    factor: quantity,
                })?;
            change.push(name.clone(), scaled);
        }
        Ok(change)
    }

    /// Iterates over `(ingredient, units)` entries in order.
    pub fn entries(&self) -> impl Iterator<Item = (&IngredientName, u32)> {
        self.entries.iter().map(|(name, units)| (name, *units))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<IngredientName>> FromIterator<(N, u32)> for StockChange {
    fn from_iter<I: IntoIterator<Item = (N, u32)>>(iter: I) -> Self {
        let mut change = Self::new();
        for (name, units) in iter {
            change.push(name, units);
        }
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_order_and_repeats() {
        let change = StockChange::new()
            .with("Cheese", 6)
            .with("Garlic", 10)
            .with("Cheese", 1);
        let entries: Vec<_> = change
            .entries()
            .map(|(n, u)| (n.as_str().to_string(), u))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("Cheese".to_string(), 6),
                ("Garlic".to_string(), 10),
                ("Cheese".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_for_recipe_scales_units() {
        let recipe = Recipe::new().with("Cheese", 2).with("Garlic", 1);
        let change = StockChange::for_recipe(&recipe, 3).unwrap();
        let expected: StockChange = [("Cheese", 6), ("Garlic", 3)].into_iter().collect();
        assert_eq!(change, expected);
    }

    #[test]
    fn test_for_recipe_overflow() {
        let recipe = Recipe::new().with("Cheese", u32::MAX);
        let result = StockChange::for_recipe(&recipe, 2);
        assert!(matches!(
            result,
            Err(LedgerError::QuantityOverflow { factor: 2, .. })
        ));
    }

    #[test]
    fn test_for_empty_recipe() {
        let change = StockChange::for_recipe(&Recipe::new(), 5).unwrap();
        assert!(change.is_empty());
    }
}
