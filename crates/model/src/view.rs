//! Read-only filtered views over the entity collections.

use domain::{
    Account, Entity, EntityError, EquivalenceSet, Ingredient, Item, Person, Reservation,
    SalesRecord,
};

use crate::snapshot::AggregateSnapshot;

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Externally supplied predicate selecting which elements a view shows.
pub struct Filter<T> {
    predicate: Option<Predicate<T>>,
}

impl<T> Filter<T> {
    /// A filter that shows every element.
    pub fn show_all() -> Self {
        Self { predicate: None }
    }

    /// A filter that shows the elements matching `predicate`.
    pub fn matching(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Some(Box::new(predicate)),
        }
    }

    /// Returns true if `item` passes the filter.
    pub fn matches(&self, item: &T) -> bool {
        self.predicate.as_ref().is_none_or(|p| p(item))
    }

    /// Returns true if the filter shows every element.
    pub fn is_show_all(&self) -> bool {
        self.predicate.is_none()
    }
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Self::show_all()
    }
}

/// The current filter of each collection.
#[derive(Default)]
pub struct Filters {
    persons: Filter<Person>,
    accounts: Filter<Account>,
    ingredients: Filter<Ingredient>,
    items: Filter<Item>,
    reservations: Filter<Reservation>,
    sales: Filter<SalesRecord>,
}

/// Entity types held by an [`AggregateSnapshot`].
///
/// Selects the entity's collection and filter so façade operations can be
/// written once for all six types.
pub trait SnapshotMember: Entity + 'static {
    /// Returns this type's collection.
    fn collection(snapshot: &AggregateSnapshot) -> &EquivalenceSet<Self>;

    /// Returns this type's collection for mutation.
    fn collection_mut(snapshot: &mut AggregateSnapshot) -> &mut EquivalenceSet<Self>;

    /// Returns this type's filter.
    fn filter(filters: &Filters) -> &Filter<Self>;

    /// Returns this type's filter for replacement.
    fn filter_mut(filters: &mut Filters) -> &mut Filter<Self>;
}

macro_rules! snapshot_member {
    ($ty:ty, $field:ident) => {
        impl SnapshotMember for $ty {
            fn collection(snapshot: &AggregateSnapshot) -> &EquivalenceSet<Self> {
                &snapshot.$field
            }

            fn collection_mut(snapshot: &mut AggregateSnapshot) -> &mut EquivalenceSet<Self> {
                &mut snapshot.$field
            }

            fn filter(filters: &Filters) -> &Filter<Self> {
                &filters.$field
            }

            fn filter_mut(filters: &mut Filters) -> &mut Filter<Self> {
                &mut filters.$field
            }
        }
    };
}

snapshot_member!(Person, persons);
snapshot_member!(Account, accounts);
snapshot_member!(Ingredient, ingredients);
snapshot_member!(Item, items);
snapshot_member!(Reservation, reservations);
snapshot_member!(SalesRecord, sales);

/// Ordered, read-only view of the elements of one collection passing its
/// filter.
///
/// The view borrows the model's working state, so a view taken after any
/// mutation reflects that mutation. Order is collection order.
pub struct FilteredView<'a, T: Entity> {
    items: &'a EquivalenceSet<T>,
    filter: &'a Filter<T>,
}

impl<'a, T: Entity> FilteredView<'a, T> {
    pub(crate) fn new(items: &'a EquivalenceSet<T>, filter: &'a Filter<T>) -> Self {
        Self { items, filter }
    }

    /// Iterates over the visible elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + use<'a, T> {
        let filter = self.filter;
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Returns the number of visible elements.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if no element is visible.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Returns the visible element at `index`.
    pub fn get(&self, index: usize) -> Result<&'a T, EntityError> {
        self.iter()
            .nth(index)
            .ok_or_else(|| EntityError::IndexOutOfBounds {
                kind: T::KIND,
                index,
                len: self.len(),
            })
    }

    /// Collects the visible elements.
    pub fn to_vec(&self) -> Vec<&'a T> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Money, Tag, Tagged};

    fn menu() -> EquivalenceSet<Item> {
        EquivalenceSet::from_items(vec![
            Item::new("Soup", Money::from_cents(500)).tagged(["starter"]),
            Item::new("Steak", Money::from_cents(2500)),
            Item::new("Salad", Money::from_cents(700)).tagged(["starter"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_show_all() {
        let items = menu();
        let filter = Filter::show_all();
        let view = FilteredView::new(&items, &filter);
        assert_eq!(view.len(), 3);
        assert!(filter.is_show_all());
    }

    #[test]
    fn test_filter_keeps_collection_order() {
        let items = menu();
        let filter = Filter::matching(|item: &Item| item.has_tag(&Tag::new("starter")));
        let view = FilteredView::new(&items, &filter);

        let names: Vec<_> = view.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Salad"]);
        assert_eq!(view.get(1).unwrap().name.as_str(), "Salad");
    }

    #[test]
    fn test_index_past_visible_elements() {
        let items = menu();
        let filter = Filter::matching(|item: &Item| item.price.cents() > 1000);
        let view = FilteredView::new(&items, &filter);
        assert!(matches!(
            view.get(1),
            Err(EntityError::IndexOutOfBounds {
                index: 1,
                len: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_view() {
        let items = menu();
        let filter = Filter::matching(|_: &Item| false);
        let view = FilteredView::new(&items, &filter);
        assert!(view.is_empty());
        assert!(view.to_vec().is_empty());
    }
}
