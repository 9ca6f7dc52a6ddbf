//! The model façade.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use domain::{Account, Ingredient, ItemName, Money, SalesRecord, Tag, Tagged, Username};
use history::{StateId, VersionedHistory};
use ledger::{IngredientLedger, LedgerReceipt, StockChange, TransactionKind};

use crate::command::{Command, CommandResult, CommandState};
use crate::error::{ModelError, Result};
use crate::outcome::{IngredientStatus, SaleOutcome, SalesReport};
use crate::snapshot::{AggregateSnapshot, SnapshotData};
use crate::view::{Filter, FilteredView, Filters, SnapshotMember};

/// Single entry point for reading and changing the restaurant records.
///
/// Mutations go to a working copy of the newest committed snapshot. The
/// working copy becomes history only through [`commit`](Self::commit), and
/// [`discard`](Self::discard), [`undo`](Self::undo), and
/// [`redo`](Self::redo) replace it with a committed state.
pub struct Model {
    history: VersionedHistory<AggregateSnapshot>,
    working: AggregateSnapshot,
    filters: Filters,
}

impl Model {
    /// Creates a model whose history holds only `seed`.
    pub fn new(seed: AggregateSnapshot) -> Self {
        Self {
            history: VersionedHistory::new(seed.clone()),
            working: seed,
            filters: Filters::default(),
        }
    }

    /// Creates a model seeded from exported data.
    ///
    /// Fails with `EntityError::Duplicate` if any collection holds two
    /// equivalent entities.
    pub fn from_data(data: SnapshotData) -> Result<Self> {
        Ok(Self::new(AggregateSnapshot::try_from(data)?))
    }

    /// Returns the working snapshot, including uncommitted changes.
    pub fn snapshot(&self) -> &AggregateSnapshot {
        &self.working
    }

    /// Returns the snapshot at the history pointer.
    pub fn committed(&self) -> &AggregateSnapshot {
        self.history.current()
    }

    /// Returns the history of committed snapshots.
    pub fn history(&self) -> &VersionedHistory<AggregateSnapshot> {
        &self.history
    }

    /// Returns true if the working snapshot differs from the committed one.
    pub fn has_uncommitted_changes(&self) -> bool {
        self.working != *self.history.current()
    }

    // --- Entity operations ---------------------------------------------

    /// Appends `item` to its collection.
    ///
    /// Fails with `Duplicate` if an equivalent entity is already stored.
    pub fn add<T: SnapshotMember>(&mut self, item: T) -> Result<()> {
        let key = item.key();
        T::collection_mut(&mut self.working).add(item)?;
        tracing::debug!(kind = %T::KIND, %key, "entity added");
        Ok(())
    }

    /// Removes the entity strictly equal to `item` and returns it.
    pub fn delete<T: SnapshotMember>(&mut self, item: &T) -> Result<T> {
        let removed = T::collection_mut(&mut self.working).remove(item)?;
        tracing::debug!(kind = %T::KIND, key = %removed.key(), "entity deleted");
        Ok(removed)
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// Fails with `NotFound` if `target` is not stored, or with `Duplicate`
    /// if another entity is equivalent to `edited`.
    pub fn update<T: SnapshotMember>(&mut self, target: &T, edited: T) -> Result<()> {
        let key = edited.key();
        T::collection_mut(&mut self.working).replace(target, edited)?;
        tracing::debug!(kind = %T::KIND, %key, "entity updated");
        Ok(())
    }

    /// Returns true if an entity equivalent to `candidate` is stored.
    pub fn has<T: SnapshotMember>(&self, candidate: &T) -> bool {
        T::collection(&self.working).contains_equivalent(candidate)
    }

    /// Returns the entity with natural key `key`.
    pub fn find<T: SnapshotMember>(&self, key: &T::Key) -> Result<&T> {
        Ok(T::collection(&self.working).find(key)?)
    }

    /// Returns the entity at `index` in collection order.
    pub fn get<T: SnapshotMember>(&self, index: usize) -> Result<&T> {
        Ok(T::collection(&self.working).get(index)?)
    }

    /// Reorders a collection; views follow the new order.
    pub fn sort<T, F>(&mut self, compare: F)
    where
        T: SnapshotMember,
        F: FnMut(&T, &T) -> Ordering,
    {
        T::collection_mut(&mut self.working).sort_by(compare);
    }

    /// Returns the filtered view of a collection.
    pub fn filtered<T: SnapshotMember>(&self) -> FilteredView<'_, T> {
        FilteredView::new(T::collection(&self.working), T::filter(&self.filters))
    }

    /// Replaces the filter of a collection.
    pub fn update_filter<T: SnapshotMember>(&mut self, filter: Filter<T>) {
        *T::filter_mut(&mut self.filters) = filter;
    }

    /// Clears the filter of a collection.
    pub fn show_all<T: SnapshotMember>(&mut self) {
        self.update_filter(Filter::<T>::show_all());
    }

    /// Removes `tag` from every customer, menu item, and reservation.
    ///
    /// Each change goes through [`update`](Self::update). Returns the number
    /// of entities changed.
    #[tracing::instrument(skip(self, tag), fields(tag = %tag))]
    pub fn remove_tag_everywhere(&mut self, tag: &Tag) -> Result<usize> {
        let changed = self.strip_tag::<domain::Person>(tag)?
            + self.strip_tag::<domain::Item>(tag)?
            + self.strip_tag::<domain::Reservation>(tag)?;
        tracing::info!(changed, "tag removed");
        Ok(changed)
    }

    fn strip_tag<T: SnapshotMember + Tagged>(&mut self, tag: &Tag) -> Result<usize> {
        let affected: Vec<T> = T::collection(&self.working)
            .iter()
            .filter(|entity| entity.has_tag(tag))
            .cloned()
            .collect();
        for target in &affected {
            self.update(target, target.without_tag(tag))?;
        }
        Ok(affected.len())
    }

    // --- Sales and stock -----------------------------------------------

    /// Records a sale, then consumes the item's recipe from stock.
    ///
    /// Fails only if an equivalent record exists. Once the record is added,
    /// the stock step cannot fail the call: its result is reported in
    /// [`SaleOutcome::ingredients`] and a failed consume leaves stock as it
    /// was.
    #[tracing::instrument(skip(self, record), fields(item = %record.name, date = %record.date))]
    pub fn record_sale(&mut self, record: SalesRecord) -> Result<SaleOutcome> {
        self.working.sales.add(record.clone())?;
        metrics::counter!("sales_recorded_total").increment(1);

        let ingredients = self.apply_recipe(&record, TransactionKind::Consume);
        if ingredients.is_updated() {
            tracing::info!("sale recorded");
        } else {
            tracing::warn!(status = %ingredients, "sale recorded without stock update");
        }
        Ok(SaleOutcome {
            record,
            ingredients,
        })
    }

    /// Removes a recorded sale, then returns its recipe to stock.
    ///
    /// Fails with `NotFound` if no record strictly equals `record`. The stock
    /// step is best-effort, as in [`record_sale`](Self::record_sale).
    #[tracing::instrument(skip(self, record), fields(item = %record.name, date = %record.date))]
    pub fn void_sale(&mut self, record: &SalesRecord) -> Result<SaleOutcome> {
        let record = self.working.sales.remove(record)?;
        let ingredients = self.apply_recipe(&record, TransactionKind::Replenish);
        tracing::info!(status = %ingredients, "sale voided");
        Ok(SaleOutcome {
            record,
            ingredients,
        })
    }

    fn apply_recipe(&mut self, record: &SalesRecord, kind: TransactionKind) -> IngredientStatus {
        let change = match self.working.items.find(&record.name) {
            Err(_) => {
                return IngredientStatus::ItemNotFound {
                    name: record.name.clone(),
                };
            }
            Ok(item) => match &item.recipe {
                None => {
                    return IngredientStatus::RecipeUnspecified {
                        name: record.name.clone(),
                    };
                }
                Some(recipe) => StockChange::for_recipe(recipe, record.quantity_sold),
            },
        };

        let mut ledger = IngredientLedger::new(&mut self.working.ingredients);
        let result = change.and_then(|change| match kind {
            TransactionKind::Consume => ledger.consume(&change),
            TransactionKind::Replenish => ledger.replenish(&change),
        });
        match result {
            Ok(receipt) => IngredientStatus::Updated(receipt),
            Err(error) => IngredientStatus::Failed(error),
        }
    }

    /// Deducts `required` from stock, all or nothing.
    pub fn consume_ingredients(&mut self, required: &StockChange) -> Result<LedgerReceipt> {
        Ok(IngredientLedger::new(&mut self.working.ingredients).consume(required)?)
    }

    /// Adds `given` to stock, all or nothing.
    pub fn replenish_ingredients(&mut self, given: &StockChange) -> Result<LedgerReceipt> {
        Ok(IngredientLedger::new(&mut self.working.ingredients).replenish(given)?)
    }

    /// Returns the ingredients whose stock is below their minimum.
    pub fn low_stock_ingredients(&self) -> Vec<&Ingredient> {
        self.working
            .ingredients
            .iter()
            .filter(|ingredient| ingredient.is_below_minimum())
            .collect()
    }

    /// Returns the sales of `date` and their total revenue.
    pub fn sales_report(&self, date: NaiveDate) -> SalesReport {
        let records: Vec<SalesRecord> = self
            .working
            .sales
            .iter()
            .filter(|record| record.date == date)
            .cloned()
            .collect();
        let total_revenue = records.iter().map(SalesRecord::revenue).sum();
        SalesReport {
            date,
            records,
            total_revenue,
        }
    }

    /// Returns every sold item with its total revenue, highest first.
    ///
    /// Items with equal revenue are ordered by name.
    pub fn revenue_ranking(&self) -> Vec<(ItemName, Money)> {
        let mut totals: BTreeMap<ItemName, Money> = BTreeMap::new();
        for record in self.working.sales.iter() {
            *totals.entry(record.name.clone()).or_default() += record.revenue();
        }
        let mut ranking: Vec<_> = totals.into_iter().collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranking
    }

    /// Returns the account if `password` matches.
    ///
    /// An unknown username and a wrong password fail the same way.
    pub fn authenticate(&self, username: &Username, password: &str) -> Result<&Account> {
        match self.working.accounts.find(username) {
            Ok(account) if account.verify(password) => Ok(account),
            _ => {
                tracing::warn!(%username, "authentication failed");
                Err(ModelError::InvalidCredentials {
                    username: username.clone(),
                })
            }
        }
    }

    // --- History -------------------------------------------------------

    /// Records a copy of the working snapshot as the newest state.
    ///
    /// States after the history pointer are discarded first.
    pub fn commit(&mut self) -> StateId {
        self.history.commit(self.working.clone())
    }

    /// Returns to the previous committed state.
    ///
    /// Uncommitted changes are lost. Fails with `NoUndoableState` at the
    /// oldest state, leaving the model unchanged.
    pub fn undo(&mut self) -> Result<()> {
        self.working = self.history.undo()?.clone();
        Ok(())
    }

    /// Returns to the next committed state.
    ///
    /// Fails with `NoRedoableState` at the newest state, leaving the model
    /// unchanged.
    pub fn redo(&mut self) -> Result<()> {
        self.working = self.history.redo()?.clone();
        Ok(())
    }

    /// Returns true if an older committed state exists.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if an undone state can be restored.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drops uncommitted changes.
    pub fn discard(&mut self) {
        if self.has_uncommitted_changes() {
            tracing::debug!("uncommitted changes discarded");
        }
        self.working = self.history.current().clone();
    }

    /// Runs `command` against the model and commits if it succeeds.
    ///
    /// Nothing is committed when the working snapshot is unchanged. On error
    /// the working snapshot is discarded and the error returned.
    #[tracing::instrument(skip(self, command))]
    pub fn execute<R, F>(&mut self, name: &'static str, command: F) -> Result<CommandResult<R>>
    where
        F: FnOnce(&mut Self) -> Result<R>,
    {
        tracing::debug!(state = %CommandState::Mutating, "command started");
        let result = command(self);
        self.conclude(name, result)
    }

    /// Validates `command` against the read-only model, then applies it and
    /// commits.
    ///
    /// A failure in either stage discards the working snapshot.
    #[tracing::instrument(skip(self, command), fields(command = command.name()))]
    pub fn dispatch<C: Command>(&mut self, command: C) -> Result<CommandResult<C::Output>> {
        let name = command.name();
        tracing::debug!(state = %CommandState::Validating, "command started");
        if let Err(error) = command.validate(self) {
            return self.conclude(name, Err(error));
        }
        tracing::debug!(state = %CommandState::Mutating, "command validated");
        let result = command.apply(self);
        self.conclude(name, result)
    }

    fn conclude<R>(&mut self, name: &'static str, result: Result<R>) -> Result<CommandResult<R>> {
        match result {
            Ok(output) => {
                let state_id = self.has_uncommitted_changes().then(|| self.commit());
                let state = CommandState::Committed;
                metrics::counter!("commands_total", "command" => name, "outcome" => state.as_str())
                    .increment(1);
                tracing::debug!(%state, recorded = state_id.is_some(), "command finished");
                Ok(CommandResult { output, state_id })
            }
            Err(error) => {
                self.discard();
                let state = CommandState::RolledBack;
                metrics::counter!("commands_total", "command" => name, "outcome" => state.as_str())
                    .increment(1);
                tracing::warn!(%state, %error, "command failed");
                Err(error)
            }
        }
    }

    // --- Import and export ---------------------------------------------

    /// Exports the committed snapshot for the storage layer.
    pub fn export(&self) -> SnapshotData {
        SnapshotData::from(self.history.current())
    }

    /// Replaces all state with imported data as a fresh single-state history.
    ///
    /// Fails with `EntityError::Duplicate` on an equivalence violation,
    /// leaving the model unchanged.
    pub fn import(&mut self, data: SnapshotData) -> Result<()> {
        let snapshot = AggregateSnapshot::try_from(data)?;
        tracing::info!(entities = snapshot.entity_count(), "snapshot imported");
        self.reset(snapshot);
        Ok(())
    }

    /// Replaces all state with `seed` as a fresh single-state history.
    pub fn reset(&mut self, seed: AggregateSnapshot) {
        self.history.reset(seed.clone());
        self.working = seed;
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(AggregateSnapshot::new())
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("pointer", &self.history.pointer())
            .field("states", &self.history.state_count())
            .field("working", &self.working)
            .finish_non_exhaustive()
    }
}
