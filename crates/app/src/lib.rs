//! Restaurant records application.
//!
//! Loads the JSON records file into a [`Model`], falling back to sample
//! records, and writes the committed snapshot back.

pub mod config;
pub mod error;
pub mod sample;
pub mod storage;

use model::Model;

use config::Config;
use error::Result;
use storage::JsonStorage;

/// Where the loaded records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    File,
    Sample,
    Empty,
}

/// Builds the model from the configured records file.
///
/// A missing file yields sample records when enabled, else an empty model.
/// An unreadable or invalid file is an error; it is never replaced.
pub fn load_model(config: &Config) -> Result<(Model, Source)> {
    let storage = JsonStorage::new(&config.data_file);
    let (data, source) = match storage.load()? {
        Some(data) => (data, Source::File),
        None if config.sample_data => (sample::sample_data(), Source::Sample),
        None => (Default::default(), Source::Empty),
    };

    let mut model = Model::default();
    model.import(data)?;
    tracing::info!(?source, entities = model.snapshot().entity_count(), "records loaded");
    Ok((model, source))
}

/// Writes the committed snapshot to the configured records file.
pub fn save_model(config: &Config, model: &Model) -> Result<()> {
    JsonStorage::new(&config.data_file).save(&model.export())
}

/// Logs per-collection counts and ingredients that need reordering.
pub fn log_summary(model: &Model) {
    let snapshot = model.snapshot();
    tracing::info!(
        customers = snapshot.persons.len(),
        accounts = snapshot.accounts.len(),
        ingredients = snapshot.ingredients.len(),
        items = snapshot.items.len(),
        reservations = snapshot.reservations.len(),
        sales = snapshot.sales.len(),
        "collection sizes"
    );

    for ingredient in model.low_stock_ingredients() {
        tracing::warn!(
            ingredient = %ingredient.name,
            stock = ingredient.stock,
            minimum = ingredient.minimum,
            unit = %ingredient.unit,
            "ingredient below minimum"
        );
    }
    metrics::gauge!("low_stock_ingredients").set(model.low_stock_ingredients().len() as f64);

    for (name, revenue) in model.revenue_ranking().into_iter().take(3) {
        tracing::info!(item = %name, %revenue, "top seller");
    }
}
