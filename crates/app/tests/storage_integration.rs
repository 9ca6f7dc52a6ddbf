//! Integration tests for loading and saving the records file.

use std::path::PathBuf;

use app::Source;
use app::config::Config;
use app::error::StorageError;
use app::storage::JsonStorage;
use domain::{Money, Person};
use model::{ModelError, SnapshotData};
use tempfile::TempDir;

/// Records path nested one level below a fresh temp directory, so saving
/// has to create the parent.
fn records_path(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("records.json")
}

fn config(dir: &TempDir, sample_data: bool) -> Config {
    Config {
        data_file: records_path(dir),
        sample_data,
        ..Config::default()
    }
}

mod storage {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = records_path(&dir);
        assert!(JsonStorage::new(&path).load().unwrap().is_none());
    }

    #[test]
    fn save_creates_directories_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = records_path(&dir);
        let storage = JsonStorage::new(&path);
        let data = app::sample::sample_data();

        storage.save(&data).unwrap();
        assert_eq!(storage.load().unwrap(), Some(data));
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = records_path(&dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonStorage::new(&path).load(),
            Err(StorageError::Serialization(_))
        ));
    }
}

mod bootstrap {
    use super::*;

    #[test]
    fn missing_file_uses_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let (model, source) = app::load_model(&config(&dir, true)).unwrap();
        assert_eq!(source, Source::Sample);
        assert!(!model.snapshot().items.is_empty());
        assert!(!model.can_undo());
    }

    #[test]
    fn missing_file_without_samples_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let (model, source) = app::load_model(&config(&dir, false)).unwrap();
        assert_eq!(source, Source::Empty);
        assert_eq!(model.snapshot().entity_count(), 0);
    }

    #[test]
    fn saved_records_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(&dir, true);
        let (mut model, _) = app::load_model(&config).unwrap();
        model
            .add(Person::new("Roy Balakrishnan", "92624417", "roy@example.com", "Tampines"))
            .unwrap();
        model.commit();
        app::save_model(&config, &model).unwrap();

        let (reloaded, source) = app::load_model(&config).unwrap();
        assert_eq!(source, Source::File);
        assert_eq!(reloaded.snapshot(), model.snapshot());
    }

    #[test]
    fn file_with_duplicates_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = records_path(&dir);
        let person = Person::new("Alex Yeoh", "1", "a@example.com", "Geylang");
        let data = SnapshotData {
            persons: vec![person.clone(), person],
            ..Default::default()
        };
        JsonStorage::new(&path).save(&data).unwrap();

        assert!(matches!(
            app::load_model(&config(&dir, true)),
            Err(StorageError::Model(ModelError::Entity(_)))
        ));
    }

    #[test]
    fn summary_logs_without_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let (model, _) = app::load_model(&config(&dir, true)).unwrap();
        app::log_summary(&model);
        assert_eq!(
            model.revenue_ranking().first().map(|(_, m)| *m),
            Some(Money::from_cents(9030))
        );
    }
}
