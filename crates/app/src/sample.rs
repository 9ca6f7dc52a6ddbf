//! Records used when no data file exists yet.

use chrono::{NaiveDate, NaiveTime};
use domain::{Account, Ingredient, Item, Money, Person, Recipe, Reservation, SalesRecord};
use model::SnapshotData;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

/// Returns a small restaurant with every collection populated.
pub fn sample_data() -> SnapshotData {
    SnapshotData {
        persons: vec![
            Person::new("Alex Yeoh", "87438807", "alexyeoh@example.com", "Blk 30 Geylang Street 29")
                .tagged(["friends"]),
            Person::new("Bernice Yu", "99272758", "berniceyu@example.com", "Blk 30 Lorong 3 Serangoon Gardens")
                .tagged(["colleagues", "friends"]),
            Person::new("Charlotte Oliveiro", "93210283", "charlotte@example.com", "Blk 11 Ang Mo Kio Street 74")
                .tagged(["neighbours"]),
            Person::new("David Li", "91031282", "lidavid@example.com", "Blk 436 Serangoon Gardens Street 26")
                .tagged(["family"]),
        ],
        accounts: vec![Account::new("admin", "admin123")],
        ingredients: vec![
            Ingredient::new("Cheese", "kilogram", Money::from_cents(1250), 20).with_minimum(5),
            Ingredient::new("Garlic", "bulb", Money::from_cents(50), 9).with_minimum(10),
            Ingredient::new("Bread", "loaf", Money::from_cents(300), 15).with_minimum(5),
            Ingredient::new("Tomato", "kilogram", Money::from_cents(400), 12).with_minimum(4),
            Ingredient::new("Pasta", "packet", Money::from_cents(250), 30).with_minimum(10),
        ],
        items: vec![
            Item::new("Garlic Bread", Money::from_cents(450))
                .with_recipe(Recipe::new().with("Bread", 1).with("Garlic", 1).with("Cheese", 1))
                .tagged(["starter"]),
            Item::new("Tomato Pasta", Money::from_cents(1290))
                .with_recipe(Recipe::new().with("Pasta", 1).with("Tomato", 1))
                .tagged(["main"]),
            Item::new("House Salad", Money::from_cents(700)).tagged(["starter", "vegetarian"]),
        ],
        reservations: vec![
            Reservation::new("Alex Yeoh", 2, date(12, 3), time(19, 0)).tagged(["window"]),
            Reservation::new("David Li", 6, date(12, 24), time(18, 30)).tagged(["family"]),
        ],
        sales: vec![
            SalesRecord::new(date(11, 1), "Garlic Bread", 12, Money::from_cents(450)),
            SalesRecord::new(date(11, 1), "Tomato Pasta", 7, Money::from_cents(1290)),
            SalesRecord::new(date(11, 2), "House Salad", 4, Money::from_cents(700)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::Model;

    #[test]
    fn test_sample_data_imports() {
        let model = Model::from_data(sample_data()).unwrap();
        assert_eq!(model.snapshot().persons.len(), 4);
        assert_eq!(model.snapshot().sales.len(), 3);
    }

    #[test]
    fn test_sample_data_has_low_stock() {
        let model = Model::from_data(sample_data()).unwrap();
        let low: Vec<_> = model
            .low_stock_ingredients()
            .into_iter()
            .map(|i| i.name.to_string())
            .collect();
        assert_eq!(low, vec!["Garlic"]);
    }
}
