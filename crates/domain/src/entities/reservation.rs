//! Table reservations.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityKind, Tagged};
use crate::value_objects::{Name, Tag};

/// Natural key of a reservation: who, on which day, at what time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservationKey {
    pub name: Name,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl fmt::Display for ReservationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {} at {}", self.name, self.date, self.time.format("%H:%M"))
    }
}

/// A table reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub name: Name,
    pub pax: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Reservation {
    /// Creates a reservation without tags.
    pub fn new(name: impl Into<Name>, pax: u32, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            name: name.into(),
            pax,
            date,
            time,
            tags: BTreeSet::new(),
        }
    }

    /// Adds tags, returning the updated reservation.
    pub fn tagged<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

impl Entity for Reservation {
    type Key = ReservationKey;
    const KIND: EntityKind = EntityKind::Reservation;

    fn key(&self) -> ReservationKey {
        ReservationKey {
            name: self.name.clone(),
            date: self.date,
            time: self.time,
        }
    }
}

impl Tagged for Reservation {
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

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
    }

    fn time(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn test_pax_change_is_same_reservation() {
        let a = Reservation::new("Alex Yeoh", 2, date(3), time(19));
        let b = Reservation::new("Alex Yeoh", 6, date(3), time(19));
        assert!(a.same_as(&b));
    }

    #[test]
    fn test_other_slot_is_different_reservation() {
        let a = Reservation::new("Alex Yeoh", 2, date(3), time(19));
        assert!(!a.same_as(&Reservation::new("Alex Yeoh", 2, date(4), time(19))));
        assert!(!a.same_as(&Reservation::new("Alex Yeoh", 2, date(3), time(12))));
    }

    #[test]
    fn test_key_display() {
        let r = Reservation::new("Alex Yeoh", 2, date(3), time(19));
        assert_eq!(r.key().to_string(), "Alex Yeoh on 2024-12-03 at 19:00");
    }
}
