use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

use crate::calendar::{grid_cell, GridCell};

/// One calendar day and where it was spent.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Year of the file the record came from; selects the grid it is drawn on.
    pub year: i32,
    /// Ordered, never empty. More than one entry marks a split day.
    pub locations: Vec<String>,
    pub cell: GridCell,
}

impl DayRecord {
    pub fn new(date: NaiveDate, year: i32, locations: Vec<String>) -> Self {
        Self {
            date,
            year,
            locations,
            cell: grid_cell(date, year),
        }
    }

    /// Share of the day credited to each of its locations.
    pub fn weight_per_location(&self) -> f64 {
        1.0 / self.locations.len() as f64
    }
}

pub type DayMap = BTreeMap<NaiveDate, DayRecord>;
pub type YearSet = BTreeSet<i32>;

/// Everything one run loads from the data directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrassData {
    pub years: YearSet,
    pub days: DayMap,
}

impl GrassData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record for the same date.
    pub fn insert(&mut self, record: DayRecord) -> Option<DayRecord> {
        self.years.insert(record.year);
        self.days.insert(record.date, record)
    }

    pub fn days_in_year(&self, year: i32) -> impl Iterator<Item = &DayRecord> {
        self.days.values().filter(move |r| r.year == year)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(m: u32, d: u32, locations: &[&str]) -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        DayRecord::new(date, 2024, locations.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_last_write_wins() {
        let mut data = GrassData::new();
        assert!(data.insert(record(1, 1, &["Tokyo"])).is_none());
        let replaced = data.insert(record(1, 1, &["Osaka"])).unwrap();

        assert_eq!(replaced.locations, vec!["Tokyo"]);
        assert_eq!(data.len(), 1);
        assert_eq!(data.days.values().next().unwrap().locations, vec!["Osaka"]);
    }

    #[test]
    fn test_split_weight() {
        let r = record(6, 15, &["Kyoto", "Kobe"]);
        assert_eq!(r.weight_per_location(), 0.5);
        assert_eq!(record(6, 16, &["Kyoto"]).weight_per_location(), 1.0);
    }

    #[test]
    fn test_days_in_year() {
        let mut data = GrassData::new();
        data.insert(record(1, 1, &["Tokyo"]));
        data.years.insert(2023);
        assert_eq!(data.days_in_year(2024).count(), 1);
        assert_eq!(data.days_in_year(2023).count(), 0);
        assert_eq!(data.years.iter().copied().collect::<Vec<_>>(), vec![2023, 2024]);
    }
}
