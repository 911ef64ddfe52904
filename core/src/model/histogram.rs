use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::model::day_record::DayRecord;

/// Weighted counter that remembers the order keys were first seen.
#[derive(Debug, Clone)]
pub struct Histogram<K> {
    entries: Vec<(K, f64)>,
    index: HashMap<K, usize>,
}

impl<K> Default for Histogram<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Histogram<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, key: K) {
        self.fill_weighted(key, 1.0);
    }

    pub fn fill_weighted(&mut self, key: K, weight: f64) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += weight,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, weight));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries by descending weight. `sort_by` is stable, so equal weights
    /// keep first-seen order.
    pub fn flatten(&self) -> Vec<(K, f64)> {
        let mut flat = self.entries.clone();
        flat.sort_by(|a, b| b.1.total_cmp(&a.1));
        flat
    }
}

impl<K: fmt::Display + Eq + Hash + Clone> fmt::Display for Histogram<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .flatten()
            .into_iter()
            .map(|(k, w)| format!("{}: {}", k, display_weight(w)))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// Location -> days, crediting `1/N` of a split day to each of its N places.
pub fn location_histogram<'a, I>(records: I) -> Histogram<String>
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let mut histo = Histogram::new();
    for record in records {
        let weight = record.weight_per_location();
        for location in &record.locations {
            histo.fill_weighted(location.clone(), weight);
        }
    }
    histo
}

/// Round to one decimal; whole numbers print without a fraction.
pub fn display_weight(weight: f64) -> String {
    let rounded = (weight * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fill_and_flatten() {
        let mut histo = Histogram::new();
        histo.fill("Tokyo");
        histo.fill("Osaka");
        histo.fill("Osaka");
        histo.fill_weighted("Kobe", 0.5);

        assert_eq!(
            histo.flatten(),
            vec![("Osaka", 2.0), ("Tokyo", 1.0), ("Kobe", 0.5)]
        );
        assert_eq!(histo.get(&"Tokyo"), Some(1.0));
        assert_eq!(histo.get(&"Nara"), None);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut histo = Histogram::new();
        for key in ["Hida", "Tokyo", "Kobe", "Tokyo", "Hida", "Kobe"] {
            histo.fill(key);
        }
        let keys: Vec<_> = histo.flatten().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Hida", "Tokyo", "Kobe"]);
    }

    #[test]
    fn test_split_days_sum_to_day_count() {
        let date = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
        let records = vec![
            DayRecord::new(date(14), 2024, vec!["Kyoto".into()]),
            DayRecord::new(date(15), 2024, vec!["Kyoto".into(), "Kobe".into()]),
            DayRecord::new(date(16), 2024, vec!["Kobe".into(), "Osaka".into(), "Tokyo".into()]),
        ];
        let histo = location_histogram(&records);

        assert_eq!(histo.get(&"Kyoto".to_string()), Some(1.5));
        assert!((histo.get(&"Kobe".to_string()).unwrap() - (0.5 + 1.0 / 3.0)).abs() < 1e-9);
        assert!((histo.total() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_weight() {
        assert_eq!(display_weight(123.04), "123");
        assert_eq!(display_weight(45.67), "45.7");
        assert_eq!(display_weight(123.0), "123");
        assert_eq!(display_weight(123.4), "123.4");
        assert_eq!(display_weight(0.5), "0.5");
        assert_eq!(display_weight(2.96), "3");
    }

    #[test]
    fn test_display() {
        let mut histo = Histogram::new();
        histo.fill_weighted("Kyoto", 0.5);
        histo.fill("Tokyo");
        assert_eq!(histo.to_string(), "{Tokyo: 1, Kyoto: 0.5}");
    }
}
