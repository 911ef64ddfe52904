use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::model::color::ColorTable;
use crate::model::histogram::{display_weight, Histogram};

/// One ranked row of the location histogram, ready for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LocationSummary {
    pub rank: usize,
    pub location: String,
    pub days: f64,
    pub display_days: String,
    /// Fraction of all counted days, 0.0..=1.0.
    pub share: f64,
    pub color: String,
}

impl LocationSummary {
    pub fn from_histogram(histo: &Histogram<String>, colors: &ColorTable) -> Vec<Self> {
        let total = histo.total();
        histo
            .flatten()
            .into_iter()
            .enumerate()
            .map(|(i, (location, days))| LocationSummary {
                rank: i + 1,
                display_days: display_weight(days),
                share: if total > 0.0 { days / total } else { 0.0 },
                color: colors.color_for(&location).to_string(),
                location,
                days,
            })
            .collect()
    }
}

pub fn to_json(summaries: &[LocationSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
