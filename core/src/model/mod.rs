pub mod color;
pub mod day_record;
pub mod histogram;

pub use color::ColorTable;
pub use day_record::{DayMap, DayRecord, GrassData, YearSet};
pub use histogram::{display_weight, location_histogram, Histogram};
