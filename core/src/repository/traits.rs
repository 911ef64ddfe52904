use crate::model::day_record::GrassData;
use anyhow::Result;

pub trait RecordRepository {
    /// Build the full day map from scratch.
    fn load(&self) -> Result<GrassData>;
}
