pub mod file;
pub mod traits;

pub use file::{parse_records, FileRecordRepository};
pub use traits::RecordRepository;
