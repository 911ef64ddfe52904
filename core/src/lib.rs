pub mod calendar;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod render;
pub mod repository;
pub mod service;
pub mod usecase;

pub use calendar::{grid_cell, GridCell, GridPosition};
pub use config::{GrassConfig, Layout, MalformedPolicy};
pub use error::ParseError;
pub use input::{parse_line, year_from_file_name, ParseOptions};
pub use model::{display_weight, location_histogram, ColorTable, DayRecord, GrassData, Histogram};
pub use render::{PlacedSquare, Renderer};
pub use repository::{FileRecordRepository, RecordRepository};
pub use service::dto::LocationSummary;
pub use usecase::grass::{GrassUseCase, RenderReport};
