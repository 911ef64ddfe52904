pub mod grass;
pub mod draw;

pub use grass::{LegendRow, PlacedSquare, Renderer, TextLabel, WEEKDAY_LABELS};
