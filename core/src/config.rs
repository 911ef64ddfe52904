use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::ParseOptions;
use crate::model::color::ColorTable;

const CONFIG_DIR_NAME: &str = ".location-grass";
const CONFIG_FILE_NAME: &str = "config.json";

/// What to do with a line that does not parse.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    #[default]
    Fail,
    Skip,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Layout {
    pub square_size: f64,
    pub gap: f64,
    pub top_margin: f64,
    pub left_margin: f64,
    pub legend_square_size: f64,
    pub legend_gap: f64,
    /// Columns reserved for a year, including the spill-over weeks.
    pub max_weeks: u32,
    pub year_canvas: CanvasSize,
    pub legend_canvas: CanvasSize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            square_size: 10.0,
            gap: 2.0,
            top_margin: 50.0,
            left_margin: 50.0,
            legend_square_size: 20.0,
            legend_gap: 4.0,
            max_weeks: 54,
            year_canvas: CanvasSize {
                width: 1000,
                height: 200,
            },
            legend_canvas: CanvasSize {
                width: 1000,
                height: 500,
            },
        }
    }
}

impl Layout {
    pub fn pitch(&self) -> f64 {
        self.square_size + self.gap
    }

    pub fn legend_pitch(&self) -> f64 {
        self.legend_square_size + self.legend_gap
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GrassConfig {
    pub data_dir: PathBuf,
    pub image_dir: PathBuf,
    pub layout: Layout,
    pub colors: ColorTable,
    pub split_locations: bool,
    pub on_malformed: MalformedPolicy,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            image_dir: PathBuf::from("image"),
            layout: Layout::default(),
            colors: ColorTable::default(),
            split_locations: true,
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl GrassConfig {
    /// Read `path` if given, else the per-user config if it exists, else
    /// fall back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            split_locations: self.split_locations,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
