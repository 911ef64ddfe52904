use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_FALLBACK_COLOR: &str = "gray";

/// Location name -> fill color. Any SVG color string is accepted.
///
/// Colors read from a config are laid over the built-in table; a name
/// mapped to an empty string removes it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ColorTable {
    #[serde(deserialize_with = "over_default_colors")]
    pub colors: BTreeMap<String, String>,
    pub fallback: String,
}

impl Default for ColorTable {
    fn default() -> Self {
        let colors = [
            ("Tochigi", "green"),
            ("Tokyo", "black"),
            ("Osaka", "yellow"),
            ("Kyoto", "brown"),
            ("Kobe", "red"),
            ("Hida", "white"),
            ("USA", "red"),
            ("Korea", "red"),
            ("China", "red"),
            ("Australia", "red"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            colors,
            fallback: DEFAULT_FALLBACK_COLOR.to_string(),
        }
    }
}

fn over_default_colors<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut colors = ColorTable::default().colors;
    for (location, color) in overrides {
        if color.is_empty() {
            colors.remove(&location);
        } else {
            colors.insert(location, color);
        }
    }
    Ok(colors)
}

impl ColorTable {
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            colors: BTreeMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn with(mut self, location: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(location.into(), color.into());
        self
    }

    pub fn color_for(&self, location: &str) -> &str {
        self.colors
            .get(location)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn is_known(&self, location: &str) -> bool {
        self.colors.contains_key(location)
    }
}
