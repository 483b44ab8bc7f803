use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "slate.toml";

/// Configuration from slate.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub board: BoardInfo,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardInfo {
    #[serde(default = "default_board_name")]
    pub name: String,
}

impl Default for BoardInfo {
    fn default() -> Self {
        BoardInfo {
            name: default_board_name(),
        }
    }
}

fn default_board_name() -> String {
    "Projects".to_string()
}

/// Bounds applied by the input form's validation pass
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_description_min")]
    pub description_min_length: usize,
    #[serde(default = "default_description_max")]
    pub description_max_length: usize,
    #[serde(default = "default_people_min")]
    pub people_min: u32,
    #[serde(default = "default_people_max")]
    pub people_max: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            description_min_length: default_description_min(),
            description_max_length: default_description_max(),
            people_min: default_people_min(),
            people_max: default_people_max(),
        }
    }
}

fn default_description_min() -> usize {
    5
}

fn default_description_max() -> usize {
    30
}

fn default_people_min() -> u32 {
    1
}

fn default_people_max() -> u32 {
    10
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Hex color overrides keyed by theme slot name, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Load a config file. The file must exist and parse.
pub fn load(path: &Path) -> Result<BoardConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load `slate.toml` from the working directory when present, defaults otherwise.
pub fn load_default() -> Result<BoardConfig, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load(path)
    } else {
        Ok(BoardConfig::default())
    }
}
