use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub draft: DraftConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draft: DraftConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DraftConfig {
    pub default_currency: Option<String>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            default_currency: None,
        }
    }
}
