use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(alias = "baseUrl", rename = "baseurl")]
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Element ids the fetcher reads its filter from and renders into.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageConfig {
    #[serde(default = "default_material_type_id")]
    pub material_type: String,
    #[serde(default = "default_recyclable_id")]
    pub recyclable: String,
    #[serde(default = "default_compostable_id")]
    pub compostable: String,
    #[serde(default = "default_results_id")]
    pub results: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            material_type: default_material_type_id(),
            recyclable: default_recyclable_id(),
            compostable: default_compostable_id(),
            results: default_results_id(),
        }
    }
}

impl PageConfig {
    /// First id that is configured for more than one element.
    pub fn duplicate_id(&self) -> Option<&str> {
        let ids = [
            &self.material_type,
            &self.recyclable,
            &self.compostable,
            &self.results,
        ];
        ids.into_iter()
            .enumerate()
            .find(|&(i, id)| ids[..i].contains(&id))
            .map(|(_, id)| id.as_str())
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_material_type_id() -> String {
    "material_type".to_string()
}

fn default_recyclable_id() -> String {
    "recyclable".to_string()
}

fn default_compostable_id() -> String {
    "compostable".to_string()
}

fn default_results_id() -> String {
    "results".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(path, &content)
    }

    fn from_yaml(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
