use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PantryConfig {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    pub embedding: EmbeddingConfig,
    pub ranking: RankingConfig,
    /// How this config was assembled. Filled by [`PantryConfig::load_from`].
    #[serde(skip)]
    pub origin: ConfigOrigin,
}

/// Where the config came from and which env overrides were rejected.
///
/// Loading happens before logging is set up, so these are reported
/// afterwards through [`PantryConfig::log_origin`].
#[derive(Debug, Clone, Default)]
pub struct ConfigOrigin {
    /// The TOML file that was read, or `None` when defaults were used.
    pub file: Option<PathBuf>,
    /// The path that was tried when no file was found.
    pub missing_file: Option<PathBuf>,
    /// `(variable, value)` pairs that could not be applied.
    pub ignored_overrides: Vec<(String, String)>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    pub model: String,
    pub cache_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RankingConfig {
    pub top_k: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            log_level: "info".into(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "indian_recipes.csv".into(),
        }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        let cache_dir = default_pantry_dir()
            .join("models")
            .to_string_lossy()
            .into_owned();
        Self {
            provider: "local".into(),
            model: "all-MiniLM-L6-v2".into(),
            cache_dir,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

/// Returns `~/.pantry/`
pub fn default_pantry_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".pantry")
}

/// Returns the default config file path: `~/.pantry/config.toml`
pub fn default_config_path() -> PathBuf {
    default_pantry_dir().join("config.toml")
}

impl PantryConfig {
    /// Load config from the default TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let mut config: PantryConfig =
                toml::from_str(&contents).context("failed to parse config TOML")?;
            config.origin.file = Some(path.to_path_buf());
            config
        } else {
            let mut config = PantryConfig::default();
            config.origin.missing_file = Some(path.to_path_buf());
            config
        };

        config.origin.ignored_overrides = config.apply_env_overrides();
        Ok(config)
    }

    /// Report how the config was loaded. Call once the subscriber is installed.
    pub fn log_origin(&self) {
        match (&self.origin.file, &self.origin.missing_file) {
            (Some(file), _) => info!(path = %file.display(), "config loaded"),
            (None, Some(missing)) => {
                info!("no config file at {}, using defaults", missing.display())
            }
            (None, None) => {}
        }
        for (var, value) in &self.origin.ignored_overrides {
            warn!(%var, %value, "ignoring unparseable environment override");
        }
    }

    /// Apply environment variable overrides
    /// (PANTRY_DATASET, PANTRY_HOST, PANTRY_PORT, PANTRY_LOG_LEVEL).
    ///
    /// Returns the overrides that were rejected, as `(variable, value)`.
    fn apply_env_overrides(&mut self) -> Vec<(String, String)> {
        let mut ignored = Vec::new();
        if let Ok(val) = std::env::var("PANTRY_DATASET") {
            self.dataset.path = val;
        }
        if let Ok(val) = std::env::var("PANTRY_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("PANTRY_PORT") {
            match val.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => ignored.push(("PANTRY_PORT".to_string(), val)),
            }
        }
        if let Ok(val) = std::env::var("PANTRY_LOG_LEVEL") {
            self.server.log_level = val;
        }
        ignored
    }

    /// Resolve the dataset path, expanding `~` if needed.
    pub fn resolved_dataset_path(&self) -> PathBuf {
        expand_tilde(&self.dataset.path)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
