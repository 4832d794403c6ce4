use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manages config directory and config file operations
#[derive(Clone)]
pub struct ConfigManager {
    pub(crate) config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager with a custom config directory (primarily for testing)
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Create a new ConfigManager for the given app name
    pub fn new(app_name: &str) -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| eyre!("Could not determine config directory"))?
            .join(app_name);

        Ok(Self { config_dir })
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get path to a specific config file or subdirectory
    pub fn config_path(&self, path: &str) -> PathBuf {
        self.config_dir.join(path)
    }

    /// Ensure the config directory exists
    pub fn ensure_config_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Load config.toml from the config directory, falling back to defaults
    /// when the file does not exist. Unknown keys are ignored; missing keys
    /// take their default values.
    pub fn load_config(&self) -> Result<AppConfig> {
        let config_path = self.config_path("config.toml");
        if !config_path.exists() {
            return Ok(AppConfig::default());
        }
        let contents = std::fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| eyre!("Invalid config file {}: {}", config_path.display(), e))?;
        Ok(config)
    }

    /// Write default configuration to config file
    pub fn write_default_config(&self, force: bool) -> Result<PathBuf> {
        let config_path = self.config_path("config.toml");

        if config_path.exists() && !force {
            return Err(eyre!(
                "Config file already exists at {}. Use --force to overwrite.",
                config_path.display()
            ));
        }

        self.ensure_config_dir()?;
        std::fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;

        Ok(config_path)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Configuration format version (for future compatibility)
    pub version: String,
    pub file_loading: FileLoadingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileLoadingConfig {
    pub delimiter: Option<u8>,
    pub has_header: Option<bool>,
    pub skip_rows: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of rows shown in the Sample tab
    pub sample_rows: usize,
    /// Tab activated on startup (columns-tab, sample-tab, interactions-tab)
    pub start_tab: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            sample_rows: 10,
            start_tab: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            file_loading: FileLoadingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# datrep configuration file
version = "1"

[file_loading]
# delimiter = 44        # byte value, e.g. 44 = ','
# has_header = true
# skip_rows = 0

[display]
# Number of rows shown in the Sample tab
sample_rows = 10
# Tab activated on startup: columns-tab, sample-tab, interactions-tab
# start_tab = "columns-tab"
"#;
