/// Checker configuration
use crate::error::{CheckerError, Result};
use hires_catalog::{CatalogConfig, MORA_SEARCH_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::level_filters::LevelFilter;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "hires-checker.toml";

/// Prefix of environment overrides, e.g. `HIRES_LOG__FILE`
pub const ENV_PREFIX: &str = "HIRES";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CheckerConfig {
    #[serde(default = "default_scan")]
    pub scan: ScanSettings,

    #[serde(default = "default_log")]
    pub log: LogSettings,

    #[serde(default = "default_catalog")]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScanSettings {
    /// Library root; required, from `--path` or here
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub follow_links: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogSettings {
    /// Result log, truncated on every run
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Console threshold; `RUST_LOG` takes precedence
    #[serde(default = "default_console_level")]
    pub console_level: String,

    #[serde(default = "default_file_level")]
    pub file_level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_only_hires")]
    pub only_hires: bool,

    /// Per-request timeout; unset leaves the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CheckerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `hires-checker.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`CheckerConfig::load`] but reading overrides from `env`
    /// instead of the process environment when given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CheckerError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (HIRES_SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        Ok(settings.build()?.try_deserialize()?)
    }

    /// Apply command-line flags, which win over file and environment
    pub fn apply_cli(&mut self, root: Option<PathBuf>, log_file: Option<PathBuf>) {
        if let Some(root) = root {
            self.scan.root = Some(root);
        }
        if let Some(log_file) = log_file {
            self.log.file = log_file;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.log.file.as_os_str().is_empty() {
            return Err(CheckerError::Config("log file path is empty".to_string()));
        }

        parse_level(&self.log.console_level)?;
        parse_level(&self.log.file_level)?;

        if self.catalog.endpoint.is_empty() {
            return Err(CheckerError::Config(
                "catalog endpoint is empty (set HIRES_CATALOG__ENDPOINT)".to_string(),
            ));
        }

        Ok(())
    }

    /// Library root, or an error naming both ways to set it
    pub fn root(&self) -> Result<&Path> {
        self.scan.root.as_deref().ok_or_else(|| {
            CheckerError::Config(
                "no library root (pass --path or set scan.root / HIRES_SCAN__ROOT)".to_string(),
            )
        })
    }

    /// Provider settings derived from the `[catalog]` section
    pub fn catalog_config(&self) -> CatalogConfig {
        let mut catalog = CatalogConfig::new(self.catalog.endpoint.clone())
            .only_hires(self.catalog.only_hires);
        if let Some(secs) = self.catalog.timeout_secs {
            catalog = catalog.with_timeout(Duration::from_secs(secs));
        }
        catalog
    }
}

/// Parse a level name such as `warn` or `debug` (`off` is accepted)
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|_| CheckerError::Config(format!("unknown log level: {level:?}")))
}

// Default values
fn default_scan() -> ScanSettings {
    ScanSettings {
        root: None,
        follow_links: false,
    }
}

fn default_log() -> LogSettings {
    LogSettings {
        file: default_log_file(),
        console_level: default_console_level(),
        file_level: default_file_level(),
    }
}

fn default_log_file() -> PathBuf {
    PathBuf::from("result.log")
}

fn default_console_level() -> String {
    "warn".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

fn default_catalog() -> CatalogSettings {
    CatalogSettings {
        endpoint: default_endpoint(),
        only_hires: default_only_hires(),
        timeout_secs: None,
    }
}

fn default_endpoint() -> String {
    MORA_SEARCH_URL.to_string()
}

fn default_only_hires() -> bool {
    true
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            scan: default_scan(),
            log: default_log(),
            catalog: default_catalog(),
        }
    }
}
