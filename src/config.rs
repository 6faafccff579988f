//! Configuration
//!
//! TOML file with every field optional. Lookup order: an explicit path,
//! then `<config dir>/c11/config.toml`, then built-in defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algorithm::{Algorithm, C11_STAGES, STAGE_COUNT, X11_STAGES};
use crate::logging::{LoggingConfig, level_filter};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Which stage descriptor to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainKind {
    #[default]
    C11,
    X11,
}

impl ChainKind {
    pub fn stages(self) -> &'static [Algorithm; STAGE_COUNT] {
        match self {
            ChainKind::C11 => C11_STAGES,
            ChainKind::X11 => X11_STAGES,
        }
    }
}

impl FromStr for ChainKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c11" => Ok(ChainKind::C11),
            "x11" => Ok(ChainKind::X11),
            other => Err(format!("unknown chain {other:?} (expected c11 or x11)")),
        }
    }
}

impl fmt::Display for ChainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChainKind::C11 => "c11",
            ChainKind::X11 => "x11",
        })
    }
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    pub chain: ChainKind,
    pub output: OutputFormat,
    /// Print digests byte-reversed, as block explorers do
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub iterations: u32,
    /// Worker threads for the batch run; None means one per core
    pub threads: Option<usize>,
    /// Bytes per hashed input (80 is a block header)
    pub input_len: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            threads: None,
            input_len: 80,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub hash: HashConfig,
    pub benchmark: BenchmarkConfig,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the configuration for a run.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        level_filter(&self.logging.level)?;
        if self.benchmark.iterations == 0 {
            return Err(ConfigError::Invalid(
                "benchmark.iterations must be at least 1".into(),
            ));
        }
        if self.benchmark.threads == Some(0) {
            return Err(ConfigError::Invalid(
                "benchmark.threads must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// `<platform config dir>/c11/config.toml`
#[cfg(feature = "cli")]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("c11").join("config.toml"))
}

#[cfg(not(feature = "cli"))]
pub fn default_config_path() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogFormat;
    use std::io::Write;

    #[test]
    fn test_empty_file_is_all_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            level = "info"
            format = "json"
            output = "stdout"
            color = false

            [hash]
            chain = "x11"
            output = "json"
            reverse = true

            [benchmark]
            iterations = 500
            threads = 4
            input_len = 64
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.logging.color);
        assert_eq!(config.hash.chain, ChainKind::X11);
        assert_eq!(config.hash.output, OutputFormat::Json);
        assert!(config.hash.reverse);
        assert_eq!(config.benchmark.iterations, 500);
        assert_eq!(config.benchmark.threads, Some(4));
        assert_eq!(config.benchmark.input_len, 64);
    }

    #[test]
    fn test_rejects_unknown_chain() {
        let err = AppConfig::from_toml_str("[hash]\nchain = \"x13\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_iterations_and_threads() {
        let err = AppConfig::from_toml_str("[benchmark]\niterations = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        let err = AppConfig::from_toml_str("[benchmark]\nthreads = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[hash]\nreverse = true").unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(config.hash.reverse);
        assert_eq!(config.hash.chain, ChainKind::C11);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing)),
            Err(ConfigError::NotFound(p)) if p == missing
        ));
    }

    #[test]
    fn test_chain_kind_stages() {
        assert_eq!(ChainKind::C11.stages(), C11_STAGES);
        assert_eq!(ChainKind::X11.stages(), X11_STAGES);
        assert_eq!("X11".parse::<ChainKind>(), Ok(ChainKind::X11));
        assert_eq!(ChainKind::C11.to_string(), "c11");
    }
}
