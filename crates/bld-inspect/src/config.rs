use std::{env, fs, path::Path};

use anyhow::Context;
use serde::Deserialize;

use bld_observe::LoggerConfig;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_ENV: &str = "BLD_CONFIG";

/// Process configuration. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
    /// Replaces the default environment whitelist when set.
    pub whitelist: Option<Vec<String>>,
}

impl Config {
    /// Load from the file named by [`CONFIG_ENV`], or defaults when it is unset.
    pub fn load() -> anyhow::Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bld_observe::LoggerFormat;

    #[test]
    fn empty_document_is_default() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert!(cfg.whitelist.is_none());
        assert_eq!(cfg.logger.format, LoggerFormat::Text);
    }

    #[test]
    fn reads_logger_and_whitelist() {
        let json = r#"{
            "logger": {"format": "json", "level": "bld_core=debug,info"},
            "whitelist": ["BUILD_LOGLEVEL", "HTTP_PROXY"]
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.logger.format, LoggerFormat::Json);
        assert_eq!(
            cfg.whitelist.as_deref(),
            Some(&["BUILD_LOGLEVEL".to_string(), "HTTP_PROXY".to_string()][..])
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_path(Path::new("/nonexistent/bld.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/bld.json"));
    }
}
