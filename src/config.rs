//! Configuration loading: endpoint credentials and report preferences.
//!
//! Sources in precedence order: explicit `--config` path, `./lossmap.toml`,
//! the platform config directory, then built-in defaults. Endpoint
//! credentials can always be overridden through the environment so CI and
//! demo deployments never need a file on disk.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::errors::LossmapError;

pub const CONFIG_FILE_NAME: &str = "lossmap.toml";

/// Environment override for the lead endpoint URL
pub const ENDPOINT_URL_VAR: &str = "LOSSMAP_ENDPOINT_URL";
/// Environment override for the lead endpoint key
pub const ENDPOINT_KEY_VAR: &str = "LOSSMAP_ENDPOINT_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LossmapConfig {
    pub endpoint: EndpointConfig,
    pub report: ReportConfig,
}

/// Where leads are forwarded. Unset or placeholder values mean the
/// submission path degrades to its offline acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub url: Option<String>,
    pub key: Option<String>,
}

impl EndpointConfig {
    /// Both credentials, if genuinely configured. Placeholder values from
    /// a starter config ("your-project", "your-anon-key") count as absent.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;
        let key = self.key.as_deref().filter(|k| !k.trim().is_empty())?;
        if url.contains("your-project") || key.contains("your-anon-key") {
            return None;
        }
        Some((url, key))
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var(ENDPOINT_URL_VAR) {
            self.url = Some(url);
        }
        if let Ok(key) = env::var(ENDPOINT_KEY_VAR) {
            self.key = Some(key);
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Company name printed on reports when the assessment file has none
    pub company: Option<String>,
    /// Length of the ranked shortlist in summaries and the export document
    pub top_gaps: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            company: None,
            top_gaps: 5,
        }
    }
}

/// Load configuration. An explicit path must exist; discovered paths fall
/// back to defaults when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<LossmapConfig, LossmapError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(LossmapError::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => discover_config_path(),
    };

    let mut config = match path {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            let content = fs::read_to_string(&path)?;
            toml::from_str(&content).map_err(|e| {
                LossmapError::config(format!("invalid config {}: {e}", path.display()))
            })?
        }
        None => LossmapConfig::default(),
    };

    config.endpoint = config.endpoint.with_env_overrides();
    Ok(config)
}

fn discover_config_path() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("lossmap").join(CONFIG_FILE_NAME);
    user.exists().then_some(user)
}

static CONFIG: OnceLock<LossmapConfig> = OnceLock::new();

/// Install the loaded configuration for the process
pub fn set_config(config: LossmapConfig) {
    let _ = CONFIG.set(config);
}

/// The process configuration, defaulting when none was installed
pub fn config() -> &'static LossmapConfig {
    CONFIG.get_or_init(LossmapConfig::default)
}

/// Starter config written by `lossmap init`
pub fn starter_config() -> &'static str {
    r#"# lossmap configuration

[endpoint]
# Where submitted leads are forwarded. Leave the placeholders in place to
# run fully offline; submissions then acknowledge locally without storing.
url = "https://your-project.supabase.co/functions/v1/submit-lead"
key = "your-anon-key"

[report]
# company = "Your Company"
top_gaps = 5
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_unconfigured() {
        assert_eq!(EndpointConfig::default().credentials(), None);
    }

    #[test]
    fn placeholder_credentials_are_unconfigured() {
        let endpoint = EndpointConfig {
            url: Some("https://your-project.supabase.co/functions/v1/submit-lead".into()),
            key: Some("real-key".into()),
        };
        assert_eq!(endpoint.credentials(), None);
    }

    #[test]
    fn real_credentials_are_returned() {
        let endpoint = EndpointConfig {
            url: Some("https://acme.supabase.co/functions/v1/submit-lead".into()),
            key: Some("anon-key-123".into()),
        };
        assert_eq!(
            endpoint.credentials(),
            Some(("https://acme.supabase.co/functions/v1/submit-lead", "anon-key-123"))
        );
    }

    #[test]
    fn starter_config_parses_and_stays_offline() {
        let config: LossmapConfig = toml::from_str(starter_config()).unwrap();
        assert_eq!(config.endpoint.credentials(), None);
        assert_eq!(config.report.top_gaps, 5);
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/lossmap.toml")));
        assert!(matches!(result, Err(LossmapError::Configuration(_))));
    }
}
