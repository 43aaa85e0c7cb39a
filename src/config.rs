use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub metrics: MetricsSettings,
    #[serde(default)]
    pub fleet: FleetSettings,
    #[serde(default)]
    pub suggestions: SuggestionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Remote metrics endpoint; the bundled readings are served when unset
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsSettings {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FleetSettings {
    pub dataset_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionSettings {
    #[serde(default = "default_suggestion_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            default_limit: default_suggestion_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_suggestion_limit() -> usize { 5 }
fn default_max_limit() -> usize { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with VIGIL_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., VIGIL__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("VIGIL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("VIGIL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }
}

/// Apply the short-form environment overrides
///
/// `METRICS_URL` replaces `metrics.endpoint` and `FLEET_DATASET` replaces
/// `fleet.dataset_path`.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    apply_overrides(settings, |key| std::env::var(key).ok())
}

fn apply_overrides<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    if let Some(endpoint) = lookup("METRICS_URL") {
        builder = builder.set_override("metrics.endpoint", endpoint)?;
    }
    if let Some(dataset) = lookup("FLEET_DATASET") {
        builder = builder.set_override("fleet.dataset_path", dataset)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suggestions() {
        let suggestions = SuggestionSettings::default();
        assert_eq!(suggestions.default_limit, 5);
        assert_eq!(suggestions.max_limit, 50);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_file_fills_missing_sections() {
        let path = std::env::temp_dir().join(format!("vigil-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[server]\nport = 9090\n\n[metrics]\nendpoint = \"http://localhost:9000/metrics\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.metrics.endpoint.as_deref(), Some("http://localhost:9000/metrics"));
        assert_eq!(settings.suggestions.default_limit, 5);
        assert!(settings.fleet.dataset_path.is_none());
    }

    #[test]
    fn test_short_form_overrides_replace_file_values() {
        let path = std::env::temp_dir().join(format!("vigil-overrides-{}.toml", std::process::id()));
        std::fs::write(&path, "[metrics]\nendpoint = \"http://file/metrics\"\n").unwrap();

        let file_config = Config::builder()
            .add_source(File::from(path.as_path()))
            .build()
            .unwrap();
        std::fs::remove_file(&path).ok();

        let settings: Settings = apply_overrides(file_config, |key| match key {
            "METRICS_URL" => Some("http://env/metrics".to_string()),
            "FLEET_DATASET" => Some("/srv/fleet.json".to_string()),
            _ => None,
        })
        .unwrap()
        .try_deserialize()
        .unwrap();

        assert_eq!(settings.metrics.endpoint.as_deref(), Some("http://env/metrics"));
        assert_eq!(settings.fleet.dataset_path.as_deref(), Some("/srv/fleet.json"));
        assert_eq!(settings.server.port, 8080);
    }
}
