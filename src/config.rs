use config::Config;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Log {
    pub enable_console: bool,
    pub ansi: bool,
    pub level: String,
    pub directives: Vec<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            enable_console: true,
            ansi: false,
            level: "INFO".to_owned(),
            directives: vec![],
        }
    }
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub cloud_disabled: bool,
    pub stream_mode: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            model: None,
            cloud_disabled: true,
            stream_mode: false,
        }
    }
}

// The api key must never end up in logs
impl std::fmt::Debug for TelemetryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelemetryConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("cloud_disabled", &self.cloud_disabled)
            .field("stream_mode", &self.stream_mode)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Configuration {
    #[serde(default = "Log::default")]
    pub log: Log,

    #[serde(default = "TelemetryConfig::default")]
    pub telemetry: TelemetryConfig,
}

impl Configuration {
    pub fn load(base_path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_environment(base_path, environment())
    }

    fn load_with_environment(
        base_path: impl AsRef<Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let base_path = base_path.as_ref();

        let cfg = Config::builder()
            .add_source(
                config::File::from(base_path.join("telemetry.toml"))
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::File::from(base_path.join("telemetry.json"))
                    .format(config::FileFormat::Json)
                    .required(false),
            )
            .add_source(environment)
            .build()?;

        cfg.try_deserialize()
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("CFG").separator("__")
}
