use crate::check;
use crate::errors::{GreeterError, Result};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "greeter.toml";

/// Environment variable prefix, e.g. `GREETER__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "GREETER";

/// Where library log messages go
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SinkKind {
    /// Append to `logging.file`
    #[default]
    File,
    Stdout,
    /// Forward into the diagnostics subscriber
    Tracing,
    Off,
}

impl SinkKind {
    /// Comma-separated list of accepted values, for error messages.
    pub fn valid_values() -> String {
        Self::iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for SinkKind {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::iter()
            .find(|v| v.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid log sink: '{}'. Valid: {}",
                    s,
                    Self::valid_values()
                )
            })
    }
}

/// Diagnostics output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// 应用配置（从 TOML 和环境变量加载）
///
/// - logging: 日志配置
/// - platform: 平台配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub platform: PlatformConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Priority: ENV > TOML file > defaults. With `path` set the file must
    /// exist and is read as TOML whatever its extension; otherwise
    /// `greeter.toml` is read when present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File, FileFormat};

        let file = match path {
            Some(path) => {
                if !std::path::Path::new(path).exists() {
                    return Err(GreeterError::config(format!(
                        "Config file not found: {}",
                        path
                    )));
                }
                File::new(path, FileFormat::Toml).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<AppConfig>()?)
    }

    /// Reject settings that would fail later at startup.
    pub fn validate(&self) -> Result<()> {
        check!(
            self.logging.sink != SinkKind::File || !self.logging.file.trim().is_empty(),
            GreeterError::config("logging.file must be set when logging.sink is \"file\"")
        );
        check!(
            self.platform.cpu_count != Some(0),
            GreeterError::config("platform.cpu_count must be at least 1")
        );
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn sample_toml() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directives for diagnostics, e.g. `info` or `greeter=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub sink: SinkKind,
    #[serde(default = "default_log_file")]
    pub file: String,
}

/// 平台配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PlatformConfig {
    /// Pin the reported CPU count instead of detecting it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<usize>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logfile.txt".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            sink: SinkKind::default(),
            file: default_log_file(),
        }
    }
}
