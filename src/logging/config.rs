use std::{env, fmt, fs, io, path::PathBuf, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Формат строк лога.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingConfigError {
    #[error("unknown log level '{0}', expected one of: trace, debug, info, warn, error, off")]
    InvalidLevel(String),
    #[error("unknown log format '{0}', expected one of: pretty, compact, json")]
    InvalidFormat(String),
    #[error("file logging is enabled but file_name is empty")]
    EmptyFileName,
}

/// Конфигурация логирования.
///
/// Заполняется из секции `log` настроек; отсутствующие поля берутся из
/// [`Default`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Уровень для крейтов datebench (`RUST_LOG` имеет приоритет)
    pub level: String,
    pub format: LogFormat,
    pub console_enabled: bool,
    pub with_ansi: bool,
    pub with_target: bool,
    /// Дублировать лог в файл с ежедневной ротацией
    pub file_enabled: bool,
    pub log_dir: PathBuf,
    pub file_name: String,
    /// Порог медленной операции, мс
    pub slow_op_threshold_ms: u64,
}

impl LoggingConfig {
    /// Переопределения из окружения: `DATEBENCH_LOG_LEVEL`,
    /// `DATEBENCH_LOG_FORMAT`, `DATEBENCH_LOG_DIR`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("DATEBENCH_LOG_LEVEL") {
            self.level = level.to_lowercase();
        }
        if let Ok(format) = env::var("DATEBENCH_LOG_FORMAT") {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(e) => eprintln!("Ignoring DATEBENCH_LOG_FORMAT: {e}"),
            }
        }
        if let Ok(dir) = env::var("DATEBENCH_LOG_DIR") {
            self.log_dir = PathBuf::from(dir);
            self.file_enabled = true;
        }
    }

    pub fn validate(&self) -> Result<(), LoggingConfigError> {
        if !LEVELS.contains(&self.level.as_str()) {
            return Err(LoggingConfigError::InvalidLevel(self.level.clone()));
        }
        if self.file_enabled && self.file_name.trim().is_empty() {
            return Err(LoggingConfigError::EmptyFileName);
        }
        Ok(())
    }

    /// Создаёт каталог логов, если включён файловый вывод.
    pub fn ensure_log_dir(&self) -> io::Result<()> {
        if self.file_enabled {
            fs::create_dir_all(&self.log_dir)?;
        }
        Ok(())
    }

    /// Директива `EnvFilter`: сторонние крейты — `warn`, наши — `level`.
    pub fn build_filter_directive(&self) -> String {
        format!(
            "warn,datebench={level},datebench_error={level},slow_op=warn",
            level = self.level
        )
    }

    pub fn slow_op_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_op_threshold_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            console_enabled: true,
            with_ansi: true,
            with_target: false,
            file_enabled: false,
            log_dir: PathBuf::from("logs"),
            file_name: "datebench.log".to_string(),
            slow_op_threshold_ms: 50,
        }
    }
}

impl FromStr for LogFormat {
    type Err = LoggingConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingConfigError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let s = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        };
        f.write_str(s)
    }
}
