//! Ошибки приложения.
//!
//! Доменные типы живут в крейте `datebench-error`; здесь они
//! реэкспортируются вместе с ошибкой настроек запуска.

pub use datebench_error::{
    BenchResult, DatasetError, EngineError, ErrorExt, StackError, StatusCode, TargetError,
};
use thiserror::Error;

use crate::logging::LoggingConfigError;

/// Ошибки подготовки запуска: настройки и логирование.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Settings error: {0}")]
    Settings(#[from] ::config::ConfigError),
    #[error("Logging config error: {0}")]
    Logging(#[from] LoggingConfigError),
}
