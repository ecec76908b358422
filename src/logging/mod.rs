pub mod config;
mod filters;
mod formatter;
pub mod handle;
pub mod sinks;
pub mod timing;

pub use config::{LogFormat, LoggingConfig, LoggingConfigError};
pub use handle::LoggingHandle;
pub use timing::{measure, OperationTimer, TimingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Инициализация логирования с конфигурацией.
///
/// Повторный вызов в том же процессе возвращает ошибку (глобальный
/// subscriber уже установлен).
pub fn init_logging(
    mut config: LoggingConfig
) -> Result<LoggingHandle, Box<dyn std::error::Error>> {
    config.apply_env_overrides();
    config.validate()?;

    let env_filter = filters::build_filter_from_config(&config);
    let mut layers = Vec::new();

    if config.console_enabled {
        layers.push(sinks::console::layer_with_config(&config)?);
    }

    let file_guard = if config.file_enabled {
        let (file_layer, guard) = sinks::file::layer_with_config(&config)?;
        layers.push(file_layer);
        Some(guard)
    } else {
        None
    };

    timing::update_config(TimingConfig {
        slow_threshold: config.slow_op_threshold(),
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.level,
        log_format = %config.format,
        console_enabled = config.console_enabled,
        file_enabled = config.file_enabled,
        slow_op_threshold_ms = config.slow_op_threshold_ms,
        "Logging system initialized"
    );

    let file_dir = file_guard.as_ref().map(|_| config.log_dir.clone());
    Ok(LoggingHandle::new(file_guard, file_dir))
}
