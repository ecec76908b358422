use std::error::Error;

use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{fmt, layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::config::{LogFormat, LoggingConfig};

/// Файловый слой: `<log_dir>/<file_name>.<дата>`, ежедневная ротация,
/// неблокирующая запись. Guard держит фонового писателя живым.
pub fn layer_with_config<S>(
    config: &LoggingConfig
) -> Result<(Box<dyn LayerTrait<S> + Send + Sync>, WorkerGuard), Box<dyn Error>>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    config.ensure_log_dir()?;

    let file_appender = daily(&config.log_dir, &config.file_name);
    let (writer, guard) = non_blocking(file_appender);

    let layer: Box<dyn LayerTrait<S> + Send + Sync> = match config.format {
        LogFormat::Json => Box::new(fmt::layer().json().with_ansi(false).with_writer(writer)),
        LogFormat::Pretty | LogFormat::Compact => {
            Box::new(fmt::layer().with_ansi(false).with_writer(writer))
        }
    };

    Ok((layer, guard))
}
