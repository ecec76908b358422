use std::error::Error;

use tracing_subscriber::layer::Layer as LayerTrait;
use tracing_subscriber::registry::LookupSpan;

use crate::logging::{config::LoggingConfig, formatter};

/// Консольный слой с конфигурацией.
///
/// ANSI-цвета отключаются, если stderr не терминал.
pub fn layer_with_config<S>(
    config: &LoggingConfig
) -> Result<Box<dyn LayerTrait<S> + Send + Sync>, Box<dyn Error>>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let with_ansi = config.with_ansi && atty::is(atty::Stream::Stderr);
    Ok(formatter::build_formatter_from_config(
        config,
        config.format,
        with_ansi,
    ))
}
