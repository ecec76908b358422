//! Datebench CLI
//!
//! Загружает набор дат, прогоняет над ним четыре представления (массив,
//! список, очередь с приоритетом, хеш-множество) для одной искомой даты и
//! печатает отчёт с замерами.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use datebench::{
    config::Settings,
    engine::DataFileHandler,
    init_logging,
    runner::{print_banner, BannerInfo, Comparator, RunMode},
    CalendarDate, DatasetError,
};
use tracing::{error, warn};

const USAGE_MESSAGE: &str = "Usage: datebench <target-date> [list|queue|set|all]
  <target-date>  required, the only mandatory argument
  [collection]   optional extension: run one collection instead of all (default: all)
Example:
  datebench \"2025-01-02\"          # date in YYYY-MM-DD format, runs every collection
  datebench \"2025-01-02T10:15\" set  # time part after 'T' is ignored";

const INVALID_DATE_MESSAGE: &str =
    "Error: invalid date format. Use an ISO calendar date (for example: 2024-03-16)";

/// Аргументы командной строки.
///
/// Флаги переопределяют значения из файла настроек и окружения.
#[derive(Parser, Debug)]
#[command(name = "datebench")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compare array, list, priority queue and hash set over a dataset of dates", long_about = None)]
struct Cli {
    /// Искомая дата
    #[arg(help = "Target date, YYYY-MM-DD (a 'T' time suffix is ignored)")]
    target: Option<String>,
    /// Какие коллекции прогонять
    #[arg(value_enum, default_value_t = RunMode::All, help = "Collections to run")]
    mode: RunMode,
    /// Файл набора данных
    #[arg(short, long, help = "Dataset file, one date per line")]
    data: Option<PathBuf>,
    /// Файл для отсортированного массива
    #[arg(short, long, help = "Where to write the sorted array (default: <data>.sorted)")]
    output: Option<PathBuf>,
    /// Файл настроек
    #[arg(short, long, help = "Settings file (default: optional ./datebench.toml)")]
    config: Option<PathBuf>,
    /// Формат отчёта
    #[arg(long, value_enum, default_value = "pretty", help = "Report format")]
    format: OutputFormat,
    /// Включить подробный вывод (debug)
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
    /// Подавить большинство логов (только warn/error)
    #[arg(short = 'q', long, help = "Only warnings and errors, no banner")]
    quiet: bool,
}

/// Формат отчёта
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Человекочитаемый формат
    Pretty,
    /// JSON формат
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(raw_target) = cli.target.as_deref() else {
        println!("{USAGE_MESSAGE}");
        return Ok(());
    };

    let target = match CalendarDate::parse_target(raw_target) {
        Ok(target) => target,
        Err(_) => {
            println!("{INVALID_DATE_MESSAGE}");
            return Ok(());
        }
    };

    let settings = load_settings(&cli)?;
    let _logging = init_logging(settings.log.clone())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let loaded = match DataFileHandler::new(&settings.data_path).load_with_context() {
        Ok(loaded) => loaded,
        Err(e) => {
            let line = match e.downcast_ref::<DatasetError>() {
                Some(DatasetError::MalformedLine { line, .. }) => Some(*line),
                _ => None,
            };
            error!(
                code = %e.status_code(),
                line,
                error = %e,
                "Dataset load failed, no collection will run"
            );
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&e.to_report())?);
            }
            return Err(e.into());
        }
    };

    if let Some(e) = &loaded.interrupted {
        warn!(
            error = %e,
            records = loaded.dataset.len(),
            "Dataset read was interrupted, continuing with the records read so far"
        );
    }

    let output_path = settings.output_path();
    if cli.format == OutputFormat::Pretty && !cli.quiet {
        let data = settings.data_path.display().to_string();
        let output = output_path.display().to_string();
        let target_str = target.to_string();
        print_banner(&BannerInfo {
            run: cli.mode,
            target: &target_str,
            data_path: &data,
            records: loaded.dataset.len(),
            output_path: &output,
        });
    }

    let comparator = Comparator::new(
        loaded.dataset,
        target,
        settings.data_path.clone(),
        DataFileHandler::new(output_path),
    );
    let report = comparator.run(cli.mode);

    match cli.format {
        OutputFormat::Pretty => {
            print!("{}", report.render_pretty(atty::is(atty::Stream::Stdout)))
        }
        OutputFormat::Json => println!("{}", report.to_json().context("failed to encode report")?),
    }

    Ok(())
}

/// Настройки с учётом флагов командной строки.
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings =
        Settings::load_checked(cli.config.as_deref()).context("failed to load settings")?;

    if let Some(data) = &cli.data {
        settings.data_path = data.clone();
    }
    if let Some(output) = &cli.output {
        settings.output_path = Some(output.clone());
    }
    if cli.quiet {
        settings.log.level = "warn".to_string();
    } else if cli.verbose {
        settings.log.level = "debug".to_string();
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_marks_collection_optional() {
        assert!(USAGE_MESSAGE.contains("<target-date>  required"));
        assert!(USAGE_MESSAGE.contains("[collection]   optional"));
        assert!(USAGE_MESSAGE.contains("(default: all)"));
    }

    #[test]
    fn test_target_and_default_mode() {
        let cli = Cli::try_parse_from(["datebench", "2024-03-16"]).unwrap();
        assert_eq!(cli.target.as_deref(), Some("2024-03-16"));
        assert_eq!(cli.mode, RunMode::All);
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_mode_and_flags() {
        let cli = Cli::try_parse_from([
            "datebench",
            "2024-03-16T08:00",
            "queue",
            "--data",
            "dates.txt",
            "--format",
            "json",
            "-q",
        ])
        .unwrap();
        assert_eq!(cli.mode, RunMode::Queue);
        assert_eq!(cli.data, Some(PathBuf::from("dates.txt")));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_target_is_not_a_parse_error() {
        let cli = Cli::try_parse_from(["datebench"]).unwrap();
        assert!(cli.target.is_none());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["datebench", "2024-03-16", "tree"]).is_err());
    }

    #[test]
    fn test_cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
