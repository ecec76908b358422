use std::env;

use atty::Stream;
use chrono::{DateTime, Local};
use owo_colors::OwoColorize;

use super::RunMode;

/// Полный баннер с информацией о запуске.
pub const ASCII_FULL: &str = r#"
    Datebench {version}
    ----------------------------------------------
    Mode:             {mode}
    Run:              {run}
    Target:           {target}
    Data:             {data}
    Records:          {records}
    Output:           {output}
    PID:              {pid}
    OS/Arch:          {os}/{arch}
    CPU(s):           {cpus}
    Build:            {git} ({build_time})
"#;

/// Компактный баннер для вывода.
pub const ASCII_COMPACT: &str = r#"
Datebench {version} - {run} - {target} - {records} records - PID {pid}
"#;

/// Данные запуска для баннера.
#[derive(Debug, Clone)]
pub struct BannerInfo<'a> {
    pub run: RunMode,
    pub target: &'a str,
    pub data_path: &'a str,
    pub records: usize,
    pub output_path: &'a str,
}

/// Вывод баннера в stdout.
///
/// Вид выбирается переменной `DATEBENCH_BANNER` (`full` | `compact`); по
/// умолчанию debug-сборка печатает полный баннер, release — компактный.
pub fn print_banner(info: &BannerInfo<'_>) {
    let full = match env::var("DATEBENCH_BANNER").ok().as_deref() {
        Some("full") => true,
        Some("compact") => false,
        _ => cfg!(debug_assertions),
    };
    let color = atty::is(Stream::Stdout);

    println!("{}", render_banner(info, full, color));
}

/// Подстановка значений в шаблон баннера.
pub fn render_banner(
    info: &BannerInfo<'_>,
    full: bool,
    color: bool,
) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let bits = std::mem::size_of::<usize>() * 8;
    let version_with_bits = format!("{version} ({bits}-bit)");

    let mode = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    let pid = std::process::id().to_string();
    let records = info.records.to_string();
    let run = info.run.to_string();

    if !full {
        let s = ASCII_COMPACT
            .replace("{version}", &version_with_bits)
            .replace("{run}", &run)
            .replace("{target}", info.target)
            .replace("{records}", &records)
            .replace("{pid}", &pid);
        return if color {
            s.bold().green().to_string()
        } else {
            s
        };
    }

    let git = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let build_time_raw = option_env!("BUILD_TIME").unwrap_or("unknown");
    let build_time = match DateTime::parse_from_rfc3339(build_time_raw) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%d.%m.%Y %H:%M:%S")
            .to_string(),
        Err(_) => build_time_raw.to_string(),
    };

    let s = ASCII_FULL
        .replace("{version}", &version_with_bits)
        .replace("{mode}", mode)
        .replace("{run}", &run)
        .replace("{target}", info.target)
        .replace("{data}", info.data_path)
        .replace("{records}", &records)
        .replace("{output}", info.output_path)
        .replace("{pid}", &pid)
        .replace("{os}", std::env::consts::OS)
        .replace("{arch}", std::env::consts::ARCH)
        .replace("{cpus}", &num_cpus::get().to_string())
        .replace("{git}", git)
        .replace("{build_time}", &build_time);

    if !color {
        return s;
    }

    s.lines()
        .enumerate()
        .map(|(i, line)| {
            let trimmed = line.trim_start();
            if i == 1 {
                line.bold().bright_blue().to_string()
            } else if trimmed.starts_with("Target:") || trimmed.starts_with("Run:") {
                line.cyan().to_string()
            } else if trimmed.starts_with("Records:") || trimmed.starts_with("PID:") {
                line.magenta().to_string()
            } else if trimmed.starts_with("Build:") {
                line.dimmed().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
