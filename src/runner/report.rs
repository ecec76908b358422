use std::{fmt, fmt::Write as _, time::Duration};

use owo_colors::OwoColorize;
use serde::{Serialize, Serializer};

use super::Collection;
use crate::{
    database::CalendarDate,
    engine::{CrossCheck, HeadOperations, Representation, SearchOutcome},
};

const SEPARATOR_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 50;

/// Итог одной операции.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Search { search: SearchOutcome },
    Extrema { min: CalendarDate, max: CalendarDate },
    /// Представление пусто: штатный итог, а не сбой.
    Empty,
    Sorted,
    Unsupported,
    Head(HeadOperations),
    CrossCheck(CrossCheck),
    Persisted { path: String, records: usize },
    Failed { message: String },
}

/// Замер одной операции над одним представлением.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    pub representation: Representation,
    pub label: String,
    #[serde(rename = "elapsed_us", serialize_with = "serialize_micros")]
    pub elapsed: Duration,
    pub outcome: Outcome,
}

/// Раздел отчёта: прогон одной коллекции.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub collection: Collection,
    pub records: Vec<OperationRecord>,
    /// Ошибка, прервавшая прогон. Записи до неё сохраняются.
    pub error: Option<String>,
}

/// Сводка замеров по одной метке операции за весь запуск.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimingSummary {
    pub label: String,
    pub count: u64,
    #[serde(rename = "total_us", serialize_with = "serialize_micros")]
    pub total: Duration,
    #[serde(rename = "max_us", serialize_with = "serialize_micros")]
    pub max: Duration,
}

/// Полный отчёт запуска.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub target: CalendarDate,
    pub data_path: String,
    pub output_path: String,
    pub dataset_len: usize,
    pub sections: Vec<SectionReport>,
    /// Агрегат по меткам в порядке первого появления.
    pub timings: Vec<TimingSummary>,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl SectionReport {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            records: Vec::new(),
            error: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Записи одного представления в порядке выполнения.
    pub fn records_for(
        &self,
        representation: Representation,
    ) -> impl Iterator<Item = &OperationRecord> + '_ {
        self.records
            .iter()
            .filter(move |r| r.representation == representation)
    }
}

impl TimingSummary {
    fn new(record: &OperationRecord) -> Self {
        Self {
            label: record.label.clone(),
            count: 1,
            total: record.elapsed,
            max: record.elapsed,
        }
    }

    fn add(
        &mut self,
        elapsed: Duration,
    ) {
        self.count += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
    }
}

/// Сворачивает записи всех разделов по метке. Одна и та же операция,
/// выполненная в нескольких прогонах, даёт одну строку.
pub fn summarize_timings(sections: &[SectionReport]) -> Vec<TimingSummary> {
    let mut summaries: Vec<TimingSummary> = Vec::new();
    for record in sections.iter().flat_map(|s| s.records.iter()) {
        match summaries.iter_mut().find(|t| t.label == record.label) {
            Some(summary) => summary.add(record.elapsed),
            None => summaries.push(TimingSummary::new(record)),
        }
    }
    summaries
}

impl RunReport {
    pub fn timing(
        &self,
        label: &str,
    ) -> Option<&TimingSummary> {
        self.timings.iter().find(|t| t.label == label)
    }

    pub fn section(
        &self,
        collection: Collection,
    ) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.collection == collection)
    }

    pub fn failed_sections(&self) -> usize {
        self.sections.iter().filter(|s| s.is_failed()).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Текстовый отчёт для консоли.
    pub fn render_pretty(
        &self,
        colored: bool,
    ) -> String {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let mut out = String::new();

        let _ = writeln!(out, "{separator}");
        let _ = writeln!(
            out,
            "{}",
            paint(colored, "DATE COLLECTION ANALYSIS", |s| s
                .bold()
                .bright_blue()
                .to_string())
        );
        let _ = writeln!(out, "Target:  {}", self.target);
        let _ = writeln!(out, "Data:    {} ({} records)", self.data_path, self.dataset_len);
        let _ = writeln!(out, "Output:  {}", self.output_path);
        let _ = writeln!(out, "{separator}");

        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                let _ = writeln!(out, "\n{}\n", "~".repeat(SEPARATOR_WIDTH - 20));
            }
            render_section(&mut out, section, self.dataset_len, colored);
        }

        if !self.timings.is_empty() {
            let _ = writeln!(out, "{separator}");
            render_timings(&mut out, &self.timings, colored);
        }

        let _ = writeln!(out, "{separator}");
        let summary = match self.failed_sections() {
            0 => paint(colored, "ANALYSIS COMPLETE", |s| s.green().bold().to_string()),
            n => paint(colored, &format!("ANALYSIS COMPLETE, {n} run(s) failed"), |s| {
                s.red().bold().to_string()
            }),
        };
        let _ = writeln!(out, "{summary}");
        let _ = writeln!(out, "{separator}");
        out
    }
}

fn render_section(
    out: &mut String,
    section: &SectionReport,
    dataset_len: usize,
    colored: bool,
) {
    let title = format!("{} RUN", section.collection.as_str().to_uppercase());
    let _ = writeln!(
        out,
        "{}",
        paint(colored, &title, |s| s.bold().cyan().to_string())
    );
    let _ = writeln!(out, "Dataset size: {dataset_len} records");
    let _ = writeln!(out, "{}", "-".repeat(SECTION_WIDTH));

    for record in &section.records {
        let label = format!("{:<32}", record.label);
        let elapsed = format!("{:>12}", format!("{:?}", record.elapsed));
        let outcome = match &record.outcome {
            Outcome::Failed { .. } => {
                paint(colored, &record.outcome.to_string(), |s| s.red().to_string())
            }
            Outcome::Empty => {
                paint(colored, &record.outcome.to_string(), |s| s.yellow().to_string())
            }
            other => other.to_string(),
        };
        let _ = writeln!(
            out,
            "  {}  {}  {}",
            label,
            paint(colored, &elapsed, |s| s.dimmed().to_string()),
            outcome
        );
    }

    if let Some(error) = &section.error {
        let line = format!("{} run aborted: {error}", section.collection);
        let _ = writeln!(out, "{}", paint(colored, &line, |s| s.red().bold().to_string()));
    }
}

fn render_timings(
    out: &mut String,
    timings: &[TimingSummary],
    colored: bool,
) {
    let _ = writeln!(
        out,
        "{}",
        paint(colored, "TIMING SUMMARY", |s| s.bold().cyan().to_string())
    );
    let _ = writeln!(out, "  {:<32}  {:>5}  {:>12}  {:>12}", "operation", "runs", "total", "max");
    for timing in timings {
        let _ = writeln!(
            out,
            "  {:<32}  {:>5}  {:>12}  {:>12}",
            timing.label,
            timing.count,
            format!("{:?}", timing.total),
            format!("{:?}", timing.max)
        );
    }
}

fn paint(
    colored: bool,
    text: &str,
    style: impl FnOnce(&str) -> String,
) -> String {
    if colored {
        style(text)
    } else {
        text.to_string()
    }
}

fn serialize_micros<S>(
    elapsed: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(elapsed.as_micros().min(u64::MAX as u128) as u64)
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for Outcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Outcome::Search { search } => write!(f, "{search}"),
            Outcome::Extrema { min, max } => write!(f, "min {min}, max {max}"),
            Outcome::Empty => f.write_str("empty, nothing to scan"),
            Outcome::Sorted => f.write_str("sorted ascending"),
            Outcome::Unsupported => f.write_str("reorder not supported"),
            Outcome::Head(head) => {
                write!(f, "peek {}, poll {}, ", head.peeked, head.polled)?;
                match head.next {
                    Some(next) => write!(f, "next {next}"),
                    None => f.write_str("queue now empty"),
                }
            }
            Outcome::CrossCheck(check) => {
                let verdict = if check.all_present {
                    "all elements present"
                } else {
                    "MISSING elements"
                };
                write!(
                    f,
                    "{verdict} ({} source, {} unique, {} duplicates collapsed)",
                    check.source_len,
                    check.set_len,
                    check.duplicates_collapsed()
                )
            }
            Outcome::Persisted { path, records } => write!(f, "{records} records -> {path}"),
            Outcome::Failed { message } => write!(f, "failed: {message}"),
        }
    }
}
