use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    path::{Path, PathBuf},
};

use datebench_error::{EngineError, ErrorExt};
use tracing::{debug, error, info, warn};

use super::{
    summarize_timings, Collection, OperationRecord, Outcome, RunMode, RunReport, SectionReport,
};
use crate::{
    database::{CalendarDate, DateDataset},
    engine::{
        DataFileHandler, DateEngine, EngineResult, HashSetEngine, OrderedListEngine,
        PriorityQueueEngine, Reorder, Representation, SortedArrayEngine,
    },
    logging::timing::measure,
};

/// Прогоняет движки над общим набором данных.
///
/// Набор и искомая дата неизменны на всё время работы; каждый движок
/// строит собственную копию, поэтому порядок прогонов не влияет на их
/// результаты.
pub struct Comparator {
    dataset: DateDataset,
    target: CalendarDate,
    data_path: PathBuf,
    output: DataFileHandler,
}

/// Накопитель записей одного прогона.
struct Recorder<'a> {
    records: &'a mut Vec<OperationRecord>,
}

impl Comparator {
    pub fn new(
        dataset: DateDataset,
        target: CalendarDate,
        data_path: impl Into<PathBuf>,
        output: DataFileHandler,
    ) -> Self {
        Self {
            dataset,
            target,
            data_path: data_path.into(),
            output,
        }
    }

    pub fn dataset(&self) -> &DateDataset {
        &self.dataset
    }

    pub fn target(&self) -> CalendarDate {
        self.target
    }

    pub fn output_path(&self) -> &Path {
        self.output.path()
    }

    /// Прогоняет коллекции режима по порядку и собирает отчёт.
    pub fn run(
        &self,
        mode: RunMode,
    ) -> RunReport {
        info!(
            target_date = %self.target,
            records = self.dataset.len(),
            mode = %mode,
            "Starting comparison"
        );

        let sections: Vec<SectionReport> = mode
            .collections()
            .iter()
            .map(|&collection| self.run_collection(collection))
            .collect();

        let report = RunReport {
            target: self.target,
            data_path: self.data_path.display().to_string(),
            output_path: self.output.path().display().to_string(),
            dataset_len: self.dataset.len(),
            timings: summarize_timings(&sections),
            sections,
        };

        info!(
            sections = report.sections.len(),
            failed = report.failed_sections(),
            "Comparison finished"
        );
        report
    }

    /// Один прогон коллекции, затем последовательность массива.
    pub fn run_collection(
        &self,
        collection: Collection,
    ) -> SectionReport {
        isolate(collection, |rec| {
            match collection {
                Collection::List => self.list_sequence(rec)?,
                Collection::Queue => self.queue_sequence(rec)?,
                Collection::Set => self.set_sequence(rec)?,
            }
            self.array_sequence(rec)
        })
    }

    /// search → min/max → sort → search → min/max.
    fn list_sequence(
        &self,
        rec: &mut Recorder<'_>,
    ) -> EngineResult<()> {
        let mut list = OrderedListEngine::from_dataset(&self.dataset);
        self.search_step(rec, &list, "search before sort");
        self.min_max_step(rec, &list)?;
        self.reorder_step(rec, &mut list);
        self.search_step(rec, &list, "search after sort");
        self.min_max_step(rec, &list)
    }

    /// search → min/max → peek/poll/peek.
    fn queue_sequence(
        &self,
        rec: &mut Recorder<'_>,
    ) -> EngineResult<()> {
        let mut queue = PriorityQueueEngine::from_dataset(&self.dataset);
        self.search_step(rec, &queue, "search");
        self.min_max_step(rec, &queue)?;

        let (result, elapsed) = measure("priority queue head operations", || {
            queue.head_operations()
        });
        let outcome = match result {
            Ok(head) => Outcome::Head(head),
            Err(e) if e.is_empty_structure() => {
                info!(representation = %Representation::PriorityQueue, "Head operations skipped: queue is empty");
                Outcome::Empty
            }
            Err(e) => return Err(e),
        };
        rec.push(Representation::PriorityQueue, "head operations", elapsed, outcome);
        Ok(())
    }

    /// search → min/max → сверка с исходным набором.
    fn set_sequence(
        &self,
        rec: &mut Recorder<'_>,
    ) -> EngineResult<()> {
        let set = HashSetEngine::from_dataset(&self.dataset);
        self.search_step(rec, &set, "search");
        self.min_max_step(rec, &set)?;

        let (check, elapsed) = measure("hash set cross check", || set.cross_check(&self.dataset));
        if check.all_present {
            debug!(
                source = check.source_len,
                unique = check.set_len,
                duplicates = check.duplicates_collapsed(),
                "Cross check passed"
            );
        } else {
            warn!(
                source = check.source_len,
                unique = check.set_len,
                "Cross check failed: set is missing dataset elements"
            );
        }
        rec.push(Representation::HashSet, "cross check", elapsed, Outcome::CrossCheck(check));
        Ok(())
    }

    /// search → min/max → sort → search → min/max → сохранение.
    ///
    /// Ошибка записи фиксируется в отчёте и не прерывает прогон.
    fn array_sequence(
        &self,
        rec: &mut Recorder<'_>,
    ) -> EngineResult<()> {
        let mut array = SortedArrayEngine::from_dataset(&self.dataset);
        self.search_step(rec, &array, "search before sort");
        self.min_max_step(rec, &array)?;
        self.reorder_step(rec, &mut array);
        self.search_step(rec, &array, "search after sort");
        self.min_max_step(rec, &array)?;

        let (result, elapsed) = measure("array persist", || array.persist(&self.output));
        let outcome = match result {
            Ok(records) => Outcome::Persisted {
                path: self.output.path().display().to_string(),
                records,
            },
            Err(e) => {
                error!(error = %e, code = %e.status_code(), "Sorted array was not persisted");
                Outcome::Failed {
                    message: e.to_string(),
                }
            }
        };
        rec.push(Representation::Array, "persist", elapsed, outcome);
        Ok(())
    }

    fn search_step<E: DateEngine>(
        &self,
        rec: &mut Recorder<'_>,
        engine: &E,
        label: &str,
    ) {
        let representation = engine.representation();
        let (found, elapsed) = measure(format!("{representation} {label}"), || {
            engine.search(self.target)
        });
        debug!(
            representation = %representation,
            target_date = %self.target,
            result = %found,
            "Search finished"
        );
        rec.push(representation, label, elapsed, Outcome::Search { search: found });
    }

    /// Пустое представление даёт запись [`Outcome::Empty`], а не ошибку.
    fn min_max_step<E: DateEngine>(
        &self,
        rec: &mut Recorder<'_>,
        engine: &E,
    ) -> EngineResult<()> {
        let representation = engine.representation();
        let (result, elapsed) = measure(format!("{representation} min/max"), || engine.min_max());
        let outcome = match result {
            Ok(extrema) => Outcome::Extrema {
                min: extrema.min,
                max: extrema.max,
            },
            Err(e) if e.is_empty_structure() => {
                info!(representation = %representation, "Min/max skipped: {e}");
                Outcome::Empty
            }
            Err(e) => return Err(e),
        };
        rec.push(representation, "min/max", elapsed, outcome);
        Ok(())
    }

    fn reorder_step<E: DateEngine>(
        &self,
        rec: &mut Recorder<'_>,
        engine: &mut E,
    ) {
        let representation = engine.representation();
        let (reorder, elapsed) = measure(format!("{representation} sort"), || engine.reorder());
        let outcome = match reorder {
            Reorder::Sorted => Outcome::Sorted,
            Reorder::Unsupported => Outcome::Unsupported,
        };
        rec.push(representation, "sort", elapsed, outcome);
    }
}

impl Recorder<'_> {
    fn push(
        &mut self,
        representation: Representation,
        label: &str,
        elapsed: std::time::Duration,
        outcome: Outcome,
    ) {
        self.records.push(OperationRecord {
            representation,
            label: format!("{representation} {label}"),
            elapsed,
            outcome,
        });
    }
}

/// Выполняет прогон как отдельный домен отказа.
///
/// Ошибка движка и паника превращаются в `error` раздела; записи,
/// сделанные до сбоя, остаются в отчёте.
fn isolate<F>(
    collection: Collection,
    run: F,
) -> SectionReport
where
    F: FnOnce(&mut Recorder<'_>) -> EngineResult<()>,
{
    let mut section = SectionReport::new(collection);
    let result = {
        let mut rec = Recorder {
            records: &mut section.records,
        };
        panic::catch_unwind(AssertUnwindSafe(|| run(&mut rec)))
    };

    let failure = match result {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(e),
        Err(payload) => Some(EngineError::Panicked {
            collection: collection.as_str(),
            message: panic_message(payload.as_ref()),
        }),
    };

    if let Some(e) = failure {
        error!(
            collection = %collection,
            code = %e.status_code(),
            error = %e,
            "Collection run failed, continuing with the next one"
        );
        section.error = Some(e.to_string());
    }

    section
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
