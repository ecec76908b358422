//! Представление в виде массива фиксированной длины.
//!
//! Сортировка на месте, двоичный поиск (требует упорядоченности), линейный
//! поиск экстремумов. После сортировки массив сохраняется в файл.

use datebench_error::EngineError;

use super::{DataFileHandler, DateEngine, EngineResult, Extrema, Reorder, Representation, SearchOutcome};
use crate::database::{CalendarDate, DateDataset};

/// Массив дат, которым владеет движок.
#[derive(Debug, Clone)]
pub struct SortedArrayEngine {
    dates: Box<[CalendarDate]>,
    sorted: bool,
}

impl SortedArrayEngine {
    pub fn from_dataset(dataset: &DateDataset) -> Self {
        Self {
            dates: dataset.as_slice().into(),
            sorted: false,
        }
    }

    /// Сортировка по возрастанию на месте. Устойчивость не требуется:
    /// равные даты неразличимы.
    pub fn sort(&mut self) {
        self.dates.sort_unstable();
        self.sorted = true;
    }

    /// Была ли вызвана [`sort`](Self::sort).
    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    #[inline]
    pub fn as_slice(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Записывает массив в файл: по одной дате в строке, с перезаписью.
    ///
    /// Вызывается после [`sort`](Self::sort).
    pub fn persist(
        &self,
        handler: &DataFileHandler,
    ) -> EngineResult<usize> {
        handler
            .write_sorted(&self.dates)
            .map(|()| self.dates.len())
            .map_err(|e| EngineError::Persist {
                representation: Representation::Array.as_str(),
                path: handler.path().display().to_string(),
                reason: e.to_string(),
            })
    }
}

impl DateEngine for SortedArrayEngine {
    fn representation(&self) -> Representation {
        Representation::Array
    }

    fn len(&self) -> usize {
        self.dates.len()
    }

    /// Двоичный поиск. На неупорядоченном массиве результат не определён
    /// (но найденный индекс всегда указывает на равную дату).
    fn search(
        &self,
        target: CalendarDate,
    ) -> SearchOutcome {
        SearchOutcome::from_binary_search(self.dates.binary_search(&target))
    }

    fn min_max(&self) -> EngineResult<Extrema> {
        Extrema::scan(self.dates.iter().copied()).ok_or_else(|| self.empty_error())
    }

    fn reorder(&mut self) -> Reorder {
        self.sort();
        Reorder::Sorted
    }

    fn search_requires_order(&self) -> bool {
        true
    }
}
