use std::collections::HashSet;

use serde::Serialize;

use super::{DateEngine, EngineResult, Extrema, Representation, SearchOutcome};
use crate::database::{CalendarDate, DateDataset};

/// Итог сверки множества с исходным набором.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrossCheck {
    pub source_len: usize,
    pub set_len: usize,
    /// Каждый элемент набора найден во множестве.
    pub all_present: bool,
}

impl CrossCheck {
    /// Сколько элементов набора схлопнулось как дубликаты. Это не ошибка.
    pub fn duplicates_collapsed(&self) -> usize {
        self.source_len.saturating_sub(self.set_len)
    }
}

/// Неупорядоченное множество уникальных дат.
///
/// Дубликаты набора схлопываются в один элемент: размер множества может
/// быть меньше размера набора.
#[derive(Debug, Clone)]
pub struct HashSetEngine {
    set: HashSet<CalendarDate>,
}

impl HashSetEngine {
    pub fn from_dataset(dataset: &DateDataset) -> Self {
        Self {
            set: dataset.iter().copied().collect(),
        }
    }

    pub fn contains(
        &self,
        date: &CalendarDate,
    ) -> bool {
        self.set.contains(date)
    }

    /// Проверяет, что каждый элемент исходного набора есть во множестве.
    ///
    /// Множество строится из того же набора, поэтому `all_present` должно быть
    /// истинным всегда.
    pub fn cross_check(
        &self,
        source: &DateDataset,
    ) -> CrossCheck {
        CrossCheck {
            source_len: source.len(),
            set_len: self.set.len(),
            all_present: source.iter().all(|d| self.set.contains(d)),
        }
    }
}

impl DateEngine for HashSetEngine {
    fn representation(&self) -> Representation {
        Representation::HashSet
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn search(
        &self,
        target: CalendarDate,
    ) -> SearchOutcome {
        SearchOutcome::from_membership(self.set.contains(&target))
    }

    /// Полный проход: порядок во множестве не поддерживается.
    fn min_max(&self) -> EngineResult<Extrema> {
        Extrema::scan(self.set.iter().copied()).ok_or_else(|| self.empty_error())
    }
}
