use std::collections::VecDeque;

use super::{DateEngine, EngineResult, Extrema, Reorder, Representation, SearchOutcome};
use crate::database::{CalendarDate, DateDataset};

/// Динамический упорядочиваемый список дат.
///
/// Поиск двоичный и, как у массива, корректен только после
/// [`sort`](Self::sort). Экстремумы — через `Iterator::min`/`max`.
#[derive(Debug, Clone)]
pub struct OrderedListEngine {
    list: VecDeque<CalendarDate>,
    sorted: bool,
}

impl OrderedListEngine {
    pub fn from_dataset(dataset: &DateDataset) -> Self {
        Self {
            list: dataset.iter().copied().collect(),
            sorted: false,
        }
    }

    pub fn sort(&mut self) {
        self.list.make_contiguous().sort_unstable();
        self.sorted = true;
    }

    #[inline]
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> + '_ {
        self.list.iter()
    }

    pub fn to_vec(&self) -> Vec<CalendarDate> {
        self.list.iter().copied().collect()
    }
}

impl DateEngine for OrderedListEngine {
    fn representation(&self) -> Representation {
        Representation::List
    }

    fn len(&self) -> usize {
        self.list.len()
    }

    fn search(
        &self,
        target: CalendarDate,
    ) -> SearchOutcome {
        SearchOutcome::from_binary_search(self.list.binary_search(&target))
    }

    fn min_max(&self) -> EngineResult<Extrema> {
        match (self.list.iter().min(), self.list.iter().max()) {
            (Some(&min), Some(&max)) => Ok(Extrema { min, max }),
            _ => Err(self.empty_error()),
        }
    }

    fn reorder(&mut self) -> Reorder {
        self.sort();
        Reorder::Sorted
    }

    fn search_requires_order(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(raw: &[&str]) -> DateDataset {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn d(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    /// Тест проверяет последовательность поиск → сортировка → поиск.
    #[test]
    fn test_search_sort_search() {
        let ds = dataset(&["2024-07-01", "2024-03-10", "2024-01-05"]);
        let mut engine = OrderedListEngine::from_dataset(&ds);

        let before = engine.search(d("2024-03-10"));
        if let Some(i) = before.index() {
            assert_eq!(engine.to_vec()[i], d("2024-03-10"));
        }

        engine.sort();
        assert_eq!(engine.search(d("2024-03-10")), SearchOutcome::At(1));
        assert_eq!(engine.search(d("2024-03-11")), SearchOutcome::Absent);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let ds = dataset(&["2024-07-01", "2024-03-10", "2024-03-10", "2024-01-05"]);
        let mut engine = OrderedListEngine::from_dataset(&ds);

        engine.sort();
        let once = engine.to_vec();
        engine.sort();
        assert_eq!(engine.to_vec(), once);
        assert!(engine.is_sorted());
    }

    #[test]
    fn test_min_max() {
        let ds = dataset(&["2024-07-01", "2024-03-10", "2024-01-05"]);
        let e = OrderedListEngine::from_dataset(&ds).min_max().unwrap();
        assert_eq!(e.min, d("2024-01-05"));
        assert_eq!(e.max, d("2024-07-01"));

        let empty = OrderedListEngine::from_dataset(&DateDataset::default());
        assert!(empty.min_max().unwrap_err().is_empty_structure());
        assert_eq!(empty.search(d("2024-01-01")), SearchOutcome::Absent);
    }
}
