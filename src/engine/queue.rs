use std::{cmp::Reverse, collections::BinaryHeap};

use serde::Serialize;

use super::{DateEngine, EngineResult, Extrema, Representation, SearchOutcome};
use crate::database::{CalendarDate, DateDataset};

/// Итог операций с головой очереди: peek → poll → peek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadOperations {
    /// Голова до извлечения.
    pub peeked: CalendarDate,
    /// Извлечённый элемент (совпадает с `peeked`).
    pub polled: CalendarDate,
    /// Новая голова, `None`, если очередь опустела.
    pub next: Option<CalendarDate>,
}

/// Очередь с приоритетом (min-heap) по календарному порядку.
///
/// Эффективно доступен только минимум. Поиск и максимум требуют полного
/// прохода по куче.
#[derive(Debug, Clone)]
pub struct PriorityQueueEngine {
    heap: BinaryHeap<Reverse<CalendarDate>>,
}

impl PriorityQueueEngine {
    pub fn from_dataset(dataset: &DateDataset) -> Self {
        Self {
            heap: dataset.iter().copied().map(Reverse).collect(),
        }
    }

    /// Текущий минимум без извлечения.
    #[inline]
    pub fn peek(&self) -> Option<CalendarDate> {
        self.heap.peek().map(|Reverse(d)| *d)
    }

    /// Извлекает текущий минимум.
    #[inline]
    pub fn poll(&mut self) -> Option<CalendarDate> {
        self.heap.pop().map(|Reverse(d)| d)
    }

    /// peek, poll и снова peek. На пустой очереди ничего не меняет и
    /// возвращает [`EngineError::EmptyStructure`](datebench_error::EngineError).
    pub fn head_operations(&mut self) -> EngineResult<HeadOperations> {
        let peeked = self.peek().ok_or_else(|| self.empty_error())?;
        let polled = self.poll().ok_or_else(|| self.empty_error())?;
        let next = self.peek();

        Ok(HeadOperations {
            peeked,
            polled,
            next,
        })
    }

    /// Элементы в порядке кучи (не упорядочены).
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.heap.iter().map(|Reverse(d)| *d)
    }
}

impl DateEngine for PriorityQueueEngine {
    fn representation(&self) -> Representation {
        Representation::PriorityQueue
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    /// Линейный проход: порядок кучи не позволяет двоичный поиск.
    fn search(
        &self,
        target: CalendarDate,
    ) -> SearchOutcome {
        SearchOutcome::from_membership(self.iter().any(|d| d == target))
    }

    /// Минимум — голова кучи, максимум — полным проходом.
    fn min_max(&self) -> EngineResult<Extrema> {
        let min = self.peek().ok_or_else(|| self.empty_error())?;
        let max = self.iter().max().unwrap_or(min);
        Ok(Extrema { min, max })
    }
}
