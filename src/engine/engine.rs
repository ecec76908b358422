use std::fmt;

use datebench_error::EngineError;
use serde::Serialize;

use super::{HashSetEngine, OrderedListEngine, PriorityQueueEngine, SortedArrayEngine};
use crate::database::{CalendarDate, DateDataset};

pub type EngineResult<T> = Result<T, EngineError>;

/// Одно из четырёх представлений набора дат.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Array,
    List,
    PriorityQueue,
    HashSet,
}

/// Результат поиска искомой даты.
///
/// `At` возвращают движки с двоичным поиском, `Present` — движки, которые
/// умеют только проверять членство.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "index", rename_all = "snake_case")]
pub enum SearchOutcome {
    At(usize),
    Present,
    Absent,
}

/// Наименьшая и наибольшая даты представления.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Extrema {
    pub min: CalendarDate,
    pub max: CalendarDate,
}

/// Итог запроса на переупорядочивание.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reorder {
    Sorted,
    Unsupported,
}

/// Общий набор операций над представлением: поиск, экстремумы,
/// переупорядочивание.
///
/// Каждый движок владеет собственной копией данных; изменения (сортировка,
/// извлечение головы очереди) не затрагивают исходный набор и другие движки.
pub trait DateEngine {
    fn representation(&self) -> Representation;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Поиск искомой даты.
    ///
    /// Если [`search_requires_order`](Self::search_requires_order) возвращает
    /// `true`, результат определён только для упорядоченного представления.
    fn search(
        &self,
        target: CalendarDate,
    ) -> SearchOutcome;

    /// Экстремумы. На пустом представлении — [`EngineError::EmptyStructure`].
    fn min_max(&self) -> EngineResult<Extrema>;

    /// Упорядочивает представление по возрастанию, если оно это поддерживает.
    fn reorder(&mut self) -> Reorder {
        Reorder::Unsupported
    }

    fn search_requires_order(&self) -> bool {
        false
    }

    fn empty_error(&self) -> EngineError {
        EngineError::EmptyStructure {
            representation: self.representation().as_str(),
        }
    }
}

/// Движок любого из четырёх представлений.
pub enum AnyEngine {
    Array(SortedArrayEngine),
    List(OrderedListEngine),
    Queue(PriorityQueueEngine),
    Set(HashSetEngine),
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl Representation {
    pub const ALL: [Representation; 4] = [
        Representation::Array,
        Representation::List,
        Representation::PriorityQueue,
        Representation::HashSet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::Array => "array",
            Representation::List => "list",
            Representation::PriorityQueue => "priority queue",
            Representation::HashSet => "hash set",
        }
    }
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        !matches!(self, SearchOutcome::Absent)
    }

    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::At(i) => Some(*i),
            _ => None,
        }
    }

    /// Перевод результата `binary_search` стандартной библиотеки.
    pub(crate) fn from_binary_search(res: Result<usize, usize>) -> Self {
        match res {
            Ok(i) => SearchOutcome::At(i),
            Err(_) => SearchOutcome::Absent,
        }
    }

    pub(crate) fn from_membership(found: bool) -> Self {
        if found {
            SearchOutcome::Present
        } else {
            SearchOutcome::Absent
        }
    }
}

impl Extrema {
    /// Линейный проход: одна пара сравнений на элемент.
    pub fn scan<I>(dates: I) -> Option<Self>
    where
        I: IntoIterator<Item = CalendarDate>,
    {
        let mut iter = dates.into_iter();
        let first = iter.next()?;

        let mut min = first;
        let mut max = first;
        for d in iter {
            if d < min {
                min = d;
            }
            if d > max {
                max = d;
            }
        }

        Some(Self { min, max })
    }
}

impl AnyEngine {
    /// Строит представление из копии набора данных.
    pub fn build(
        representation: Representation,
        dataset: &DateDataset,
    ) -> Self {
        match representation {
            Representation::Array => AnyEngine::Array(SortedArrayEngine::from_dataset(dataset)),
            Representation::List => AnyEngine::List(OrderedListEngine::from_dataset(dataset)),
            Representation::PriorityQueue => {
                AnyEngine::Queue(PriorityQueueEngine::from_dataset(dataset))
            }
            Representation::HashSet => AnyEngine::Set(HashSetEngine::from_dataset(dataset)),
        }
    }

    fn inner(&self) -> &dyn DateEngine {
        match self {
            AnyEngine::Array(engine) => engine,
            AnyEngine::List(engine) => engine,
            AnyEngine::Queue(engine) => engine,
            AnyEngine::Set(engine) => engine,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn DateEngine {
        match self {
            AnyEngine::Array(engine) => engine,
            AnyEngine::List(engine) => engine,
            AnyEngine::Queue(engine) => engine,
            AnyEngine::Set(engine) => engine,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов
////////////////////////////////////////////////////////////////////////////////

impl DateEngine for AnyEngine {
    fn representation(&self) -> Representation {
        self.inner().representation()
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn search(
        &self,
        target: CalendarDate,
    ) -> SearchOutcome {
        self.inner().search(target)
    }

    fn min_max(&self) -> EngineResult<Extrema> {
        self.inner().min_max()
    }

    fn reorder(&mut self) -> Reorder {
        self.inner_mut().reorder()
    }

    fn search_requires_order(&self) -> bool {
        self.inner().search_requires_order()
    }
}

impl fmt::Display for Representation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            SearchOutcome::At(i) => write!(f, "found at index {i}"),
            SearchOutcome::Present => f.write_str("found"),
            SearchOutcome::Absent => f.write_str("not found"),
        }
    }
}
