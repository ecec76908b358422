use std::{ops::Deref, sync::Arc};

use super::CalendarDate;

/// Набор дат в порядке чтения из источника.
///
/// После загрузки не изменяется: каждый движок получает собственную копию
/// данных, а сам набор разделяется между ними только на чтение. Дубликаты
/// сохраняются.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateDataset {
    dates: Arc<[CalendarDate]>,
}

impl DateDataset {
    pub fn new(dates: Vec<CalendarDate>) -> Self {
        Self {
            dates: dates.into(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[CalendarDate] {
        &self.dates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.dates.iter()
    }

    /// Упорядочен ли набор по возрастанию (дубликаты допустимы).
    pub fn is_sorted(&self) -> bool {
        self.dates.windows(2).all(|w| w[0] <= w[1])
    }

    /// Линейная проверка вхождения.
    pub fn contains(
        &self,
        date: &CalendarDate,
    ) -> bool {
        self.dates.contains(date)
    }
}

impl Deref for DateDataset {
    type Target = [CalendarDate];

    fn deref(&self) -> &Self::Target {
        &self.dates
    }
}

impl From<Vec<CalendarDate>> for DateDataset {
    fn from(dates: Vec<CalendarDate>) -> Self {
        Self::new(dates)
    }
}

impl FromIterator<CalendarDate> for DateDataset {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DateDataset {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
