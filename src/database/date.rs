//! Календарная дата с точностью до дня.
//!
//! `CalendarDate` — тонкая обёртка над [`chrono::NaiveDate`]: без времени
//! суток и без часового пояса. Порядок и равенство — по календарному дню.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use datebench_error::TargetError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Формат строки даты в файлах набора данных и в выводе.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const BOM: char = '\u{feff}';

/// Длина строки `YYYY-MM-DD`.
const ISO_DATE_LEN: usize = 10;

/// Строка не является датой `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    #[error("expected YYYY-MM-DD with zero-padded month and day")]
    Layout,
    #[error("{0}")]
    Calendar(#[from] chrono::ParseError),
}

/// Значение календарной даты (год, месяц, день).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Создаёт дату из компонентов. `None`, если такого дня нет в календаре.
    pub fn from_ymd(
        year: i32,
        month: u32,
        day: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Разбирает искомую дату из аргумента командной строки.
    ///
    /// Принимает и дату-время: если в строке есть разделитель `T`,
    /// используется только часть до него.
    pub fn parse_target(input: &str) -> Result<Self, TargetError> {
        let trimmed = normalize(input);
        if trimmed.is_empty() {
            return Err(TargetError::Missing);
        }

        let date_part = match trimmed.split_once('T') {
            Some((date, _time)) => date,
            None => trimmed,
        };

        date_part
            .parse::<Self>()
            .map_err(|e| TargetError::InvalidDate {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Убирает пробельные символы и BOM в начале строки.
pub fn normalize(raw: &str) -> &str {
    raw.trim().trim_start_matches(BOM).trim()
}

/// Ровно четыре цифры года, две месяца и две дня через `-`.
///
/// `%m`/`%d` в chrono принимают одну цифру, а `%Y` знак, поэтому форма
/// проверяется до разбора.
fn has_iso_layout(s: &str) -> bool {
    s.len() == ISO_DATE_LEN
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for CalendarDate {
    type Err = DateFormatError;

    /// Строгий ISO-формат `YYYY-MM-DD` после удаления пробелов и BOM.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = normalize(s);
        if !has_iso_layout(s) {
            return Err(DateFormatError::Layout);
        }
        Ok(Self(NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)?))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
