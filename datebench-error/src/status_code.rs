use std::fmt;

use num_enum::TryFromPrimitive;
#[cfg(feature = "serde")]
use serde_repr::Serialize_repr;
#[cfg(feature = "strum")]
use strum_macros::AsRefStr;

/// Коды статуса ошибок.
///
/// # Диапазоны:
/// - 1xxx: аргументы командной строки
/// - 2xxx: данные (даты, строки набора данных, пустые структуры)
/// - 5xxx: файлы набора данных
/// - 7xxx: движки
///
/// В JSON-отчёте код сериализуется числом (feature = "serde").
#[cfg_attr(feature = "strum", derive(AsRefStr))]
#[cfg_attr(feature = "serde", derive(Serialize_repr))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    InvalidArgs = 1004,

    NotFound = 2000,
    InvalidDate = 2001,
    MalformedLine = 2002,
    EmptyStructure = 2003,

    ReadFailed = 5001,
    WriteFailed = 5002,

    EnginePanicked = 7001,
}

impl StatusCode {
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        #[cfg(feature = "strum")]
        {
            write!(f, "{} ({})", self.as_ref(), self.code())
        }
        #[cfg(not(feature = "strum"))]
        {
            write!(f, "{:?} ({})", self, self.code())
        }
    }
}
