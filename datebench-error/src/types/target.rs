use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки разбора искомой даты из аргумента командной строки.
#[derive(Debug, Clone, Error)]
pub enum TargetError {
    #[error("no date to search for was given")]
    Missing,
    #[error("'{input}' is not an ISO date, use e.g. 2024-03-16 ({reason})")]
    InvalidDate { input: String, reason: String },
}

impl ErrorExt for TargetError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Missing => StatusCode::InvalidArgs,
            Self::InvalidDate { .. } => StatusCode::InvalidDate,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
