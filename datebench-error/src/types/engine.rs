use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки внутри одного движка (представления коллекции).
///
/// Ни одна из них не прерывает работу остальных движков.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Запрос min/max или головы очереди на пустом представлении.
    #[error("{representation} is empty")]
    EmptyStructure { representation: &'static str },
    /// Упорядоченный массив не удалось сохранить.
    #[error("failed to persist sorted {representation} to '{path}': {reason}")]
    Persist {
        representation: &'static str,
        path: String,
        reason: String,
    },
    /// Прогон движка завершился паникой.
    #[error("{collection} run panicked: {message}")]
    Panicked {
        collection: &'static str,
        message: String,
    },
}

impl EngineError {
    /// Пустая структура — штатная ситуация, а не сбой.
    pub fn is_empty_structure(&self) -> bool {
        matches!(self, Self::EmptyStructure { .. })
    }
}

impl ErrorExt for EngineError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyStructure { .. } => StatusCode::EmptyStructure,
            Self::Persist { .. } => StatusCode::WriteFailed,
            Self::Panicked { .. } => StatusCode::EnginePanicked,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
