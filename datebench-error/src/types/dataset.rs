use std::{any::Any, io};

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Ошибки загрузки и сохранения набора дат.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Строка файла не является календарной датой. Фатально для загрузки.
    #[error("line {line}: '{content}' is not an ISO calendar date ({reason})")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },
    /// Файл не удалось открыть или дочитать.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Файл не удалось записать.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl DatasetError {
    /// Ошибка ввода-вывода (в отличие от ошибки формата).
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }
}

impl ErrorExt for DatasetError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedLine { .. } => StatusCode::MalformedLine,
            Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                StatusCode::NotFound
            }
            Self::Read { .. } => StatusCode::ReadFailed,
            Self::Write { .. } => StatusCode::WriteFailed,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_display() {
        let err = DatasetError::MalformedLine {
            line: 7,
            content: "not-a-date".to_string(),
            reason: "input contains invalid characters".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::MalformedLine);
        assert!(err.to_string().starts_with("line 7: 'not-a-date'"));
        assert!(!err.is_io());
    }

    #[test]
    fn test_read_not_found_maps_to_not_found() {
        let err = DatasetError::Read {
            path: "missing.data".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.status_code(), StatusCode::NotFound);
        assert!(err.is_io());
        assert!(err.to_string().starts_with("failed to read 'missing.data'"));
    }

    #[test]
    fn test_write_failure_code() {
        let err = DatasetError::Write {
            path: "/ro/out.sorted".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(err.status_code(), StatusCode::WriteFailed);
        assert!(std::error::Error::source(&err).is_some());
    }
}
