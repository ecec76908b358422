use std::{fmt, panic::Location, sync::Arc};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{ErrorExt, StatusCode};

/// Доменная ошибка и цепочка контекстов, добавленных по пути наверх.
///
/// Каждый контекст запоминает место вызова (`#[track_caller]`).
#[derive(Clone)]
pub struct StackError {
    inner: Arc<dyn ErrorExt>,
    contexts: Vec<ErrorContext>,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub message: String,
    pub location: &'static Location<'static>,
}

/// JSON-отчёт о фатальной ошибке.
#[cfg(feature = "serde")]
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contexts: Vec<String>,
}

/// `.with_context(..)` для любых `Result` с доменной ошибкой.
pub trait ResultExt<T> {
    fn with_context<C, F>(
        self,
        f: F,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl StackError {
    pub fn new<E: ErrorExt>(err: E) -> Self {
        Self {
            inner: Arc::new(err),
            contexts: Vec::new(),
        }
    }

    #[track_caller]
    pub fn context(
        mut self,
        msg: impl Into<String>,
    ) -> Self {
        self.contexts.push(ErrorContext {
            message: msg.into(),
            location: Location::caller(),
        });
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.inner.status_code()
    }

    pub fn contexts(&self) -> &[ErrorContext] {
        &self.contexts
    }

    pub fn downcast_ref<T: ErrorExt>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    #[cfg(feature = "serde")]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.status_code(),
            message: self.inner.to_string(),
            contexts: self
                .contexts
                .iter()
                .map(|ctx| {
                    format!(
                        "{} ({}:{})",
                        ctx.message,
                        ctx.location.file(),
                        ctx.location.line()
                    )
                })
                .collect(),
        }
    }
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: ErrorExt,
{
    #[track_caller]
    fn with_context<C, F>(
        self,
        f: F,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(StackError::new(e).context(f())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для StackError
////////////////////////////////////////////////////////////////////////////////

impl fmt::Debug for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("StackError")
            .field("inner", &self.inner.to_string())
            .field("status_code", &self.status_code())
            .field("contexts", &self.contexts)
            .finish()
    }
}

/// Контексты от внешнего к внутреннему, затем сама ошибка.
impl fmt::Display for StackError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for ctx in self.contexts.iter().rev() {
            write!(f, "{}: ", ctx.message)?;
        }
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for StackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl<E: ErrorExt> From<E> for StackError {
    fn from(e: E) -> Self {
        StackError::new(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatasetError, EngineError};

    fn malformed() -> DatasetError {
        DatasetError::MalformedLine {
            line: 3,
            content: "2024-13-01".to_string(),
            reason: "input is out of range".to_string(),
        }
    }

    #[test]
    fn test_with_context_records_location() {
        let result: Result<(), DatasetError> = Err(malformed());
        let err = result.with_context(|| "loading dataset").unwrap_err();

        assert_eq!(err.status_code(), StatusCode::MalformedLine);
        assert_eq!(err.contexts().len(), 1);
        assert_eq!(err.contexts()[0].location.file(), file!());
        assert!(err.to_string().starts_with("loading dataset: line 3"));
    }

    #[test]
    fn test_outer_context_printed_first() {
        let err = StackError::new(malformed())
            .context("loading dataset")
            .context("startup");
        assert!(err.to_string().starts_with("startup: loading dataset: line 3"));
    }

    #[test]
    fn test_downcast() {
        let err = StackError::from(EngineError::EmptyStructure {
            representation: "queue",
        });

        assert!(err.downcast_ref::<EngineError>().is_some());
        assert!(err.downcast_ref::<DatasetError>().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report_serializes_numeric_code() {
        let err = StackError::new(malformed()).context("loading dataset");
        let json = serde_json::to_value(err.to_report()).unwrap();

        assert_eq!(json["code"], 2002);
        assert!(json["message"].as_str().unwrap().starts_with("line 3"));
        assert_eq!(json["contexts"].as_array().unwrap().len(), 1);
    }
}
