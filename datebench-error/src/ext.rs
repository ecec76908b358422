use std::{any::Any, error::Error};

use crate::StatusCode;

/// Общий интерфейс доменных ошибок.
///
/// Код статуса попадает в лог и в JSON-отчёт об ошибке, `as_any` нужен для
/// downcast из [`StackError`](crate::StackError).
pub trait ErrorExt: Error + Send + Sync + 'static {
    fn status_code(&self) -> StatusCode;

    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;

    #[derive(Debug, Error)]
    #[error("queue is empty")]
    struct QueueEmpty;

    impl ErrorExt for QueueEmpty {
        fn status_code(&self) -> StatusCode {
            StatusCode::EmptyStructure
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_trait_object_keeps_code_and_type() {
        let err: Box<dyn ErrorExt> = Box::new(QueueEmpty);
        assert_eq!(err.status_code(), StatusCode::EmptyStructure);
        assert!(err.as_any().downcast_ref::<QueueEmpty>().is_some());
    }
}
