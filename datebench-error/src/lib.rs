pub mod ext;
pub mod stack;
pub mod status_code;
pub mod types;

// Публичный реэкспорт всех типов ошибок из вложенных модулей, чтобы упростить
// доступ к ним из внешнего кода.
pub use ext::*;
pub use stack::*;
pub use status_code::*;
pub use types::*;

pub type BenchResult<T> = Result<T, StackError>;
