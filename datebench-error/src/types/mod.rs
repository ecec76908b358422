pub mod dataset;
pub mod engine;
pub mod target;

// Публичный экспорт всех типов ошибок из вложенных модулей.
pub use dataset::*;
pub use engine::*;
pub use target::*;
