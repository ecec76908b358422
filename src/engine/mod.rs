//! Движки сравнения: четыре представления одного набора дат.
//!
//! - `array`: массив фиксированной длины, сортировка и двоичный поиск.
//! - `list`: динамический список с теми же операциями.
//! - `queue`: очередь с приоритетом, peek/poll головы.
//! - `set`: хеш-множество, поиск за O(1) и сверка с набором.
//! - `persistent`: чтение и запись файла набора данных.

pub mod array;
pub mod engine;
pub mod list;
pub mod persistent;
pub mod queue;
pub mod set;

pub use array::*;
pub use engine::*;
pub use list::*;
pub use persistent::*;
pub use queue::*;
pub use set::*;
