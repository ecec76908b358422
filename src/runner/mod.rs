//! Прогон движков над одним набором данных и одной искомой датой.
//!
//! [`Comparator`] выполняет фиксированные последовательности операций для
//! каждой коллекции (list, queue, set), за каждой из которых следует
//! последовательность массива с сохранением результата. Каждый прогон
//! изолирован: ошибка или паника в одном не мешает остальным.

pub mod banner;
pub mod comparator;
pub mod mode;
pub mod report;

pub use banner::{print_banner, render_banner, BannerInfo};
pub use comparator::Comparator;
pub use mode::{Collection, RunMode};
pub use report::{summarize_timings, OperationRecord, Outcome, RunReport, SectionReport, TimingSummary};
