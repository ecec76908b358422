/// Run settings loading.
pub mod config;
/// Calendar date value and the shared dataset.
pub mod database;
/// The four representations (array, list, priority queue, hash set) and the dataset file handler.
pub mod engine;
/// Error types re-exported from `datebench-error`.
pub mod error;
/// Flexible logging (formatting, filters, sinks) and operation timing.
pub mod logging;
/// Comparison runs, reports and the console banner.
pub mod runner;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Run settings: dataset and output paths plus the logging section.
pub use config::Settings;
/// Data types: CalendarDate, DateDataset.
pub use database::{CalendarDate, DateDataset};
/// Engines: SortedArrayEngine, OrderedListEngine, PriorityQueueEngine, HashSetEngine.
pub use engine::{
    AnyEngine, CrossCheck, DataFileHandler, DateEngine, EngineResult, Extrema, HashSetEngine,
    HeadOperations, LoadOutcome, OrderedListEngine, PriorityQueueEngine, Reorder, Representation,
    SearchOutcome, SortedArrayEngine,
};
/// Operation errors and result types.
pub use error::{DatasetError, EngineError, ErrorExt, StackError, StatusCode, TargetError};
/// Logging initialization.
pub use logging::{init_logging, LoggingConfig, LoggingHandle};
/// Comparison runner.
pub use runner::{Collection, Comparator, RunMode, RunReport};
