pub mod dataset;
pub mod date;

pub use dataset::*;
pub use date::*;
