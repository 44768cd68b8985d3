//! Data module - report model and CSV loading

pub mod loader;
pub mod model;

pub use loader::{load_report, LoaderError};
pub use model::{AdapterReport, SampleRecord};
