//! Statistics module - kernel density estimation

pub mod kde;

pub use kde::{GaussianKde, KdeError};
