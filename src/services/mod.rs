// Service exports
pub mod dataset;

pub use dataset::{DatasetStore, DatasetError};
