#![warn(clippy::uninlined_format_args)]

pub mod json_repository;

pub use json_repository::{JsonGroupRepository, SnapshotLoadError};
