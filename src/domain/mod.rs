//! Domain layer: values, paths and the path walker
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod document;
pub mod error;
pub mod getter;
pub mod path;
pub mod sample;
pub mod value;

pub use document::DocumentFormat;
pub use error::DomainError;
pub use getter::{get, AbsencePolicy, PathGetter};
pub use path::{KeyPath, SEPARATOR};
pub use sample::{sample_record, SAMPLE_QUERIES};
pub use value::{Mapping, Value};
