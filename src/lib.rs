//! Resolve dot-separated key paths against nested documents.
//!
//! ```
//! use dotget::{get, sample_record, Value};
//!
//! let record = sample_record();
//! assert_eq!(get(&record, "user.address.city"), Some(&Value::from("Hamilton")));
//! assert_eq!(get(&record, "user.friends.1.age"), None);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    get, sample_record, AbsencePolicy, DocumentFormat, KeyPath, PathGetter, Value,
};
