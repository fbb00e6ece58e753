#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod error;
pub mod logging;
pub mod record;
pub mod selectors;
pub mod tools;
pub mod types;

pub use api::*;
pub use error::*;
pub use record::{InsertResult, LocalTableStore, MediaRecord, RecordStore};
pub use tools::domain::domain_of;
pub use tools::fetch::FetchOptions;
pub use types::*;
