//! Media records and the storage contract they are saved through.

mod store;
pub mod types;


pub use store::*;
pub use types::*;
