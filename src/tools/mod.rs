// Pipeline pieces, leaves first
pub mod clean;
pub mod domain;
pub mod extract;
pub mod fetch;
pub mod validate;
