//! Shared types and generators for the Farm Advisory Platform
//!
//! This crate contains the models, validation rules and synthetic report
//! generators used by the backend and by the browser (via WASM).

pub mod models;
pub mod pest;
pub mod synthesis;
pub mod types;
pub mod validation;

pub use models::*;
pub use pest::*;
pub use synthesis::*;
pub use types::*;
pub use validation::*;
