//! Domain models for the Farm Advisory Platform

mod forum;
mod pest;
mod price;
mod soil;

pub use forum::*;
pub use pest::*;
pub use price::*;
pub use soil::*;
