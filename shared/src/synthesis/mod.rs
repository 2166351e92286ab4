//! Synthetic report generators
//!
//! Every generator takes its randomness as a parameter so callers can seed it.

pub mod forum;
pub mod price;
pub mod soil;

pub use forum::*;
pub use price::*;
pub use soil::*;
