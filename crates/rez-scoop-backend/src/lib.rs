//! The scoop side of the tool: installing packages through the scoop CLI
//! and exposing their manifest metadata.

pub mod invoke;

mod error;
mod scoop;

pub use error::{Error, Result};
pub use scoop::{Binary, ScoopPackage};
