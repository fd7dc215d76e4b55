//! The rez side of the tool: projecting an installed scoop package into a
//! rez package definition and persisting it with its payload.

pub mod commands;

mod config;
mod error;
mod install;
mod package;
mod render;

pub use config::RezConfig;
pub use error::{Error, Result};
pub use package::RezPackage;
