//! Typed view over scoop package manifests.
//!
//! Scoop manifests are loosely shaped JSON: several fields may hold a bare
//! scalar, a sequence, or be absent entirely. This crate normalizes those
//! shapes into typed accessors with the defaults the rest of the tool
//! relies on.

pub mod bucket;

mod error;
mod manifest;

pub use error::{Error, Result};
pub use manifest::{BinSpec, Manifest, DEFAULT_DESCRIPTION, DEFAULT_VERSION};
