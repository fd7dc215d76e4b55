//! Command line surface.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable controlling log verbosity.
pub const LOG_LEVEL_VAR: &str = "REZ_SCOOP_LOG_LEVEL";

#[derive(Clone, Debug, Parser)]
#[command(
    name = "rez-scoop",
    version = env!("CARGO_PKG_VERSION"),
    about = "Install scoop packages as rez packages",
    propagate_version = true
)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(
        alias = "i",
        name = "install",
        about = "Install a scoop package and wrap it as a rez package"
    )]
    Install(PackageArg),
    #[command(
        alias = "u",
        name = "update",
        about = "Update an installed package (not implemented)"
    )]
    Update(PackageArg),
    #[command(
        alias = "rm",
        name = "uninstall",
        about = "Uninstall a package (not implemented)"
    )]
    Uninstall(PackageArg),
}

#[derive(Clone, Debug, Args)]
pub struct PackageArg {
    #[arg(help = "The name of the package")]
    pub package: String,
}

pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_LEVEL_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}
