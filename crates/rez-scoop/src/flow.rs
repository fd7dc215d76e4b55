//! Top-level actions.
//!
//! Every package-level failure is recovered here: logged and the flow
//! halted, with the process exit code left unchanged. Only environment
//! setup problems (no home directory) propagate out.

use crate::cli::{App, Commands};
use anyhow::Result;
use rez_scoop_backend::ScoopPackage;
use rez_scoop_rez::RezPackage;
use tracing::{error, info, warn};

pub fn dispatch(app: App) -> Result<()> {
    match app.cmd {
        Commands::Install(arg) => install(&arg.package),
        Commands::Update(arg) => update(&arg.package),
        Commands::Uninstall(arg) => uninstall(&arg.package),
    }
}

/// Install the package in scoop, then wrap it as a rez package.
fn install(package: &str) -> Result<()> {
    let mut scoop = ScoopPackage::new(package)?;

    if let Err(err) = scoop.install() {
        error!(error = %err, "scoop install failed");
    }
    if !scoop.installed() {
        error!(package, "scoop package could not be installed, skipping rez package");
        return Ok(());
    }

    let rez = match RezPackage::from_scoop(&scoop) {
        Ok(rez) => rez,
        Err(err) => {
            error!(error = %err, "could not build the rez package");
            return Ok(());
        }
    };

    match rez.install(None, scoop.install_path()) {
        Ok(variants) => {
            info!(package, variants = variants.len(), "rez package installed");
        }
        Err(err) => error!(error = %err, "rez package installation failed"),
    }
    Ok(())
}

fn update(_package: &str) -> Result<()> {
    warn!("update of packages is not implemented yet");
    Ok(())
}

fn uninstall(_package: &str) -> Result<()> {
    warn!("uninstallation of packages is not implemented yet");
    Ok(())
}
