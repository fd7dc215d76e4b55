//! Scoop package installation and metadata.

use crate::error::{Error, Result};
use crate::invoke::{classify_install, classify_list, InstallState};
use once_cell::sync::OnceCell;
use rez_scoop_manifest::{bucket, Manifest};
use rez_scoop_platform::{arch, os, Command, Shell};
use std::env;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Child;
use tracing::{debug, error, info, warn};

/// One binary installed by the package: absolute executable path,
/// optional alias, and the arguments baked into the alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    pub exe: PathBuf,
    pub alias: Option<String>,
    pub args: Vec<String>,
}

/// Source of scoop subcommand output.
///
/// The install flow only sees drained line vectors, so tests can drive it
/// without spawning anything.
pub(crate) trait ScoopRunner {
    fn run(&mut self, subcommand: &str, name: &str) -> Result<Vec<String>>;
}

/// Runs scoop through the host shell.
struct ShellRunner;

impl ScoopRunner for ShellRunner {
    fn run(&mut self, subcommand: &str, name: &str) -> Result<Vec<String>> {
        // Merge stderr into stdout at the shell level: scoop interleaves
        // its messages across both streams, and a separate stderr pipe
        // can fill and wedge the child while stdout is being read.
        let mut child = Command::new(format!("scoop {subcommand} {name} 2>&1"))
            .run_in_shell(Shell::host())
            .stream()?;
        let lines = drain_lines(&mut child);
        finish(&mut child, subcommand)?;
        Ok(lines)
    }
}

/// Drain the child's output, logging every line as it is read so all
/// intermediate output stays available for diagnostics.
///
/// With the streams merged, the stderr pipe only carries the shell's own
/// noise; it is still drained so the child can never block on it.
fn drain_lines(child: &mut Child) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(out) = child.stdout.take() {
        for line in BufReader::new(out).lines().map_while(|line| line.ok()) {
            debug!(target: "scoop", "{line}");
            lines.push(line);
        }
    }
    if let Some(err) = child.stderr.take() {
        for line in BufReader::new(err).lines().map_while(|line| line.ok()) {
            debug!(target: "scoop", "{line}");
            lines.push(line);
        }
    }
    lines
}

/// Reap the child; a failure status is reported but left for the caller
/// to interpret through the classified outcome.
fn finish(child: &mut Child, what: &str) -> Result<()> {
    let status = child.wait().map_err(|e| Error::Process { source: e })?;
    if !status.success() {
        warn!(command = what, %status, "scoop exited with a failure status");
    }
    Ok(())
}

/// Resolve the download url, asking for the host's architecture tag only
/// when the architecture table must be consulted. A direct url works on
/// any architecture.
fn resolve_url(
    manifest: &Manifest,
    tag: impl FnOnce() -> Result<&'static str>,
) -> Result<Option<String>> {
    if let Some(url) = manifest.direct_url() {
        return Ok(Some(url));
    }
    if !manifest.has_architecture() {
        return Ok(None);
    }
    Ok(manifest.arch_url(tag()?)?)
}

/// One scoop package: its install location under the scoop root and a
/// write-once view of its manifest.
#[derive(Debug)]
pub struct ScoopPackage {
    name: String,
    installed: bool,
    root: PathBuf,
    install_path: PathBuf,
    manifest: OnceCell<Manifest>,
}

impl ScoopPackage {
    /// Resolve the scoop root from the `SCOOP` environment variable,
    /// falling back to `~/scoop`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let root = match env::var_os("SCOOP") {
            Some(root) => PathBuf::from(root),
            None => home::home_dir().ok_or(Error::NoHome)?.join("scoop"),
        };
        Ok(Self::with_root(name, root))
    }

    /// Build against an explicit scoop root.
    pub fn with_root(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let root = root.into();
        let install_path = root.join("apps").join(&name);
        Self {
            name,
            installed: false,
            root,
            install_path,
            manifest: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn installed(&self) -> bool {
        self.installed
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the installed files live once the package is present.
    pub fn install_path(&self) -> &Path {
        &self.install_path
    }

    /// The manifest, loaded from the buckets on first access and cached
    /// for the lifetime of this instance.
    ///
    /// A package no bucket provides resolves to the empty manifest so the
    /// derived accessors can fall back to their defaults.
    pub fn manifest(&self) -> &Manifest {
        self.manifest.get_or_init(|| {
            match bucket::find_manifest(&self.root, &self.name) {
                Ok(manifest) => manifest,
                Err(rez_scoop_manifest::Error::ManifestNotFound { .. }) => {
                    warn!(package = %self.name, "no bucket provides a manifest");
                    Manifest::default()
                }
                Err(err) => {
                    error!(package = %self.name, error = %err, "failed to load manifest");
                    Manifest::default()
                }
            }
        })
    }

    pub fn description(&self) -> String {
        self.manifest().description()
    }

    pub fn version(&self) -> String {
        self.manifest().version()
    }

    /// Download url, resolved through the host architecture when the
    /// manifest splits urls per architecture.
    pub fn url(&self) -> Result<Option<String>> {
        resolve_url(self.manifest(), || {
            Ok(arch::scoop_tag(arch::detect())?)
        })
    }

    /// Dependency package names, in manifest order.
    pub fn requires(&self) -> Vec<String> {
        self.manifest().depends()
    }

    /// Binaries with their paths joined against the install location.
    pub fn binaries(&self) -> Result<Vec<Binary>> {
        let bins = self.manifest().bins()?;
        Ok(bins
            .into_iter()
            .map(|spec| Binary {
                exe: self.install_path.join(&spec.path),
                alias: spec.alias,
                args: spec.args,
            })
            .collect())
    }

    /// Environment variable effects: every `env_add_path` entry becomes a
    /// PATH pair, and `$dir` inside `env_set` values is substituted with
    /// the install location.
    pub fn environments(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        for rel in self.manifest().env_add_path() {
            let path = self.install_path.join(rel);
            pairs.push(("PATH".to_string(), path.to_string_lossy().into_owned()));
        }
        let dir = self.install_path.to_string_lossy();
        for (var, value) in self.manifest().env_set()? {
            pairs.push((var, value.replace("$dir", &dir)));
        }
        Ok(pairs)
    }

    /// The single variant tuple describing the current platform; the
    /// produced package is platform-locked.
    pub fn variants(&self) -> Vec<Vec<String>> {
        vec![vec![
            format!("platform-{}", os::platform_name()),
            format!("arch-{}", arch::name()),
            format!("os-{}", os::os_id()),
        ]]
    }

    /// Ensure the package is installed in scoop.
    ///
    /// Queries `scoop list` first; a whole-token match means the package
    /// is already present and no install is attempted. Otherwise `scoop
    /// install` runs, and only the explicit "couldn't find manifest"
    /// signal marks failure. Already-installed instances return
    /// immediately without spawning anything.
    pub fn install(&mut self) -> Result<()> {
        self.install_with(&mut ShellRunner)
    }

    pub(crate) fn install_with(&mut self, runner: &mut dyn ScoopRunner) -> Result<()> {
        if self.installed {
            debug!(package = %self.name, "already marked installed, skipping");
            return Ok(());
        }

        let lines = runner.run("list", &self.name)?;
        if classify_list(&self.name, &lines) == Some(InstallState::AlreadyInstalled) {
            info!(package = %self.name, "scoop package already installed");
            self.installed = true;
            return Ok(());
        }

        let lines = runner.run("install", &self.name)?;
        if classify_install(&self.name, &lines) == InstallState::NotFound {
            return Err(Error::PackageNotFound {
                name: self.name.clone(),
            });
        }

        self.installed = true;
        Ok(())
    }
}
