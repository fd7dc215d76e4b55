//! Outcome classification for streamed scoop output.
//!
//! Scoop only talks through human-readable output, so install state is
//! recovered by matching signal substrings against each line as it is
//! read. The classifiers are pure over their input lines; the subprocess
//! plumbing lives in [`crate::ScoopPackage::install`].

/// Terminal states of one install attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    /// `scoop list` already mentioned the package.
    AlreadyInstalled,
    /// `scoop install` ran to completion without a failure signal.
    Installed,
    /// Scoop reported that no bucket upstream carries the package.
    NotFound,
}

/// Whole-token match: scoop's list output pads package names with spaces.
pub fn listed(name: &str, line: &str) -> bool {
    line.contains(&format!(" {name} "))
}

/// The failure signal scoop prints when a package does not exist upstream.
pub fn not_found_signal(name: &str, line: &str) -> bool {
    line.contains(&format!("Couldn't find manifest for '{name}'"))
}

/// Fold a `scoop list` stream; `Some(AlreadyInstalled)` on the first
/// matching line, `None` when the stream ends without one.
pub fn classify_list<I, S>(name: &str, lines: I) -> Option<InstallState>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        if listed(name, line.as_ref()) {
            return Some(InstallState::AlreadyInstalled);
        }
    }
    None
}

/// Fold a `scoop install` stream, checking every line as it arrives.
pub fn classify_install<I, S>(name: &str, lines: I) -> InstallState
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        if not_found_signal(name, line.as_ref()) {
            return InstallState::NotFound;
        }
    }
    InstallState::Installed
}
