//! Operating system identification, in rez naming.

/// Platform name as rez spells it.
pub fn platform_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "osx"
    } else {
        "linux"
    }
}

/// Platform plus version, e.g. `windows-10.0.19045`.
///
/// Falls back to the bare platform name when the version is unknown.
pub fn os_id() -> String {
    match sysinfo::System::os_version() {
        Some(version) => format!("{}-{}", platform_name(), version),
        None => platform_name().to_string(),
    }
}
