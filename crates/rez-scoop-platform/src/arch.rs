//! Architecture detection.

use crate::error::{Error, Result};

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    ARM,
    ARM64,
    Unknown,
}

/// Detect current architecture.
pub fn detect() -> Arch {
    let cpu_arch = sysinfo::System::cpu_arch();

    match cpu_arch.as_str() {
        "i386" | "i686" | "x86" => Arch::X86,
        "x86_64" | "amd64" => Arch::X86_64,
        "arm" | "armv7l" => Arch::ARM,
        "aarch64" | "arm64" => Arch::ARM64,
        _ => Arch::Unknown,
    }
}

/// Raw architecture name as reported by the host, used in variant tuples.
pub fn name() -> String {
    sysinfo::System::cpu_arch()
}

/// Map an architecture to the tag scoop manifests use in their
/// `architecture` table.
///
/// Scoop only distinguishes `64bit` and `32bit`; anything else has no
/// download url and must fail rather than default.
pub fn scoop_tag(arch: Arch) -> Result<&'static str> {
    match arch {
        Arch::X86_64 | Arch::ARM64 => Ok("64bit"),
        Arch::X86 => Ok("32bit"),
        other => Err(Error::UnsupportedArch(format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoop_tag_64bit() {
        assert_eq!(scoop_tag(Arch::X86_64).unwrap(), "64bit");
        assert_eq!(scoop_tag(Arch::ARM64).unwrap(), "64bit");
    }

    #[test]
    fn test_scoop_tag_32bit() {
        assert_eq!(scoop_tag(Arch::X86).unwrap(), "32bit");
    }

    #[test]
    fn test_scoop_tag_unsupported() {
        assert!(scoop_tag(Arch::ARM).is_err());
        assert!(scoop_tag(Arch::Unknown).is_err());
    }

    #[test]
    fn test_detect_returns_known_variant() {
        // Whatever the host is, detection must not panic.
        let _ = detect();
    }
}
