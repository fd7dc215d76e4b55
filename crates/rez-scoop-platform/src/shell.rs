//! Shell selection for driving external tools.

/// Shells used to invoke the scoop executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Powershell,
    Sh,
}

impl Shell {
    /// The shell scoop is normally driven through on this host.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Shell::Powershell
        } else {
            Shell::Sh
        }
    }

    pub fn executable(self) -> &'static str {
        match self {
            Shell::Powershell => "powershell",
            Shell::Sh => "sh",
        }
    }

    /// Flag that makes the shell run a script string.
    pub fn script_flag(self) -> &'static str {
        match self {
            Shell::Powershell => "-command",
            Shell::Sh => "-c",
        }
    }
}
