//! Projection of binaries and environment pairs into rez command
//! directives.
//!
//! The result is a set: duplicates collapse and order carries no meaning
//! to rez. A `BTreeSet` keeps the projection a pure function of its
//! inputs regardless of element order.

use rez_scoop_backend::Binary;
use std::collections::BTreeSet;
use std::path::Path;

/// Rez requires a non-empty command body; this is the explicit
/// do-nothing marker.
pub const NOOP_DIRECTIVE: &str = "pass";

fn slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Build the deduplicated directive set for a package's `commands()`
/// body: a PATH prepend per binary directory, an alias per aliased
/// binary, and a variable prepend per environment pair.
pub fn project(binaries: &[Binary], environments: &[(String, String)]) -> BTreeSet<String> {
    let mut directives = BTreeSet::new();

    for binary in binaries {
        if let Some(dir) = binary.exe.parent() {
            directives.insert(format!("env.PATH.prepend(\"{}\")", slash(dir)));
        }
        if let Some(alias) = &binary.alias {
            let mut target = slash(&binary.exe);
            for arg in &binary.args {
                target.push(' ');
                target.push_str(arg);
            }
            directives.insert(format!("alias(\"{alias}\", \"{target}\")"));
        }
    }

    for (var, value) in environments {
        directives.insert(format!("env.{var}.prepend(\"{}\")", value.replace('\\', "/")));
    }

    if directives.is_empty() {
        directives.insert(NOOP_DIRECTIVE.to_string());
    }
    directives
}
