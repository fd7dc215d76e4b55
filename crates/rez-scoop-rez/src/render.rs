//! `package.py` rendering.

use crate::package::RezPackage;

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn quote_list(values: &[String]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| quote(v)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Render the package definition file rez loads, attributes first and the
/// command directives as the `commands()` body.
pub(crate) fn package_py(package: &RezPackage) -> String {
    let mut out = String::new();

    out.push_str(&format!("name = {}\n", quote(package.name())));
    out.push_str(&format!("version = {}\n", quote(package.version())));
    out.push_str(&format!(
        "description = {}\n",
        quote(package.description())
    ));
    if let Some(url) = package.url() {
        out.push_str(&format!("url = {}\n", quote(url)));
    }
    out.push_str(&format!(
        "requires = {}\n",
        quote_list(package.requires())
    ));

    let variants: Vec<String> = package
        .variants()
        .iter()
        .map(|variant| quote_list(variant))
        .collect();
    out.push_str(&format!("variants = [{}]\n", variants.join(", ")));

    out.push_str("\n\ndef commands():\n");
    for directive in package.commands() {
        out.push_str("    ");
        out.push_str(directive);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rez_scoop_backend::ScoopPackage;
    use std::fs;
    use tempfile::tempdir;

    fn package_from(raw: &str) -> RezPackage {
        let root = tempdir().unwrap();
        let dir = root.path().join("buckets/main/bucket");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("foo.json"), raw).unwrap();
        let scoop = ScoopPackage::with_root("foo", root.path());
        RezPackage::from_scoop(&scoop).unwrap()
    }

    #[test]
    fn test_render_attributes() {
        let rendered = package_py(&package_from(
            r#"{"version": "1.2.3", "description": "a tool", "depends": ["git"]}"#,
        ));
        assert!(rendered.contains("name = \"foo\"\n"));
        assert!(rendered.contains("version = \"1.2.3\"\n"));
        assert!(rendered.contains("description = \"a tool\"\n"));
        assert!(rendered.contains("requires = [\"git\"]\n"));
        assert!(rendered.contains("variants = [["));
        assert!(rendered.contains("def commands():\n"));
    }

    #[test]
    fn test_render_noop_body_without_directives() {
        let rendered = package_py(&package_from(r#"{"version": "1.0"}"#));
        assert!(rendered.ends_with("def commands():\n    pass\n"));
    }

    #[test]
    fn test_render_omits_absent_url() {
        let rendered = package_py(&package_from(r#"{"version": "1.0"}"#));
        assert!(!rendered.contains("url = "));

        let rendered = package_py(&package_from(r#"{"version": "1.0", "url": "http://x"}"#));
        assert!(rendered.contains("url = \"http://x\"\n"));
    }

    #[test]
    fn test_render_escapes_quotes() {
        let rendered = package_py(&package_from(
            r#"{"version": "1.0", "description": "say \"hi\""}"#,
        ));
        assert!(rendered.contains("description = \"say \\\"hi\\\"\"\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let raw = r#"{"version": "1.0", "bin": ["run.exe", "r"], "env_add_path": ["a", "b"]}"#;
        let package = package_from(raw);
        assert_eq!(package_py(&package), package_py(&package));
    }
}
