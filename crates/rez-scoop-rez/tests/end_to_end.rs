use rez_scoop_backend::ScoopPackage;
use rez_scoop_rez::{RezConfig, RezPackage};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_manifest(root: &Path, name: &str, raw: &str) {
    let dir = root.join("buckets/main/bucket");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{name}.json")), raw).unwrap();
}

#[test]
fn scoop_manifest_becomes_rez_package() {
    let scoop_root = tempdir().unwrap();
    let dest = tempdir().unwrap();
    write_manifest(
        scoop_root.path(),
        "foo",
        r#"{"version": "1.2.3", "bin": "foo.exe", "env_set": [{"FOO": "$dir/bar"}]}"#,
    );
    let apps = scoop_root.path().join("apps/foo");
    fs::create_dir_all(&apps).unwrap();
    fs::write(apps.join("foo.exe"), "binary").unwrap();

    let scoop = ScoopPackage::with_root("foo", scoop_root.path());
    let rez = RezPackage::from_scoop(&scoop).unwrap();
    assert_eq!(rez.version(), "1.2.3");

    let install_dir = apps.to_string_lossy().replace('\\', "/");
    assert!(rez
        .commands()
        .contains(&format!("env.PATH.prepend(\"{install_dir}\")")));
    assert!(rez
        .commands()
        .contains(&format!("env.FOO.prepend(\"{install_dir}/bar\")")));

    let config = RezConfig::with_paths(dest.path(), vec![]);
    let installed = rez
        .install_with(&config, None, scoop.install_path())
        .unwrap();

    let definition = dest.path().join("foo/1.2.3/package.py");
    assert!(definition.is_file());
    let rendered = fs::read_to_string(definition).unwrap();
    assert!(rendered.contains("version = \"1.2.3\""));
    assert!(rendered.contains("def commands():"));

    assert_eq!(installed.len(), 1);
    assert!(installed[0].join("foo.exe").is_file());
}
