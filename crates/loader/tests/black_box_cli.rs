//! Runs the `storefront-loader` binary and checks exit status and stdout.

use std::path::Path;
use std::process::{Command, Output};

use storefront_core::SCHEMA_VERSION;

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).expect("failed to write fixture");
    }

    /// Run the loader inside the workspace so no stray config or env leaks in.
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_storefront-loader"))
            .args(args)
            .current_dir(self.path())
            .env_remove("STOREFRONT_OUT_DIR")
            .env_remove("STOREFRONT_IMAGE_EXTENSION")
            .env_remove("STOREFRONT_LOG_FORMAT")
            .env("RUST_LOG", "warn")
            .output()
            .expect("failed to run storefront-loader")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn schema_version_prints_the_shared_constant() {
    let ws = Workspace::new();
    let output = ws.run(&["schema-version"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), format!("{SCHEMA_VERSION}\n"));
}

#[test]
fn validate_succeeds_on_clean_file() {
    let ws = Workspace::new();
    ws.write("products.yaml", "- id: a\n  name: First\n- id: b\n  name: Second\n");

    let output = ws.run(&["validate", "products.yaml"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "products.yaml: 2 records ok\n");
}

#[test]
fn validate_fails_when_a_record_has_an_empty_id() {
    let ws = Workspace::new();
    ws.write("products.json", r#"[{"id":"a"},{"id":""},{"name":"no id"}]"#);

    let output = ws.run(&["validate", "products.json"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("2 of 3 records in products.json are not initialized"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn validate_strict_fails_only_when_ids_repeat() {
    let ws = Workspace::new();
    ws.write("products.yaml", "- id: a\n- id: a\n");

    let lenient = ws.run(&["validate", "products.yaml"]);
    assert!(lenient.status.success(), "stderr: {}", stderr(&lenient));
    assert_eq!(stdout(&lenient), "products.yaml: 2 records ok\n");

    let strict = ws.run(&["validate", "--strict", "products.yaml"]);
    assert!(!strict.status.success());
    assert!(stdout(&strict).is_empty());
    assert!(
        stderr(&strict).contains("duplicate product id a"),
        "stderr: {}",
        stderr(&strict)
    );
}

#[test]
fn validate_fails_on_unreadable_file() {
    let ws = Workspace::new();
    let output = ws.run(&["validate", "missing.yaml"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read missing.yaml"));
}
