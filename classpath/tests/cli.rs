//! End-to-end tests that run the `classpath` binary against temp projects.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

use tempfile::TempDir;

const COMMONS_LANG: &str = "commons-lang/commons-lang/2.6/commons-lang-2.6.jar";
const COMMONS_MATH: &str = "org/apache/commons/commons-math/2.2/commons-math-2.2.jar";

/// A temporary project directory with a classpath.toml.
struct Project {
    dir: TempDir,
}

impl Project {
    fn new(manifest: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("classpath.toml"), manifest).expect("Failed to write manifest");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn default_output(&self) -> PathBuf {
        self.path()
            .join("target/generated-resources/classpath/classpath.txt")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_classpath"));
        cmd.args(args)
            .arg("--manifest")
            .arg(self.path().join("classpath.toml"))
            .env_remove("RUST_LOG")
            .current_dir(self.path());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to run classpath")
    }
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_single_artifact_default_layout() {
    let project = Project::new(r#"dependencies = ["commons-lang:commons-lang:2.6"]"#);

    let output = project.run(&["generate"]);

    assert_success(&output);
    assert_eq!(
        fs::read_to_string(project.default_output()).unwrap(),
        format!("{}\n", COMMONS_LANG)
    );
}

#[test]
fn test_resolver_order_is_kept() {
    let project = Project::new(
        r#"dependencies = [
            "org.apache.commons:commons-math:2.2",
            "commons-lang:commons-lang:2.6",
        ]"#,
    );

    assert_success(&project.run(&["generate"]));

    assert_eq!(
        fs::read_to_string(project.default_output()).unwrap(),
        format!("{}\n{}\n", COMMONS_MATH, COMMONS_LANG)
    );
}

#[test]
fn test_sort_flag_orders_lexicographically() {
    let project = Project::new(
        r#"dependencies = [
            "org.apache.commons:commons-math:2.2",
            "commons-lang:commons-lang:2.6",
        ]"#,
    );

    assert_success(&project.run(&["generate", "--sort"]));

    assert_eq!(
        fs::read_to_string(project.default_output()).unwrap(),
        format!("{}\n{}\n", COMMONS_LANG, COMMONS_MATH)
    );
}

#[test]
fn test_sort_from_manifest() {
    let project = Project::new(
        r#"
dependencies = [
    "org.apache.commons:commons-math:2.2",
    "commons-lang:commons-lang:2.6",
]

[classpath]
sort = true
"#,
    );

    assert_success(&project.run(&["generate"]));

    let content = fs::read_to_string(project.default_output()).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec![COMMONS_LANG, COMMONS_MATH]);
}

#[test]
fn test_no_sort_flag_overrides_manifest() {
    let project = Project::new(
        r#"
dependencies = [
    "org.apache.commons:commons-math:2.2",
    "commons-lang:commons-lang:2.6",
]

[classpath]
sort = true
"#,
    );

    assert_success(&project.run(&["generate", "--no-sort"]));

    let content = fs::read_to_string(project.default_output()).unwrap();
    assert_eq!(content.lines().collect::<Vec<_>>(), vec![COMMONS_MATH, COMMONS_LANG]);
}

#[test]
fn test_no_dependencies_writes_empty_file() {
    let project = Project::new("");

    assert_success(&project.run(&["generate"]));

    assert_eq!(fs::metadata(project.default_output()).unwrap().len(), 0);
}

#[test]
fn test_output_directory_blocked_by_file() {
    let project = Project::new(r#"dependencies = ["commons-lang:commons-lang:2.6"]"#);
    fs::create_dir(project.path().join("target")).unwrap();
    fs::write(project.path().join("target/generated-resources"), "").unwrap();
    let registry = project.path().join("target/resources.json");

    let output = project.run(&["generate", "--resources", registry.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not create directory"), "stderr: {}", stderr);
    assert!(!project.default_output().exists());
    assert!(!registry.exists());
}

#[test]
fn test_overrides_and_flat_layout() {
    let project = Project::new(
        r#"
dependencies = ["org.apache.commons:commons-math:2.2"]

[classpath]
file = "ignored.txt"
"#,
    );

    assert_success(&project.run(&[
        "generate",
        "--output-directory",
        "out",
        "--file",
        "deps.txt",
        "--layout",
        "flat",
    ]));

    assert_eq!(
        fs::read_to_string(project.path().join("out/deps.txt")).unwrap(),
        "commons-math-2.2.jar\n"
    );
    assert!(!project.path().join("out/ignored.txt").exists());
}

#[test]
fn test_file_override_cannot_escape_output_directory() {
    let project = Project::new(r#"dependencies = ["commons-lang:commons-lang:2.6"]"#);
    let registry = project.path().join("resources.json");

    let output = project.run(&[
        "generate",
        "--file",
        "../x.txt",
        "--resources",
        registry.to_str().unwrap(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--file"), "stderr: {}", stderr);
    assert!(!project.path().join("target").exists());
    assert!(!project.path().join("x.txt").exists());
    assert!(!registry.exists());
}

#[test]
fn test_resource_registry_is_idempotent() {
    let project = Project::new(r#"dependencies = ["commons-lang:commons-lang:2.6"]"#);
    let registry = project.path().join("target/resources.json");
    let registry_arg = registry.to_str().unwrap();

    assert_success(&project.run(&["generate", "--resources", registry_arg]));
    assert_success(&project.run(&["generate", "--resources", registry_arg]));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&registry).unwrap()).unwrap();
    let resources = json["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(
        resources[0]["directory"].as_str().unwrap(),
        project
            .path()
            .join("target/generated-resources/classpath")
            .to_str()
            .unwrap()
    );
    assert_eq!(resources[0]["includes"], serde_json::json!(["classpath.txt"]));
}

#[test]
fn test_artifacts_from_stdin() {
    let project = Project::new(r#"dependencies = ["org.apache.commons:commons-math:2.2"]"#);

    let mut child = project
        .command(&["generate", "--artifacts", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn classpath");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"# extra\ncommons-lang:commons-lang:2.6\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_success(&output);
    assert_eq!(
        fs::read_to_string(project.default_output()).unwrap(),
        format!("{}\n{}\n", COMMONS_MATH, COMMONS_LANG)
    );
}

#[test]
fn test_dry_run_touches_nothing() {
    let project = Project::new(r#"dependencies = ["commons-lang:commons-lang:2.6"]"#);

    let output = project.run(&["generate", "--dry-run"]);

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(COMMONS_LANG));
    assert!(stdout.contains("1 entry would be written"));
    assert!(!project.path().join("target").exists());
}

#[test]
fn test_invalid_coordinate_reports_diagnostic() {
    let project = Project::new(r#"dependencies = ["commons-lang"]"#);

    let output = project.run(&["generate"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid artifact coordinate"), "stderr: {}", stderr);
    assert!(!project.path().join("target").exists());
}

#[test]
fn test_check_summarizes_manifest() {
    let project = Project::new(
        r#"
dependencies = ["commons-lang:commons-lang:2.6"]

[classpath]
layout = "flat"
"#,
    );

    let output = project.run(&["check"]);

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("is valid"));
    assert!(stdout.contains("Layout: flat"));
    assert!(stdout.contains("  - commons-lang:commons-lang:2.6"));
    assert!(!project.path().join("target").exists());
}
