//! End-to-end tests for the satchel binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

const RESOLVER_VARS: [&str; 6] = [
    "NODE_ENV",
    "CI",
    "ANALYZE",
    "USE_CDN_CSS",
    "USE_CDN_JS",
    "PUBLIC_PATH",
];

/// A satchel invocation in an empty directory with none of the resolver's
/// or the color variables inherited from the test runner.
fn satchel_in_terminal(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("satchel").expect("binary");
    cmd.current_dir(dir.path());
    for var in RESOLVER_VARS.iter().chain(&["NO_COLOR", "FORCE_COLOR"]) {
        cmd.env_remove(var);
    }
    cmd
}

/// Same, with plain output for matching on stderr.
fn satchel(dir: &TempDir) -> Command {
    let mut cmd = satchel_in_terminal(dir);
    cmd.env("NO_COLOR", "1");
    cmd
}

fn resolve_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run satchel");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("json on stdout")
}

#[test]
fn resolve_with_empty_environment() {
    let dir = TempDir::new().unwrap();
    let value = resolve_json(satchel(&dir).arg("resolve"));

    assert_eq!(value["publicPath"], "/");
    assert_eq!(value["externals"]["vue"], "Vue");
    assert_eq!(value["html"]["cdn"]["css"].as_array().unwrap().len(), 4);
    assert_eq!(value["html"]["cdn"]["js"].as_array().unwrap().len(), 15);
    assert_eq!(value["plugins"], serde_json::json!([]));
    assert!(value.get("performance").is_none());
}

#[test]
fn runs_with_default_color_detection() {
    let dir = TempDir::new().unwrap();
    let value =
        resolve_json(satchel_in_terminal(&dir).args(["resolve", "-e", "NODE_ENV=production"]));
    assert_eq!(value["plugins"].as_array().unwrap().len(), 2);

    satchel_in_terminal(&dir).arg("flags").assert().success();
}

#[test]
fn runs_with_forced_colors() {
    let dir = TempDir::new().unwrap();
    satchel_in_terminal(&dir)
        .env("FORCE_COLOR", "1")
        .args(["resolve", "--format", "toml", "-e", "NODE_ENV=production"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"name = "compression""#));

    satchel_in_terminal(&dir)
        .env("FORCE_COLOR", "1")
        .arg("check")
        .assert()
        .success();
}

#[test]
fn resolve_production_with_analysis() {
    let dir = TempDir::new().unwrap();
    let value = resolve_json(satchel(&dir).args([
        "resolve",
        "--env",
        "NODE_ENV=production",
        "--env",
        "CI=false",
        "--env",
        "ANALYZE=true",
    ]));

    let names: Vec<_> = value["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["minify", "bundle-analyzer", "compression"]);
    assert_eq!(value["performance"]["maxEntrypointSize"], 10_000_000);
}

#[test]
fn process_environment_is_read() {
    let dir = TempDir::new().unwrap();
    let value = resolve_json(
        satchel(&dir)
            .env("USE_CDN_JS", "false")
            .env("PUBLIC_PATH", "/static/")
            .arg("resolve"),
    );

    assert!(value.get("externals").is_none());
    assert_eq!(value["html"]["cdn"]["js"], serde_json::json!([]));
    assert_eq!(value["publicPath"], "/static/");
}

#[test]
fn env_flag_overrides_process_environment() {
    let dir = TempDir::new().unwrap();
    let value = resolve_json(
        satchel(&dir)
            .env("CI", "true")
            .args(["resolve", "--env", "CI=false", "--env", "ANALYZE=TRUE"]),
    );
    assert_eq!(value["plugins"][0]["name"], "bundle-analyzer");
}

#[test]
fn production_without_cdn_scripts_warns() {
    let dir = TempDir::new().unwrap();
    satchel(&dir)
        .args(["resolve", "-e", "NODE_ENV=production", "-e", "USE_CDN_JS=false"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no CDN scripts are injected"));
}

#[test]
fn resolve_as_toml() {
    let dir = TempDir::new().unwrap();
    satchel(&dir)
        .args(["resolve", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"publicPath = "/""#))
        .stdout(predicate::str::contains(r#"assetsDir = "assets""#));
}

#[test]
fn resolve_uses_project_tables() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("satchel.toml"),
        r#"
[cdn]
css = []

[[cdn.scripts]]
url = "https://cdn.example/react.js"
module = "react"
global = "React"
"#,
    )
    .unwrap();

    let value = resolve_json(satchel(&dir).arg("resolve"));
    assert_eq!(value["externals"], serde_json::json!({ "react": "React" }));
    assert_eq!(
        value["html"]["cdn"]["js"],
        serde_json::json!(["https://cdn.example/react.js"])
    );
    assert_eq!(value["html"]["cdn"]["css"], serde_json::json!([]));
}

#[test]
fn resolve_rejects_invalid_tables() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("satchel.toml"),
        "[[cdn.scripts]]\nurl = \"vendor/vue.js\"\n",
    )
    .unwrap();

    satchel(&dir)
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("vendor/vue.js"));
}

#[test]
fn explicit_json_config_is_read_from_its_section() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(
        dir.path().join("sub/app.json"),
        r#"{ "satchel": { "cdn": { "css": [] } } }"#,
    )
    .unwrap();

    let value = resolve_json(satchel(&dir).args(["resolve", "--config", "sub/app.json"]));
    assert_eq!(value["html"]["cdn"]["css"], serde_json::json!([]));
    assert_eq!(value["html"]["cdn"]["js"].as_array().unwrap().len(), 15);
}

#[test]
fn package_json_section_must_be_an_object() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{ "satchel": "oops" }"#).unwrap();

    satchel(&dir)
        .arg("resolve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected an object"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    satchel(&dir)
        .args(["resolve", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn flags_reports_defaults() {
    let dir = TempDir::new().unwrap();
    let output = satchel(&dir).arg("flags").output().unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["isProduction"], false);
    assert_eq!(value["useCdnCss"], true);
    assert_eq!(value["useCdnJs"], true);
    assert_eq!(value["publicPath"], "/");
}

#[test]
fn check_passes_on_builtin_tables() {
    let dir = TempDir::new().unwrap();
    satchel(&dir)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed!"));
}

#[test]
fn check_strict_fails_on_duplicates() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("satchel.toml"),
        r#"
[cdn]
css = ["https://cdn.example/a.css", "https://cdn.example/a.css"]
"#,
    )
    .unwrap();

    satchel(&dir)
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("asset listed more than once"));

    satchel(&dir)
        .args(["check", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 warning(s)"));
}
