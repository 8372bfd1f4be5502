#![cfg(unix)]

mod common;

use common::TestContext;
use predicates::prelude::*;

const SCAFFOLD: &[&str] = &[
    "config",
    "logs/system",
    "logs/agents",
    "data/memory",
    "data/vector_store",
    "data/knowledge_base",
    "models",
    "outputs/business_plans",
    "outputs/strategic_reports",
    "outputs/generated_code",
];

#[test]
fn setup_creates_environment_layout_and_templates() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--skip-hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created virtual environment"))
        .stdout(predicate::str::contains("Setup complete"));

    let root = ctx.work_dir();
    assert!(root.join("venv/bin/python").exists());
    for dir in SCAFFOLD {
        assert!(root.join(dir).is_dir(), "{} should exist", dir);
    }

    let config = ctx.read_file("config/system_config.yaml");
    assert!(config.contains("${OPENAI_API_KEY}"));
    let template = ctx.read_file(".env.example");
    assert!(template.contains("OPENAI_API_KEY="));
    assert!(template.contains("ANTHROPIC_API_KEY="));
    assert!(!root.join(".env").exists());
}

#[test]
fn setup_upgrades_pip_before_installing_groups() {
    let ctx = TestContext::new();

    ctx.cli().args(["setup", "--skip-hooks"]).assert().success();

    let calls = ctx.python_calls();
    assert_eq!(calls[0], "-m venv venv");
    assert_eq!(calls[1], "-m pip install --upgrade pip");
    assert!(calls[2..].iter().all(|call| call.starts_with("-m pip install")));
    assert!(calls.iter().any(|call| call.contains("anthropic")));
    assert!(calls.iter().any(|call| call.contains("pre-commit")));
}

#[test]
fn skip_install_does_not_call_pip() {
    let ctx = TestContext::new();

    ctx.cli().args(["s", "--skip-install", "--skip-hooks"]).assert().success();

    assert_eq!(ctx.python_calls(), vec!["-m venv venv"]);
}

#[test]
fn second_setup_reuses_environment_and_keeps_data() {
    let ctx = TestContext::new();
    ctx.setup_quick();
    ctx.write_file("data/memory/notes.json", "{}");
    ctx.clear_log();

    ctx.cli()
        .args(["setup", "--skip-install", "--skip-hooks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created virtual environment").not());

    assert!(ctx.python_calls().is_empty());
    assert_eq!(ctx.read_file("data/memory/notes.json"), "{}");
}

#[test]
fn missing_interpreter_fails_setup() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--skip-hooks"])
        .env("AISYS_PYTHON", "/nonexistent/python3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!ctx.work_dir().join("config").exists());
}

#[test]
fn launcher_config_relocates_the_environment() {
    let ctx = TestContext::new();
    ctx.write_file("aisys.toml", "[python]\nvenv_dir = \".venv\"\n");

    ctx.cli().args(["setup", "--skip-install", "--skip-hooks"]).assert().success();

    assert_eq!(ctx.python_calls(), vec!["-m venv .venv"]);
    assert!(ctx.work_dir().join(".venv/bin/python").exists());
}

#[test]
fn invalid_launcher_config_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_file("aisys.toml", "[python]\nvenv_dir = \"../outside\"\n");

    ctx.cli()
        .args(["setup", "--skip-install", "--skip-hooks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("python.venv_dir"));

    assert!(ctx.python_calls().is_empty());
}
