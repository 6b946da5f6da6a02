use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

/// Command isolated from the user's real config directory.
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("incoterm-wizard").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn resolve_sea_all_seller_is_cif() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args([
            "resolve", "--transport", "sea", "--loading", "seller", "--main-transport", "seller",
            "--customs", "seller", "--insurance", "seller", "--unloading", "seller",
        ])
        .assert()
        .success()
        .stdout(contains("CIF (Cost, Insurance and Freight)®"))
        .stdout(contains("833-782-7628 Ext. 1"));
}

#[test]
fn resolve_rail_all_buyer_except_loading_is_dap() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args([
            "resolve", "--transport", "rail", "--loading", "seller", "--main-transport", "buyer",
            "--customs", "buyer", "--insurance", "buyer", "--unloading", "buyer",
        ])
        .assert()
        .success()
        .stdout(contains("DAP (Delivered at Place)®"));
}

#[test]
fn resolve_json_output() {
    let home = TempDir::new().unwrap();
    let output = cmd(&home)
        .args([
            "resolve", "--transport", "air", "--loading", "seller", "--main-transport", "seller",
            "--customs", "buyer", "--insurance", "buyer", "--unloading", "buyer",
            "--format", "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(parsed["transport"], "air");
    assert_eq!(parsed["term"]["code"], "CPT");
    assert_eq!(parsed["answers"]["transport"], "seller");
}

#[test]
fn resolve_refuses_incomplete_answers() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["resolve", "--transport", "road", "--loading", "buyer", "--main-transport", "buyer"])
        .assert()
        .failure()
        .stderr(contains("missing: customs, insurance, unloading"));
}

#[test]
fn resolve_allow_incomplete_uses_literal_semantics() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args([
            "resolve", "--transport", "road", "--loading", "buyer", "--main-transport", "buyer",
            "--allow-incomplete",
        ])
        .assert()
        .success()
        .stdout(contains("EXW (Ex Works)®"))
        .stdout(contains("(not answered)"));
}

#[test]
fn resolve_rejects_unknown_transport() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["resolve", "--transport", "teleport"])
        .assert()
        .failure();
}

#[test]
fn terms_lists_catalog() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["terms", "--transport", "sea"])
        .assert()
        .success()
        .stdout(contains("FAS Free Alongside Ship"))
        .stdout(contains("FCA").not());
}

#[test]
fn table_prints_all_modes() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("table")
        .assert()
        .success()
        .stdout(contains("=== Sea Freight (sea) ==="))
        .stdout(contains("=== Air Freight (air) ==="))
        .stdout(contains("otherwise → DAP"));
}

#[test]
fn prompt_reads_answers_from_stdin() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("prompt")
        .write_stdin("road\nb\nb\ns\ns\ns\nno\n")
        .assert()
        .success()
        .stdout(contains("EXW (Ex Works)®"));
}

#[test]
fn explicit_config_overrides_contact_and_format() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("wizard.json");
    std::fs::write(
        &config,
        r#"{ "contact": { "display": "555-0100" }, "format": "json" }"#,
    )
    .unwrap();

    cmd(&home)
        .arg("--config")
        .arg(&config)
        .args([
            "resolve", "--transport", "sea", "--loading", "buyer", "--main-transport", "buyer",
            "--customs", "buyer", "--insurance", "buyer", "--unloading", "buyer",
        ])
        .assert()
        .success()
        .stdout(contains("\"display\": \"555-0100\""))
        .stdout(contains("\"code\": \"FAS\""));
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--config", "/nonexistent/wizard.json", "terms"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}
