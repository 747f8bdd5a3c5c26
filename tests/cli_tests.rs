use assert_cmd::Command;
use predicates::prelude::*;
use regex::Regex;
use tempfile::TempDir;

/// Command running in an isolated project directory with its own HOME
fn gicm(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gicm"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("GICM_CLI")
        .env_remove("GICM_REGISTRY_PATH")
        .env_remove("GICM_SHARE_URL")
        .env_remove("GICM_LOG");
    cmd
}

#[test]
fn test_help_output() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gICM marketplace"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gicm "));
}

#[test]
fn test_list_filters_by_kind() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["list", "--kind", "skill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solana-mastery"))
        .stdout(predicate::str::contains("icm-anchor-architect").not());
}

#[test]
fn test_list_rejects_unsupported_kind() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["list", "--kind", "widget"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported kind"));
}

#[test]
fn test_install_prints_command() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["install", "icm-anchor-architect"])
        .assert()
        .success()
        .stdout("npx @gicm/cli add agent/icm-anchor-architect\n");
}

#[test]
fn test_install_uses_configured_cli() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".gicm.toml"), "[install]\ncli = \"gicm\"\n").unwrap();
    gicm(&dir)
        .args(["install", "skill/solana-mastery"])
        .assert()
        .success()
        .stdout("gicm add skill/solana-mastery\n");
}

#[test]
fn test_install_unknown_item_fails() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["install", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_stack_add_show_and_install() {
    let dir = TempDir::new().unwrap();

    gicm(&dir)
        .args(["stack", "add", "icm-anchor-architect", "solana-mastery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 item(s), 1500 tokens"));

    assert!(dir.path().join(".gicm/stack.toml").exists());

    gicm(&dir)
        .args(["stack", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("icm-anchor-architect"))
        .stdout(predicate::str::contains("anchor-macros"));

    gicm(&dir)
        .args(["stack", "install"])
        .assert()
        .success()
        .stdout(
            "npx @gicm/cli add skill/solana-mastery\nnpx @gicm/cli add agent/icm-anchor-architect\n",
        );
}

#[test]
fn test_stack_add_unknown_keeps_saved_stack() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["stack", "add", "solana-mastery"])
        .assert()
        .success();

    gicm(&dir)
        .args(["stack", "add", "github", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown item 'does-not-exist'"));

    gicm(&dir)
        .args(["stack", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 item(s), 300 tokens"));
}

#[test]
fn test_stack_add_with_deps() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["stack", "add", "--with-deps", "icm-anchor-architect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ solana-mastery (dependency)"))
        .stdout(predicate::str::contains("+ anchor-macros (dependency)"))
        .stdout(predicate::str::contains("3 item(s), 1750 tokens"));
}

#[test]
fn test_stack_share_and_import_round_trip() {
    let source = TempDir::new().unwrap();
    gicm(&source)
        .args(["stack", "add", "github", "solana-mastery"])
        .assert()
        .success();

    let output = gicm(&source).args(["stack", "share"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let token = Regex::new(r"Token: (v1\.[0-9a-f]+\.[0-9a-f]{8})")
        .unwrap()
        .captures(&stdout)
        .expect("share should print a token")[1]
        .to_string();
    assert!(stdout.contains(&format!("https://gicm.dev/stack?stack={}", token)));

    let target = TempDir::new().unwrap();
    gicm(&target)
        .args(["stack", "import", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 item(s)."));

    gicm(&target)
        .args(["stack", "install", "--combined"])
        .assert()
        .success()
        .stdout("npx @gicm/cli add mcp/github skill/solana-mastery\n");
}

#[test]
fn test_stack_share_skips_hand_edited_stale_id() {
    let source = TempDir::new().unwrap();
    std::fs::create_dir(source.path().join(".gicm")).unwrap();
    std::fs::write(
        source.path().join(".gicm/stack.toml"),
        "ids = [\"solana-mastery\", \"Old_Agent\"]\n",
    )
    .unwrap();

    let output = gicm(&source).args(["stack", "share"]).assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    let token = Regex::new(r"Token: (\S+)")
        .unwrap()
        .captures(&stdout)
        .expect("share should print a token")[1]
        .to_string();

    let target = TempDir::new().unwrap();
    gicm(&target)
        .args(["stack", "import", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 item(s)."));
}

#[test]
fn test_stack_import_garbage_fails_without_touching_stack() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["stack", "add", "solana-mastery"])
        .assert()
        .success();

    gicm(&dir)
        .args(["stack", "import", "garbage-not-a-valid-token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed stack"));

    gicm(&dir)
        .args(["stack", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solana-mastery"));
}

#[test]
fn test_stack_remove_and_clear() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["stack", "add", "github", "postgres"])
        .assert()
        .success();

    gicm(&dir)
        .args(["stack", "remove", "github"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- github"));

    gicm(&dir).args(["stack", "clear"]).assert().success();

    gicm(&dir)
        .args(["stack", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stack is empty"));
}

#[test]
fn test_export_is_json_array() {
    let dir = TempDir::new().unwrap();
    let output = gicm(&dir).arg("export").assert().success();
    let json: serde_json::Value = serde_json::from_slice(&output.get_output().stdout).unwrap();
    let items = json.as_array().expect("export should be an array");
    assert!(items.iter().any(|i| i["id"] == "icm-anchor-architect" && i["kind"] == "agent"));
}

#[test]
fn test_pages_manifest() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"route\": \"/agents\""))
        .stdout(predicate::str::contains("/items/skill/solana-mastery"));
}

#[test]
fn test_custom_registry_dir_and_strict_check() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog");
    std::fs::create_dir(&catalog).unwrap();
    std::fs::write(
        catalog.join("mcp.toml"),
        r#"
[[item]]
id = "supabase"
name = "Supabase"
description = "Supabase"
install = "npx -y @modelcontextprotocol/server-supabase"
dependencies = ["ghost"]
"#,
    )
    .unwrap();

    gicm(&dir)
        .args(["--registry", catalog.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 issue(s)"));

    gicm(&dir)
        .args(["--registry", catalog.to_str().unwrap(), "check", "--strict"])
        .assert()
        .failure();
}

#[test]
fn test_duplicate_ids_abort() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog");
    std::fs::create_dir(&catalog).unwrap();
    let entry = "[[item]]\nid = \"twin\"\nname = \"Twin\"\ndescription = \"dup\"\n";
    std::fs::write(catalog.join("agents.toml"), entry).unwrap();
    std::fs::write(catalog.join("skills.toml"), entry).unwrap();

    gicm(&dir)
        .args(["--registry", catalog.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate item id 'twin'"));
}

#[test]
fn test_config_show() {
    let dir = TempDir::new().unwrap();
    gicm(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cli: npx @gicm/cli"))
        .stdout(predicate::str::contains("(embedded catalog)"));
}

#[test]
fn test_config_validate_reports_bad_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".gicm.toml"), "[install\n").unwrap();
    gicm(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}
