use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn readlog(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readlog").unwrap();
    cmd.env("READLOG_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

/// Create an entry and return its id
fn create(dir: &TempDir, args: &[&str]) -> String {
    let output = readlog(dir).arg("new").args(args).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .next()
        .and_then(|line| line.strip_prefix("Created entry: "))
        .unwrap()
        .trim()
        .to_string()
}

#[test]
fn test_dashboard_on_empty_store() {
    let dir = TempDir::new().unwrap();
    readlog(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading Statistics"))
        .stdout(predicate::str::contains("No entries yet"));
}

#[test]
fn test_new_then_list() {
    let dir = TempDir::new().unwrap();
    create(&dir, &["--title", "Heatwave grips Europe", "--topic", "Climate"]);
    create(&dir, &["--title", "Rates on hold", "--topic", "Business"]);

    readlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heatwave grips Europe"))
        .stdout(predicate::str::contains("Rates on hold"))
        .stdout(predicate::str::contains("2 entries"));

    readlog(&dir)
        .args(["list", "--topic", "Climate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Heatwave grips Europe"))
        .stdout(predicate::str::contains("Rates on hold").not());

    readlog(&dir)
        .args(["list", "--query", "RATES"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rates on hold"))
        .stdout(predicate::str::contains("1 entries"));
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    create(&dir, &["--title", "One", "--minutes", "abc"]);

    let output = readlog(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "One");
    assert_eq!(entries[0]["minutes"], "abc");
    assert_eq!(entries[0]["topic"], "Health");
}

#[test]
fn test_edit_show_and_prompt() {
    let dir = TempDir::new().unwrap();
    let id = create(&dir, &[]);
    let short = &id[..8];

    readlog(&dir)
        .args(["edit", short, "--title", "Floods in the north"])
        .args(["--excerpt", "Rivers burst their banks.", "--minutes", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry: Floods in the north"));

    readlog(&dir)
        .args(["show", short])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry: Floods in the north"))
        .stdout(predicate::str::contains("Excerpt (4 words, 1 lines):"))
        .stdout(predicate::str::contains("Minutes:     25"));

    readlog(&dir)
        .args(["prompt", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Title: Floods in the north"))
        .stdout(predicate::str::contains("[Excerpt]\nRivers burst their banks."))
        .stdout(predicate::str::contains("(none yet)"));
}

#[test]
fn test_edit_without_fields_fails() {
    let dir = TempDir::new().unwrap();
    let id = create(&dir, &[]);

    readlog(&dir)
        .args(["edit", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to update"));
}

#[test]
fn test_unknown_id() {
    let dir = TempDir::new().unwrap();
    readlog(&dir)
        .args(["show", "doesnotexist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: doesnotexist"));
}

#[test]
fn test_vocab_flow() {
    let dir = TempDir::new().unwrap();
    let first = create(&dir, &["--title", "A"]);
    let second = create(&dir, &["--title", "B"]);

    readlog(&dir)
        .args(["vocab", "add", &first, "tariff", "Tariff", "headwind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 'tariff'"))
        .stdout(predicate::str::contains("Skipped 'Tariff'"));

    readlog(&dir)
        .args(["vocab", "add", &second, "Tariff"])
        .assert()
        .success();

    readlog(&dir)
        .args(["vocab", "export"])
        .assert()
        .success()
        .stdout("Tariff\t\nheadwind\t\ntariff\t\n");

    readlog(&dir)
        .args(["vocab", "remove", &first, "headwind"])
        .assert()
        .success();

    readlog(&dir)
        .args(["vocab", "list", &first])
        .assert()
        .success()
        .stdout(predicate::str::contains("tariff"))
        .stdout(predicate::str::contains("headwind").not());
}

#[test]
fn test_delete_requires_force() {
    let dir = TempDir::new().unwrap();
    let id = create(&dir, &["--title", "Temporary"]);

    readlog(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force"));
    readlog(&dir).args(["show", &id]).assert().success();

    readlog(&dir)
        .args(["delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry: Temporary"));
    readlog(&dir).args(["show", &id]).assert().failure();
}

#[test]
fn test_stats() {
    let dir = TempDir::new().unwrap();
    create(&dir, &["--minutes", "20"]);
    create(&dir, &["--minutes", "40"]);
    create(&dir, &["--minutes", "0"]);
    create(&dir, &["--minutes", "abc"]);

    readlog(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Entries:\s+4").unwrap())
        .stdout(predicate::str::is_match(r"Average minutes:\s+30").unwrap())
        .stdout(predicate::str::is_match(r"Last 7 days:\s+4").unwrap());
}

#[test]
fn test_export_and_import() {
    let source = TempDir::new().unwrap();
    create(&source, &["--title", "Exported"]);
    let file = source.path().join("backup.json");

    readlog(&source)
        .args(["export", "json"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 entries"));

    let target = TempDir::new().unwrap();
    readlog(&target)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 of 1 entries"));

    // second import skips known ids
    readlog(&target)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 of 1 entries"));

    readlog(&target)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));
}

#[test]
fn test_csv_and_yaml_export() {
    let dir = TempDir::new().unwrap();
    create(&dir, &["--title", "Spreadsheet"]);

    let csv = dir.path().join("entries.csv");
    readlog(&dir).args(["export", "csv"]).arg(&csv).assert().success();
    let text = std::fs::read_to_string(&csv).unwrap();
    assert!(text.starts_with("ID,Date,Title"));
    assert!(text.contains("Spreadsheet"));

    let yaml = dir.path().join("entries.yaml");
    readlog(&dir).args(["export", "yaml"]).arg(&yaml).assert().success();
    assert!(std::fs::read_to_string(&yaml)
        .unwrap()
        .contains("title: Spreadsheet"));
}

#[test]
fn test_config_defaults_apply_to_new_entries() {
    let dir = TempDir::new().unwrap();

    readlog(&dir)
        .args(["config", "set", "default_topic", "Science"])
        .assert()
        .success();
    readlog(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_topic:      Science"));

    create(&dir, &[]);
    readlog(&dir)
        .args(["list", "--topic", "Science"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entries"));

    readlog(&dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting: colour"));
}

#[test]
fn test_audit_log() {
    let dir = TempDir::new().unwrap();
    let id = create(&dir, &["--title", "Audited"]);
    readlog(&dir)
        .args(["edit", &id, "--notes", "reread tomorrow"])
        .assert()
        .success();

    readlog(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Entry"))
        .stdout(predicate::str::contains("UPDATE Entry"))
        .stdout(predicate::str::contains("notes: \"\" -> \"reread tomorrow\""));
}

#[test]
fn test_init() {
    let dir = TempDir::new().unwrap();
    readlog(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized readlog"));
    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").is_dir());
}
