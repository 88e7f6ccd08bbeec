use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rusqlite::Connection;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_flownote"))
}

/// Isolated HOME/XDG dirs and a store path inside them.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    fn store(&self) -> PathBuf {
        self.dir.path().join("data").join("vault.db")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .arg("--store")
            .arg(self.store())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("xdg-data"))
            .env("NO_COLOR", "1")
            .env_remove("FLOWNOTE_STORE")
            .env_remove("FLOWNOTE_CONFIG")
            .env_remove("FLOWNOTE_API_KEY")
            .env_remove("GEMINI_API_KEY")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run flownote")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "exit={:?}\nstdout:\n{}\nstderr:\n{}",
        output.status.code(),
        stdout(output),
        stderr(output)
    );
}

fn list_json(sandbox: &Sandbox) -> Vec<serde_json::Value> {
    let output = sandbox.run(&["list", "--json"]);
    assert_success(&output);
    serde_json::from_str(&stdout(&output)).expect("list json")
}

fn seal(sandbox: &Sandbox, body: &str, duration: &str) -> String {
    let output = sandbox.run(&["seal", "--body", body, "--duration", duration, "--no-input"]);
    assert_success(&output);
    let entries = list_json(sandbox);
    entries[0]["id"].as_str().expect("id").to_string()
}

fn set_vault_raw(store: &Path, raw: &str) {
    let conn = Connection::open(store).expect("open store");
    conn.execute(
        "INSERT OR REPLACE INTO local_storage (key, value) VALUES ('flownote_vault', ?1)",
        [raw],
    )
    .expect("write vault");
}

#[test]
fn test_first_run_lists_empty_vault() {
    let sandbox = Sandbox::new();
    assert!(list_json(&sandbox).is_empty());
    assert!(sandbox.store().exists());
}

#[test]
fn test_seal_show_edit_flow() {
    let sandbox = Sandbox::new();
    let id = seal(&sandbox, "  the quick brown fox  ", "0s");

    let entries = list_json(&sandbox);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["locked"], false);
    assert_eq!(entries[0]["content"], "the quick brown fox");
    assert_eq!(entries[0]["words"], 4);

    let prefix = &id[..8];
    let output = sandbox.run(&["show", prefix]);
    assert_success(&output);
    assert!(stdout(&output).contains("the quick brown fox"));

    let output = sandbox.run(&["edit", prefix, "--body", "a slower fox", "--no-input"]);
    assert_success(&output);
    assert!(stdout(&output).contains("status=ok"));

    let entries = list_json(&sandbox);
    assert_eq!(entries[0]["content"], "a slower fox");
    assert_eq!(entries[0]["id"], id.as_str());
}

#[test]
fn test_newest_entry_is_listed_first() {
    let sandbox = Sandbox::new();
    seal(&sandbox, "first", "0s");
    seal(&sandbox, "second", "0s");

    let entries = list_json(&sandbox);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["content"], "second");
    assert_eq!(entries[1]["content"], "first");
}

#[test]
fn test_locked_entry_hides_content() {
    let sandbox = Sandbox::new();
    let id = seal(&sandbox, "secret", "1h");

    let entries = list_json(&sandbox);
    assert_eq!(entries[0]["locked"], true);
    assert!(entries[0]["content"].is_null());
    assert!(entries[0]["remaining_ms"].as_u64().unwrap() > 3_500_000);

    let output = sandbox.run(&["list"]);
    assert_success(&output);
    assert!(!stdout(&output).contains("secret"));

    let output = sandbox.run(&["show", &id]);
    assert_eq!(output.status.code(), Some(6));
    assert!(!stdout(&output).contains("secret"));

    let output = sandbox.run(&["edit", &id, "--body", "new", "--no-input"]);
    assert_eq!(output.status.code(), Some(6));

    let output = sandbox.run(&["list", "--json", "--unlocked"]);
    assert_success(&output);
    let unlocked: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(unlocked.is_empty());
}

#[test]
fn test_input_errors() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["seal", "--body", "   ", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(&["seal", "--body", "x", "--duration", "24:00:00"]);
    assert_eq!(output.status.code(), Some(4));

    let output = sandbox.run(&["seal", "--body", "x", "--duration", "5x"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("Invalid lock duration"));

    let output = sandbox.run(&["show", "deadbeef"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("flownote list"));

    assert!(list_json(&sandbox).is_empty());
}

#[test]
fn test_refine_without_api_key_leaves_entry() {
    let sandbox = Sandbox::new();
    let id = seal(&sandbox, "teh draft", "0s");

    let output = sandbox.run(&["refine", &id, "--no-input"]);
    assert_eq!(output.status.code(), Some(7));
    assert!(stderr(&output).contains("FLOWNOTE_API_KEY"));

    let entries = list_json(&sandbox);
    assert_eq!(entries[0]["content"], "teh draft");
}

#[test]
fn test_refine_locked_entry_reports_lock_first() {
    let sandbox = Sandbox::new();
    let id = seal(&sandbox, "teh draft", "10m");

    let output = sandbox.run(&["refine", &id, "--no-input"]);
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_language_and_theme_preferences() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["lang"]);
    assert_success(&output);
    assert!(stdout(&output).contains("language=en"));

    assert_success(&sandbox.run(&["lang", "zh"]));
    let output = sandbox.run(&["lang"]);
    assert!(stdout(&output).contains("language=zh"));

    let output = sandbox.run(&["theme", "neon"]);
    assert_eq!(output.status.code(), Some(4));

    assert_success(&sandbox.run(&["theme", "warm"]));
    let output = sandbox.run(&["theme"]);
    assert!(stdout(&output).contains("theme=warm"));
}

#[test]
fn test_backup_and_doctor() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["backup", sandbox.path("b.db").to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(3));

    seal(&sandbox, "keep me", "0s");

    let output = sandbox.run(&["doctor"]);
    assert_success(&output);
    assert!(stdout(&output).contains("check=vault ok"));

    let destination = sandbox.path("backups/b.db");
    let output = sandbox.run(&["backup", destination.to_str().unwrap()]);
    assert_success(&output);
    assert!(destination.exists());

    let copy = Connection::open(&destination).unwrap();
    let raw: String = copy
        .query_row(
            "SELECT value FROM local_storage WHERE key = 'flownote_vault'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(raw.contains("keep me"));
}

#[test]
fn test_corrupt_vault_loads_empty_and_fails_doctor() {
    let sandbox = Sandbox::new();
    seal(&sandbox, "soon gone", "0s");
    set_vault_raw(&sandbox.store(), "{not json");

    assert!(list_json(&sandbox).is_empty());

    let output = sandbox.run(&["doctor"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("check=vault err"));
}

#[test]
fn test_init_writes_config_once() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["init", "--no-input", "--timezone", "Europe/Paris"]);
    assert_success(&output);

    let config_path = sandbox.path("config").join("flownote").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("Europe/Paris"));
    assert!(contents.contains("vault.db"));

    let output = sandbox.run(&["init", "--no-input"]);
    assert_eq!(output.status.code(), Some(4));

    assert_success(&sandbox.run(&["init", "--no-input", "--force"]));
}

#[test]
fn test_write_requires_terminal() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["write"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("seal"));
}
