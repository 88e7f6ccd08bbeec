use flownote_core::prefs::{Language, Preferences, Theme};
use flownote_core::storage::{LocalStore, SqliteStore, VAULT_KEY};
use flownote_core::vault::{LockDuration, Vault};
use flownote_core::{CaptureEngine, FlownoteError, Keystroke};

#[test]
fn test_vault_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("nested").join("flownote.db");

    let id = {
        let store = SqliteStore::open(&path).expect("open should create the store");
        let mut vault = Vault::load(store).expect("load should succeed");
        let mut engine = CaptureEngine::new(0);
        engine.on_keystroke(Keystroke::Paste("kept across runs".to_string()), 0);
        let entry = engine
            .request_seal(LockDuration::from_secs(30).expect("valid lock"), 1_000)
            .expect("draft should seal");
        let id = entry.id();
        vault.seal(entry).expect("seal should persist");
        id
    };

    let store = SqliteStore::open_existing(&path).expect("store should exist");
    let vault = Vault::load(store).expect("reload should succeed");
    let entry = vault.get(id).expect("entry should be rehydrated");
    assert_eq!(entry.content(), "kept across runs");
    assert_eq!(entry.created_at(), 1_000);
    assert_eq!(entry.lock_duration(), 30_000);
}

#[test]
fn test_preferences_survive_reopen() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("flownote.db");

    {
        let mut store = SqliteStore::open(&path).expect("open should succeed");
        let mut prefs = Preferences::load(&store).expect("load should succeed");
        prefs
            .set_language(&mut store, Language::Zh)
            .expect("language should persist");
        prefs
            .set_theme(&mut store, Theme::Blue)
            .expect("theme should persist");
    }

    let store = SqliteStore::open(&path).expect("reopen should succeed");
    let prefs = Preferences::load(&store).expect("load should succeed");
    assert_eq!(prefs.language, Language::Zh);
    assert_eq!(prefs.theme, Theme::Blue);
}

#[test]
fn test_open_existing_requires_file() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let result = SqliteStore::open_existing(&dir.path().join("missing.db"));
    assert!(matches!(result, Err(FlownoteError::NotFound(_))));
}

#[test]
fn test_corrupt_vault_value_loads_empty_and_is_overwritten_on_seal() {
    let dir = tempfile::tempdir().expect("tempdir should be created");
    let path = dir.path().join("flownote.db");
    let mut store = SqliteStore::open(&path).expect("open should succeed");
    store
        .set_item(VAULT_KEY, "{not json")
        .expect("raw write should succeed");

    let mut vault = Vault::load(store).expect("corrupt data must not fail the load");
    assert!(vault.is_empty());

    let mut engine = CaptureEngine::new(0);
    engine.on_keystroke(Keystroke::Char('x'), 0);
    let entry = engine
        .request_seal(LockDuration::ZERO, 5)
        .expect("draft should seal");
    vault.seal(entry).expect("seal should persist");

    let raw = vault
        .store()
        .get_item(VAULT_KEY)
        .expect("read should succeed")
        .expect("vault key should exist");
    assert!(raw.starts_with('['));
}
