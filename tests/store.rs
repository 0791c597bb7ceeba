use std::{fs, path::Path};

use reckon::{
    AngleMode, Event, HistoryEntry, HistoryStore, Session,
    store::{HistoryState, StoreError},
};
use tempfile::tempdir;

fn entry(expression: &str, result: &str) -> HistoryEntry {
    HistoryEntry { expression: expression.to_string(),
                   result:     Some(result.to_string()),
                   timestamp:  Some("2026-10-17 09:30:00".to_string()), }
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("nested").join("history.json"));
    let state = HistoryState { history:    vec![entry("2+2", "4"), entry("1/3", "0.333333333333")],
                               angle_mode: AngleMode::Rad, };

    store.save(&state).unwrap();
    assert_eq!(store.try_load().unwrap(), state);
    assert_eq!(store.load(), state);

    let leftovers: Vec<_> = fs::read_dir(store.path().parent().unwrap()).unwrap()
                                                                       .filter_map(Result::ok)
                                                                       .map(|e| e.file_name())
                                                                       .collect();
    assert_eq!(leftovers, ["history.json"]);
}

#[test]
fn document_layout() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));
    store.save(&HistoryState { history:    vec![entry("5!", "120")],
                               angle_mode: AngleMode::Deg, })
         .unwrap();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(json["angle_mode"], "DEG");
    assert_eq!(json["history_entries"][0]["expression"], "5!");
    assert_eq!(json["history_entries"][0]["result"], "120");
}

#[test]
fn missing_file_is_empty_state() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("absent.json"));

    let state = store.try_load().unwrap();
    assert!(state.history.is_empty());
    assert_eq!(state.angle_mode, AngleMode::Deg);
}

#[test]
fn corrupt_file_fails_soft() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, "{ not json").unwrap();
    let store = HistoryStore::new(&path);

    assert!(store.try_load().is_err());
    assert_eq!(store.load(), HistoryState::default());
}

#[test]
fn partial_document_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");
    fs::write(&path, r#"{"angle_mode":"RAD"}"#).unwrap();

    let state = HistoryStore::new(&path).try_load().unwrap();
    assert!(state.history.is_empty());
    assert_eq!(state.angle_mode, AngleMode::Rad);
}

#[test]
fn clear_keeps_angle_mode() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));
    store.save(&HistoryState { history:    vec![entry("1", "1")],
                               angle_mode: AngleMode::Rad, })
         .unwrap();

    store.clear(AngleMode::Rad).unwrap();
    let state = store.try_load().unwrap();
    assert!(state.history.is_empty());
    assert_eq!(state.angle_mode, AngleMode::Rad);
}

#[test]
fn session_persists_and_restores() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    {
        let mut session = Session::with_store(HistoryStore::new(&path), 50);
        session.handle(Event::Input("6*7".into()));
        session.handle(Event::Equals);
        session.handle(Event::ToggleAngleMode);
    }

    let session = Session::with_store(HistoryStore::new(&path), 50);
    assert_eq!(session.angle_mode(), AngleMode::Rad);
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().get(0).unwrap().result.as_deref(), Some("42"));
    assert_eq!(session.answer(), 0.0);
}

#[test]
fn restored_history_is_trimmed_to_capacity() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.json"));
    let history = (0..10).map(|n| entry(&n.to_string(), &n.to_string())).collect();
    store.save(&HistoryState { history,
                               angle_mode: AngleMode::Deg, })
         .unwrap();

    let mut session = Session::with_store(store.clone(), 4);
    assert_eq!(session.history().len(), 4);
    assert_eq!(session.history().get(0).unwrap().expression, "0");

    session.handle(Event::ClearHistory);
    assert!(store.try_load().unwrap().history.is_empty());
}

#[test]
fn staging_file_is_next_to_the_document() {
    let json = HistoryStore::new("state/h.json");
    let txt = HistoryStore::new("state/h.txt");
    let tmp = HistoryStore::new("state/h.tmp");

    assert_eq!(json.staging_path(), Path::new("state/h.json.tmp"));
    assert_ne!(json.staging_path(), txt.staging_path());
    assert_ne!(tmp.staging_path(), tmp.path());
}

#[test]
fn document_named_tmp_survives_save() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path().join("history.tmp"));
    let state = HistoryState { history:    vec![entry("3*3", "9")],
                               angle_mode: AngleMode::Rad, };

    store.save(&state).unwrap();
    assert_eq!(store.try_load().unwrap(), state);
    assert!(!store.staging_path().exists());
}

#[test]
fn encoding_failure_is_not_reported_as_corruption() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = StoreError::Serialize { path: "history.json".into(),
                                        source };

    let message = error.to_string();
    assert!(message.contains("cannot encode"), "{message}");
    assert!(!message.contains("corrupt"), "{message}");
}
