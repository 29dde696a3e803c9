//! Persistence tests for the preset store

use animation_playground::presets::PresetField;
use animation_playground::{CurveId, PlaygroundError, PresetStore};
use std::fs;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> PresetStore {
    PresetStore::open(dir.path().join("presets.json")).unwrap()
}

#[test]
fn test_missing_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(store.is_empty());
    assert!(!dir.path().join("presets.json").exists());
}

#[test]
fn test_seeded_presets_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert_eq!(store.seed_if_empty().unwrap(), 11);

    let reopened = store_in(&dir);
    assert_eq!(reopened.list(), store.list());
    assert_eq!(reopened.seed_if_empty().unwrap(), 0);
    assert_eq!(reopened.len(), 11);
}

#[test]
fn test_updates_and_deletes_are_persisted_immediately() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    store.seed_if_empty().unwrap();

    let presets = store.list();
    let bouncy = presets.iter().find(|p| p.title == "Bouncy").unwrap().id;
    let linear = presets.iter().find(|p| p.title == "Linear").unwrap().id;

    store.delete(bouncy).unwrap();
    store.update(linear, PresetField::Title("Demo".to_string())).unwrap();
    store.set_speed_input(linear, "2").unwrap();

    let reopened = store_in(&dir);
    assert_eq!(reopened.len(), 10);
    assert!(reopened.list().iter().all(|p| p.curve_id != "bouncy"));

    let demo = reopened.get(linear).unwrap();
    assert_eq!(demo.title, "Demo");
    assert_eq!(demo.speed, Some(2.0));
    assert_eq!(demo.curve(), Some(CurveId::Linear));
}

#[test]
fn test_unknown_curves_are_kept_but_hidden() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("presets.json");
    fs::write(
        &path,
        r#"{
  "version": 1,
  "presets": [
    {
      "id": "00000000-0000-4000-8000-000000000001",
      "title": "Wobbly",
      "curve_id": "wobbly",
      "speed": null,
      "presented_text": "Your Content via Wobbly"
    },
    {
      "id": "00000000-0000-4000-8000-000000000002",
      "title": "Snappy",
      "curve_id": "snappy",
      "speed": 0.0,
      "presented_text": "Snap"
    }
  ]
}"#,
    )
    .unwrap();

    let store = PresetStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);

    let visible = store.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].0.title, "Snappy");
    assert_eq!(visible[0].1, CurveId::Snappy.curve());

    // A stored zero speed is read back as absent
    assert_eq!(visible[0].0.speed, None);
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("presets.json");
    fs::write(&path, "not json").unwrap();

    let err = PresetStore::open(&path).unwrap_err();
    assert!(matches!(err, PlaygroundError::StoreCorrupt(_)));
    assert!(!err.is_recoverable());
}

const ONE_BAD_RECORD: &str = r#"{
  "version": 1,
  "presets": [
    {
      "id": "not-a-uuid",
      "title": "Broken",
      "curve_id": "linear",
      "presented_text": "Broken"
    },
    {
      "id": "00000000-0000-4000-8000-000000000002",
      "title": "Snappy",
      "curve_id": "snappy",
      "speed": 1.5,
      "presented_text": "Snap"
    }
  ]
}"#;

#[test]
fn test_undecodable_record_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("presets.json");
    fs::write(&path, ONE_BAD_RECORD).unwrap();

    let store = PresetStore::open(&path).unwrap();
    assert_eq!(store.len(), 1);
    let snappy = &store.list()[0];
    assert_eq!(snappy.title, "Snappy");
    assert_eq!(snappy.speed, Some(1.5));
}

#[test]
fn test_recover_keeps_good_records_and_backs_up_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("presets.json");
    fs::write(&path, ONE_BAD_RECORD).unwrap();

    let (store, problem) = PresetStore::open_or_recover(&path).unwrap();
    assert!(matches!(problem, Some(PlaygroundError::StoreCorrupt(_))));
    assert_eq!(store.len(), 1);
    assert_eq!(store.seed_if_empty().unwrap(), 0);

    let backup = dir.path().join("presets.json.corrupt");
    assert_eq!(fs::read_to_string(backup).unwrap(), ONE_BAD_RECORD);
}

#[test]
fn test_recover_moves_corrupt_file_aside_and_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("presets.json");
    fs::write(&path, "not json").unwrap();

    let (store, problem) = PresetStore::open_or_recover(&path).unwrap();
    let problem = problem.unwrap();
    assert!(matches!(problem, PlaygroundError::StoreCorrupt(_)));
    assert!(problem.user_message().contains("damaged"));
    assert!(store.is_empty());
    assert!(!path.exists());
    assert_eq!(
        fs::read_to_string(dir.path().join("presets.json.corrupt")).unwrap(),
        "not json"
    );

    // Seeding proceeds as on a first launch and writes a fresh file
    assert_eq!(store.seed_if_empty().unwrap(), 11);
    assert_eq!(store_in(&dir).len(), 11);
}

#[test]
fn test_recover_healthy_file_reports_nothing() {
    let dir = TempDir::new().unwrap();
    store_in(&dir).seed_if_empty().unwrap();

    let (store, problem) = PresetStore::open_or_recover(dir.path().join("presets.json")).unwrap();
    assert!(problem.is_none());
    assert_eq!(store.len(), 11);
    assert!(!dir.path().join("presets.json.corrupt").exists());
}

#[test]
fn test_failed_write_removes_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("presets.json");
    let store = PresetStore::open(&path).unwrap();

    // A directory in the way makes the final rename fail
    fs::create_dir(&path).unwrap();

    let err = store.create("Mine", &CurveId::Spring.curve()).unwrap_err();
    assert!(matches!(err, PlaygroundError::IOError(_)));
    assert!(!path.with_extension("json.tmp").exists());

    // The change is kept in memory
    assert_eq!(store.len(), 1);
}

#[test]
fn test_store_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("presets.json");
    let store = PresetStore::open(&path).unwrap();
    store.create("Mine", &CurveId::Spring.curve()).unwrap();
    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}
