use std::{fs, sync::Arc};

use formtree::{
    draft::{DRAFT_FILE, DraftStore, FileDraftStore, InMemoryDraftStore, TIMESTAMP_FILE},
    templates::example_form,
};

use crate::helpers::*;

fn stores(dir: &std::path::Path) -> Vec<Box<dyn DraftStore>> {
    vec![
        Box::new(InMemoryDraftStore::with_clock(Arc::new(StepClock::starting_at(
            1_704_067_200_000,
        )))),
        Box::new(
            FileDraftStore::new(dir)
                .unwrap()
                .with_clock(Arc::new(StepClock::starting_at(1_704_067_200_000))),
        ),
    ]
}

#[test]
fn test_store_contract() {
    let tmp = tempfile::tempdir().unwrap();
    for store in stores(tmp.path()) {
        assert!(!store.has_draft());
        assert_eq!(store.load(), None);

        store.save(&example_form());
        assert!(store.has_draft());
        assert_eq!(store.load(), Some(example_form()));
        let first = store.last_saved().unwrap();

        store.save(&service_config());
        assert_eq!(store.load(), Some(service_config()));
        let second = store.last_saved().unwrap();
        assert!(second > first);

        store.clear();
        assert!(!store.has_draft());
        assert_eq!(store.last_saved(), None);
    }
}

#[test]
fn test_file_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(tmp.path()).unwrap();
    store.save(&service_config());

    let json = fs::read_to_string(tmp.path().join(DRAFT_FILE)).unwrap();
    let parsed: Vec<formtree::Field> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, service_config());

    let stamp = fs::read_to_string(tmp.path().join(TIMESTAMP_FILE)).unwrap();
    assert!(stamp.parse::<i64>().is_ok());
}

#[test]
fn test_failures_are_silent() {
    let tmp = tempfile::tempdir().unwrap();
    let store = FileDraftStore::new(tmp.path()).unwrap();

    // A directory where the draft file should be makes reads and writes fail
    fs::create_dir(tmp.path().join(DRAFT_FILE)).unwrap();
    store.save(&service_config());
    assert_eq!(store.load(), None);
    assert!(store.try_save(&service_config()).unwrap_err().is_io_error());
}
