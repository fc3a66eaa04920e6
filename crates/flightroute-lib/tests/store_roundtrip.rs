use std::fs;

use flightroute_lib::{Error, GraphStore, RouteMap};
use tempfile::tempdir;

fn sample_map() -> RouteMap {
    let mut map = RouteMap::default();
    map.insert_airport("Oslo");
    map.insert_airport("Riga");
    map.insert_airport("Vilnius");
    map.insert_route("Oslo", "Riga", 840);
    map.insert_route("Riga", "Vilnius", 260);
    map
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().expect("create temp dir");
    let store = GraphStore::new(dir.path().join("routes.json"));
    let map = sample_map();

    store.save(&map).expect("save succeeds");
    let loaded = store.load().expect("load succeeds");

    assert_eq!(loaded, map);
}

#[test]
fn missing_file_loads_empty_map() {
    let dir = tempdir().expect("create temp dir");
    let store = GraphStore::new(dir.path().join("routes.json"));

    let loaded = store.load().expect("missing file is not an error");
    assert!(loaded.is_empty());
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempdir().expect("create temp dir");
    let store = GraphStore::new(dir.path().join("nested/data/routes.json"));

    store.save(&sample_map()).expect("save creates directories");
    assert!(store.path().exists());
}

#[test]
fn save_overwrites_previous_document() {
    let dir = tempdir().expect("create temp dir");
    let store = GraphStore::new(dir.path().join("routes.json"));

    store.save(&sample_map()).expect("first save");
    let mut smaller = RouteMap::default();
    smaller.insert_airport("Lima");
    store.save(&smaller).expect("second save");

    assert_eq!(store.load().expect("load succeeds"), smaller);
}

#[test]
fn persisted_document_is_a_nested_name_mapping() {
    let dir = tempdir().expect("create temp dir");
    let store = GraphStore::new(dir.path().join("routes.json"));
    store.save(&sample_map()).expect("save succeeds");

    let raw = fs::read_to_string(store.path()).expect("file readable");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid JSON");

    assert_eq!(value["Oslo"]["Riga"], 840);
    assert_eq!(value["Riga"]["Oslo"], 840);
    assert_eq!(value["Vilnius"]["Riga"], 260);
}

#[test]
fn malformed_json_reports_storage_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("routes.json");
    fs::write(&path, "{not valid json").expect("write garbage");

    let err = GraphStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::MalformedStore { .. }));
}

#[test]
fn wrong_shape_reports_storage_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("routes.json");
    fs::write(&path, r#"{"Oslo": [1, 2, 3]}"#).expect("write wrong shape");

    let err = GraphStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::MalformedStore { .. }));
}

#[test]
fn dangling_neighbour_reports_storage_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("routes.json");
    fs::write(&path, r#"{"Oslo": {"Riga": 840}}"#).expect("write dangling");

    let err = GraphStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::MalformedStore { .. }));
}

#[test]
fn asymmetric_document_reports_storage_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("routes.json");
    fs::write(
        &path,
        r#"{"Oslo": {"Riga": 840}, "Riga": {"Oslo": 900}}"#,
    )
    .expect("write asymmetric");

    let err = GraphStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::MalformedStore { .. }));
}

#[test]
fn self_loop_document_reports_storage_error() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("routes.json");
    fs::write(&path, r#"{"Oslo": {"Oslo": 1}}"#).expect("write self loop");

    let err = GraphStore::new(&path).load().unwrap_err();
    assert!(matches!(err, Error::MalformedStore { .. }));
}
