//! Ingest Integration Tests
//!
//! Round-trips the synthetic basin through an on-disk SQLite database and
//! the normal load path, then exercises the boundary-file override.

use std::io::Write;

use wellscope::ingest::{self, synthetic, LoadOptions};
use wellscope::TrajectoryKind;

fn write_demo_db(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let tables = synthetic::generate(&synthetic::SyntheticConfig::default());
    let path = dir.path().join("wells.db");
    synthetic::write_database(&tables, &path).expect("demo database writes");
    path
}

#[test]
fn load_dataset_from_disk_matches_in_memory_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = write_demo_db(&dir);

    let dataset = ingest::load_dataset(&db_path, None, LoadOptions::default())
        .expect("dataset loads from disk");

    assert_eq!(dataset.wells.len(), 40);
    assert_eq!(dataset.plats.len(), 36);
    assert_eq!(dataset.fields.len(), 2);
    assert_eq!(dataset.board_matters.len(), 2);
    assert!(!dataset.production.is_empty());

    // Fingerprint is the md5 of the file, 32 hex chars
    assert_eq!(dataset.fingerprint.len(), 32);
    assert!(dataset.fingerprint.chars().all(|c| c.is_ascii_hexdigit()));

    // Same bytes, same fingerprint
    let again = ingest::load_dataset(&db_path, None, LoadOptions::default()).expect("reload");
    assert_eq!(dataset.fingerprint, again.fingerprint);
}

#[test]
fn missing_database_is_a_clear_error() {
    let err = ingest::load_dataset(
        std::path::Path::new("/nonexistent/wells.db"),
        None,
        LoadOptions::default(),
    )
    .expect_err("missing file must fail");
    assert!(err.to_string().contains("not found"), "got: {err}");
}

#[test]
fn trajectories_are_depth_sorted_and_jittered() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = write_demo_db(&dir);
    let dataset =
        ingest::load_dataset(&db_path, None, LoadOptions::default()).expect("dataset loads");

    let mut saw_vertical = false;
    for trajectories in dataset.trajectories.values() {
        for traj in trajectories {
            let depths: Vec<f64> = traj.stations.iter().map(|s| s.md).collect();
            let mut sorted = depths.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(depths, sorted, "stations sorted by md");

            if traj.kind == TrajectoryKind::Vertical && traj.stations.len() > 1 {
                saw_vertical = true;
                // Jitter separates consecutive stations
                assert!(traj.stations[1].y > traj.stations[0].y);
            }
        }
    }
    assert!(saw_vertical, "basin contains vertical wells");
}

#[test]
fn boundary_file_overrides_field_layer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = write_demo_db(&dir);

    let kml_path = dir.path().join("fields.kml");
    let mut file = std::fs::File::create(&kml_path).expect("create kml");
    write!(
        file,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2"><Document>
  <Placemark>
    <name>REPLACEMENT FIELD</name>
    <Polygon><outerBoundaryIs><LinearRing><coordinates>
      -109.60,40.20,0 -109.50,40.20,0 -109.50,40.30,0 -109.60,40.30,0 -109.60,40.20,0
    </coordinates></LinearRing></outerBoundaryIs></Polygon>
  </Placemark>
</Document></kml>"#
    )
    .expect("write kml");

    let dataset = ingest::load_dataset(&db_path, Some(&kml_path), LoadOptions::default())
        .expect("dataset loads with boundary override");

    assert_eq!(dataset.fields.len(), 1);
    assert_eq!(dataset.fields[0].name, "REPLACEMENT FIELD");
    // A single field has no adjacency
    assert!(dataset.field_adjacency.is_empty());
}

#[test]
fn broken_boundary_file_keeps_store_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = write_demo_db(&dir);

    let kml_path = dir.path().join("broken.kml");
    std::fs::write(&kml_path, "<kml><Placemark><name>X</name><coordinates>garbage</coordinates></Placemark></kml>")
        .expect("write kml");

    let dataset = ingest::load_dataset(&db_path, Some(&kml_path), LoadOptions::default())
        .expect("load succeeds despite broken boundary file");
    assert_eq!(dataset.fields.len(), 2, "store boundaries kept");
}
