//! Validation pipeline tests - schema gate plus invariant gate

mod common;

use common::{create_classified_incident, create_test_incident, iris, setup_test_project};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_validate_empty_project_passes() {
    let tmp = setup_test_project();

    iris()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s)"));
}

#[test]
fn test_validate_fresh_incident_warns_unclassified() {
    let tmp = setup_test_project();
    create_test_incident(&tmp, "Acme", &[]);

    iris()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("warning"))
        .stdout(predicate::str::contains("no stored classification"));
}

#[test]
fn test_validate_strict_fails_on_unclassified() {
    let tmp = setup_test_project();
    create_test_incident(&tmp, "Acme", &[]);

    iris()
        .current_dir(tmp.path())
        .args(["validate", "--strict"])
        .assert()
        .failure();
}

#[test]
fn test_validate_strict_passes_after_classify_write() {
    let tmp = setup_test_project();
    create_classified_incident(&tmp, "Acme", &[]);

    iris()
        .current_dir(tmp.path())
        .args(["validate", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 passed"));
}

#[test]
fn test_validate_rejects_negative_count_in_file() {
    let tmp = setup_test_project();
    let id = create_test_incident(&tmp, "Acme", &[]);
    let path = tmp.path().join(format!("incidents/{}.iris.yaml", id));

    let content = fs::read_to_string(&path).unwrap();
    fs::write(&path, content.replace("deaths: 0", "deaths: -1")).unwrap();

    iris()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("deaths"));
}

#[test]
fn test_validate_rejects_unknown_enum_value() {
    let tmp = setup_test_project();
    let id = create_test_incident(&tmp, "Acme", &[]);
    let path = tmp.path().join(format!("incidents/{}.iris.yaml", id));

    let content = fs::read_to_string(&path).unwrap();
    fs::write(
        &path,
        content.replace("homes_damaged: none", "homes_damaged: several"),
    )
    .unwrap();

    iris()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("error"));
}

#[test]
fn test_validate_rejects_unknown_top_level_key() {
    let tmp = setup_test_project();
    let id = create_test_incident(&tmp, "Acme", &[]);
    let path = tmp.path().join(format!("incidents/{}.iris.yaml", id));

    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("severity_override: catastrophic\n");
    fs::write(&path, content).unwrap();

    iris()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure();
}

#[test]
fn test_validate_rejects_garbage_yaml() {
    let tmp = setup_test_project();
    fs::write(
        tmp.path().join("incidents/INC-01ARZ3NDEKTSV4RRFFQ69G5FAV.iris.yaml"),
        "{ not closed",
    )
    .unwrap();

    iris()
        .current_dir(tmp.path())
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("error"));
}

#[test]
fn test_validate_keep_going_checks_all_files() {
    let tmp = setup_test_project();
    fs::write(
        tmp.path().join("incidents/INC-01ARZ3NDEKTSV4RRFFQ69G5FAV.iris.yaml"),
        "{ not closed",
    )
    .unwrap();
    create_classified_incident(&tmp, "Good Site", &[]);

    iris()
        .current_dir(tmp.path())
        .args(["validate", "--keep-going"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("2 checked"));
}

#[test]
fn test_validate_explicit_path() {
    let tmp = setup_test_project();
    let id = create_classified_incident(&tmp, "Acme", &[]);

    iris()
        .current_dir(tmp.path())
        .args(["validate", &format!("incidents/{}.iris.yaml", id)])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 passed"));
}
