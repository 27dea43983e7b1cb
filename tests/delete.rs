use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn agenda(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rusty-agenda").unwrap();
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn deleting_contacts() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("contacts.db");

    // Attempt to delete non existing contact
    agenda(&db)
        .args(["delete", "--id", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Contact 9999 Not found"));

    agenda(&db)
        .args([
            "add",
            "--name",
            "Patricia",
            "--phone",
            "08066809241",
            "--email",
            "lmartinez@bender-patterson.net",
        ])
        .assert()
        .success();

    agenda(&db)
        .args([
            "add",
            "--name",
            "Diane",
            "--phone",
            "08064879199",
            "--email",
            "grahammatthew@gmail.com",
        ])
        .assert()
        .success();

    agenda(&db)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully"));

    agenda(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Diane"))
        .stdout(predicate::str::contains("Patricia").not());

    // Deleting twice reports the missing row
    agenda(&db)
        .args(["delete", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact 1 Not found"));
}

#[test]
fn deleting_with_invalid_id() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("contacts.db");

    agenda(&db)
        .args(["delete", "--id", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Validation failed: contact id must be greater than zero, got 0",
        ));

    agenda(&db)
        .args(["delete", "--id", "-4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("got -4"));
}
