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
fn editing_contacts() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("contacts.db");

    agenda(&db).arg("seed").assert().success();

    agenda(&db)
        .args([
            "edit",
            "--id",
            "2",
            "--new-name",
            "Maria S. Santos",
            "--new-email",
            "maria.santos@email.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully"));

    agenda(&db)
        .args(["show", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Id: 2\nName: Maria S. Santos\nPhone: (11) 88888-8888\nEmail: maria.santos@email.com",
        ));
}

#[test]
fn editing_rejects_invalid_fields() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("contacts.db");

    agenda(&db).arg("seed").assert().success();

    agenda(&db)
        .args(["edit", "--id", "1", "--new-phone", "call me"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed: phone:"));

    agenda(&db)
        .args(["show", "--id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone: (11) 99999-9999"));
}

#[test]
fn editing_missing_contact() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("contacts.db");

    agenda(&db)
        .args(["edit", "--id", "9999", "--new-name", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact 9999 Not found"));

    agenda(&db)
        .args(["show", "--id", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact 9999 Not found"));
}
