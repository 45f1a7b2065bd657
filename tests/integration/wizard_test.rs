//! Capture wizard workflow tests
//!
//! Drive `vcv wizard` through stdin: capture -> navigate -> grade -> reset.

use predicates::prelude::*;
use tempfile::TempDir;

use super::{vcv, write_captures};

#[test]
fn test_wizard_full_capture_and_grade() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .arg("wizard")
        .write_stdin(
            "capture front_top.jpg\n\
             capture back-top.png\n\
             capture front_angle.jpeg\n\
             grade\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("GaaS - Grading as a Service (Demo)"))
        .stdout(predicate::str::contains("Now on Step 2: Back (Top)"))
        .stdout(predicate::str::contains("Now on Step 4: Review"))
        .stdout(predicate::str::contains("Likely PSA 8 (model estimate ~8.5)"));
}

#[test]
fn test_wizard_named_slot_and_jump() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .arg("wizard")
        .write_stdin("step front_angle\ncapture front_angle front_angle.jpeg\nback\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Captured Front (angled). Now on Step 4: Review"))
        .stdout(predicate::str::contains("Now on Step 3: Front (Angled)"))
        .stdout(predicate::str::contains("Not captured yet"));
}

#[test]
fn test_wizard_bad_lines_do_not_end_session() {
    let temp = TempDir::new().unwrap();

    vcv(temp.path())
        .arg("wizard")
        .write_stdin("dance\ncapture missing.jpg\ngrade\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: dance"))
        .stdout(predicate::str::contains("image not found"))
        .stdout(predicate::str::contains("Incomplete capture"));
}

#[test]
fn test_wizard_reset() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .arg("wizard")
        .write_stdin("capture front_top.jpg\nreset\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session reset. Now on Step 1: Front (Top)"));
}

#[test]
fn test_wizard_json_lines() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .args(["--json", "wizard"])
        .write_stdin("capture front_top.jpg\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("GaaS").not());
}

#[test]
fn test_wizard_survives_non_utf8_line() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .arg("wizard")
        .write_stdin(b"capture front_top.jpg\ncapture \xFF\xFE.jpg\nstatus\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("not valid UTF-8"))
        .stdout(predicate::str::contains("front_top.jpg (7 bytes)"))
        .stdout(predicate::str::contains("Step 1: Front (Top) (done)"));
}

#[test]
fn test_wizard_status_reports_readiness() {
    let temp = TempDir::new().unwrap();
    write_captures(temp.path());

    vcv(temp.path())
        .arg("wizard")
        .write_stdin("capture front_top.jpg\ncapture back-top.png\ncapture front_angle.jpeg\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All captures in place"));
}
