use assert_cmd::Command;
use predicates::prelude::*;

fn platescan() -> Command {
    let mut cmd = Command::cargo_bin("platescan").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

#[test]
fn test_demo_run() {
    platescan()
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Input text ---\nTest run: ВК0001АО"))
        .stdout(predicate::str::contains(
            "Found 2 region plates:\n\t- ВК0001АО\n\t- РК1234ВС\n",
        ))
        .stdout(predicate::str::contains("Region plate: 2 matches"))
        .stdout(predicate::str::contains(
            "Date (DD.MM.YYYY): 2 matches\n\tFirst 2 examples: 26.11.2025, 01.01.2000",
        ))
        .stdout(predicate::str::contains(
            "IP address: 2 matches\n\tFirst 2 examples: 192.168.1.10, 203.0.113.45",
        ))
        .stdout(predicate::str::ends_with("Done.\n"));
}

#[test]
fn test_custom_text_and_limit() {
    platescan()
        .args(["--text", "ip 192.168.1.10 and 999.999.999.999", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No region plates found."))
        .stdout(predicate::str::contains(
            "IP address: 2 matches\n\tFirst 1 examples: 192.168.1.10\n",
        ));
}

#[test]
fn test_fold_lookalikes() {
    platescan()
        .args(["--text", "РК1234ВС and BK5555AA", "--fold-lookalikes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 2 region plates:\n\t- РК1234ВС\n\t- BK5555AA\n",
        ));
}

#[test]
fn test_region_override() {
    platescan()
        .args(["--text", "ВК0001АО ignored АА9999КМ", "--region", "АА"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 1 region plates:\n\t- АА9999КМ\n",
        ));
}

#[test]
fn test_timeout_is_recovered() {
    platescan()
        .args(["--timeout-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plate search timed out"))
        .stdout(predicate::str::contains("No region plates found."))
        .stdout(predicate::str::contains(
            "Region plate: 0 matches\n\tFirst 1 examples: regex execution error",
        ));
}

#[test]
fn test_bad_region_code_rejected() {
    platescan()
        .args(["--region", "ABC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly two letters"));
}
