use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "tacto";

#[test]
fn simulate_tic_tac_toe() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args([
            "--variant",
            "tic-tac-toe",
            "--games",
            "200",
            "--bins",
            "4",
            "--seed",
            "7",
        ])
        .assert()
        .success()
        .stdout(
            contains("Tacto")
                .and(contains("Games: 200"))
                .and(contains("Learned shapes:")),
        ),
    );
}

#[test]
fn print_database() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args([
            "--variant",
            "big-tac-toe",
            "--games",
            "50",
            "--seed",
            "1",
            "--print-database",
            "--print-history",
        ])
        .assert()
        .success()
        .stdout(contains("X-").and(contains("Games: 50"))),
    );
}

#[test]
fn same_seed_same_output() {
    let run = || {
        Command::cargo_bin(BINARY_NAME)
            .expect("Binary should be built")
            .args(["--variant", "tic-tac-toe", "--games", "100", "--seed", "3"])
            .output()
            .expect("binary runs")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn unknown_variant() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.args(["--variant", "connect-four"])
            .assert()
            .failure()
            .stderr(contains("connect-four")),
    );
}
