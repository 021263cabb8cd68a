//! End-to-end tests of the datecalc binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn datecalc() -> Command {
    let mut cmd = Command::cargo_bin("datecalc").unwrap();
    cmd.env_remove("DATECALC_BASIS")
        .env_remove("DATECALC_TODAY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_result_on_stdout() {
    datecalc()
        .args(["days-in-month", "2", "2024"])
        .assert()
        .success()
        .stdout("29\n");
}

#[test]
fn schedule_prints_one_date_per_line() {
    datecalc()
        .args(["schedule", "01-01-2024", "10-01-2024", "-w", "1", "-o", "1"])
        .assert()
        .success()
        .stdout("01-01-2024\n03-01-2024\n05-01-2024\n07-01-2024\n09-01-2024\n");
}

#[test]
fn empty_schedule_prints_nothing() {
    datecalc()
        .args(["schedule", "10-01-2024", "01-01-2024", "-w", "1", "-o", "1"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn invalid_month_exits_with_error() {
    datecalc()
        .args(["weekends", "13", "2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("datecalc: invalid month: 13"));
}

#[test]
fn invalid_date_exits_with_error() {
    datecalc()
        .args(["days-between", "2024-02-01", "next week"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid date: next week"));
}

#[test]
fn today_can_be_pinned() {
    datecalc()
        .env("DATECALC_TODAY", "2024-02-03")
        .arg("next-friday")
        .assert()
        .success()
        .stdout("2024-02-09\n");
}

#[test]
fn pinned_today_must_be_a_date() {
    datecalc()
        .env("DATECALC_TODAY", "someday")
        .arg("quarter")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date: someday"));
}

#[test]
fn basis_from_environment() {
    datecalc()
        .env("DATECALC_BASIS", "utc")
        .args(["day-name", "01 Jan 1970 00:00:00 UTC"])
        .assert()
        .success()
        .stdout("Thursday\n");
}

#[test]
fn local_basis_reads_fields_in_local_zone() {
    // 20:00 UTC on Tuesday is 05:00 Wednesday in Tokyo
    datecalc()
        .env("TZ", "Asia/Tokyo")
        .args(["--basis", "local", "day-name", "2024-01-30T20:00:00Z"])
        .assert()
        .success()
        .stdout("Wednesday\n");

    datecalc()
        .env("TZ", "Asia/Tokyo")
        .args(["day-name", "2024-01-30T20:00:00Z"])
        .assert()
        .success()
        .stdout("Tuesday\n");
}

#[test]
fn local_basis_from_environment() {
    datecalc()
        .env("TZ", "Asia/Tokyo")
        .env("DATECALC_BASIS", "local")
        .args(["time", "2024-01-30T20:00:00Z"])
        .assert()
        .success()
        .stdout("05:00:00\n");
}

#[test]
fn local_basis_crosses_week_boundary() {
    // Sunday 2024-01-07 20:00 UTC is Monday 2024-01-08 in Tokyo
    datecalc()
        .env("TZ", "Asia/Tokyo")
        .args(["--basis", "local", "week-number", "2024-01-07T20:00:00Z"])
        .assert()
        .success()
        .stdout("2\n");

    datecalc()
        .env("TZ", "Asia/Tokyo")
        .args(["week-number", "2024-01-07T20:00:00Z"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn local_basis_crosses_quarter_boundary() {
    // March 31 20:00 UTC is already April 1 in Tokyo
    datecalc()
        .env("TZ", "Asia/Tokyo")
        .args(["--basis", "local", "quarter", "2024-03-31T20:00:00Z"])
        .assert()
        .success()
        .stdout("2\n");

    datecalc()
        .env("TZ", "Asia/Tokyo")
        .args(["--basis", "utc", "quarter", "2024-03-31T20:00:00Z"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn debug_logs_go_to_stderr() {
    datecalc()
        .args(["-vv", "schedule", "01-01-2024", "03-01-2024", "-w", "1", "-o", "1"])
        .assert()
        .success()
        .stdout("01-01-2024\n03-01-2024\n")
        .stderr(predicate::str::contains("generated schedule"));
}

#[test]
fn help_lists_subcommands() {
    datecalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("friday13"))
        .stdout(predicate::str::contains("schedule"));
}
