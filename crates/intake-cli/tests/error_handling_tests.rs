//! Tests for error handling, exit codes, and suggestions.

use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;

fn intake() -> Command {
    let mut cmd = Command::cargo_bin("intake").unwrap();
    cmd.arg("--config").arg("/nonexistent/intake/config.toml");
    cmd
}

fn in_window_date() -> String {
    (Local::now().date_naive() + Duration::days(7)).to_string()
}

#[test]
fn rejected_booking_lists_every_failing_field() {
    // name missing, email malformed; date and time missing too.
    let assert = intake()
        .args(["book", "--no-input", "--email", "not-an-email"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Booking rejected"))
        .stderr(predicate::str::contains("name"))
        .stderr(predicate::str::contains("email"))
        .stderr(predicate::str::contains("this field is required"))
        .stderr(predicate::str::contains("value has an invalid format"));

    // No confirmation on stdout.
    assert.stdout(predicate::str::contains("Booking Confirmed").not());
}

#[test]
fn optional_phone_is_not_reported() {
    intake()
        .args(["book", "--no-input", "--email", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone").not());
}

#[test]
fn out_of_window_date_fails_with_no_input() {
    let far_future = (Local::now().date_naive() + Duration::days(365)).to_string();
    intake()
        .args([
            "book",
            "--no-input",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--service",
            "fitness",
            "--date",
            &far_future,
            "--time",
            "10:00",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("outside the booking window"))
        .stderr(predicate::str::contains("intake slots"));
}

#[test]
fn booking_window_edges_are_bookable() {
    let today = Local::now().date_naive().to_string();
    intake()
        .args([
            "book",
            "--no-input",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--service",
            "fitness",
            "--date",
            &today,
            "--time",
            "09:00",
        ])
        .assert()
        .success();
}

#[test]
fn unknown_course_is_not_found() {
    intake()
        .args(["courses", "--show", "Underwater Basket Weaving"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Underwater Basket Weaving"));
}

#[test]
fn unknown_config_key_is_a_config_error() {
    intake()
        .args(["config", "get", "does.not.exist"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn errors_come_with_suggestions() {
    intake()
        .args(["book", "--no-input", "--email", "not-an-email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("Correct the fields above"));
}

#[test]
fn valid_booking_reference_is_shown() {
    intake()
        .args([
            "book",
            "--no-input",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--service",
            "wellness",
            "--date",
            &in_window_date(),
            "--time",
            "14:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference:"));
}
