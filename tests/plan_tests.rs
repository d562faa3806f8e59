mod common;
use common::{rma, setup_test_config};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_plan_after_meal_default_meals() {
    let cfg = setup_test_config("plan_after_meal");

    rma()
        .args(["--config", &cfg, "plan", "--timing", "after-meal"])
        .assert()
        .success()
        .stdout(contains("08:30  아침 식후"))
        .stdout(contains("12:30  점심 식후"))
        .stdout(contains("19:30  저녁 식후"));
}

#[test]
fn test_plan_accepts_korean_label_and_custom_meals() {
    let cfg = setup_test_config("plan_korean_label");

    rma()
        .args([
            "--config",
            &cfg,
            "plan",
            "--timing",
            "식전",
            "--times",
            "2",
            "--breakfast",
            "07:00",
        ])
        .assert()
        .success()
        .stdout(contains("06:30  아침 식전"))
        .stdout(contains("11:30  점심 식전"))
        .stdout(contains("18:30").not());
}

#[test]
fn test_plan_before_sleep_single_slot() {
    let cfg = setup_test_config("plan_before_sleep");

    let out = rma()
        .args([
            "--config",
            &cfg,
            "plan",
            "--timing",
            "before-sleep",
            "--times",
            "1",
        ])
        .output()
        .expect("run plan");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), "21:00  취침 전");
}

#[test]
fn test_plan_uses_meals_from_config() {
    let cfg = setup_test_config("plan_config_meals");
    std::fs::write(&cfg, "meals:\n  dinner: \"18:00\"\n").expect("write config");

    rma()
        .args(["--config", &cfg, "plan", "--timing", "between-meals"])
        .assert()
        .success()
        .stdout(contains("10:00  아침 식간"))
        .stdout(contains("15:00  점심 식간"))
        .stdout(contains("19:30  저녁 식간"));
}

#[test]
fn test_plan_rejects_unknown_timing_name() {
    let cfg = setup_test_config("plan_bad_timing");

    rma()
        .args(["--config", &cfg, "plan", "--timing", "after-lunch"])
        .assert()
        .failure()
        .stderr(contains("Invalid timing category: after-lunch"));
}

#[test]
fn test_plan_rejects_bad_meal_time() {
    let cfg = setup_test_config("plan_bad_meal");

    rma()
        .args(["--config", &cfg, "plan", "--timing", "fasting", "--lunch", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}
