mod common;
use common::{rma, setup_test_config, temp_out, write_temp};
use predicates::str::contains;
use std::fs;

const LEXICON: &str = "# canonical | aliases\n타이레놀 | 타이레놀정\n이지엔6 이브 | 이브A정 | 이브\n";

#[test]
fn test_scan_matches_lexicon_with_strength() {
    let cfg = setup_test_config("scan_basic");
    let lexicon = write_temp("scan_basic_lexicon.txt", LEXICON);
    let input = write_temp(
        "scan_basic.json",
        r#"{ "texts": ["약국", "타이레놀", "500mg", "영수증"], "scores": [0.9, 0.95, 0.9, 0.9] }"#,
    );

    rma()
        .args([
            "--config", &cfg, "scan", "--input", &input, "--lexicon", &lexicon,
        ])
        .assert()
        .success()
        .stdout(contains("\"name\": \"타이레놀 500mg\""));
}

#[test]
fn test_scan_reports_candidate_scores() {
    let cfg = setup_test_config("scan_candidates");
    let lexicon = write_temp("scan_candidates_lexicon.txt", LEXICON);
    let input = write_temp(
        "scan_candidates.json",
        r#"{ "texts": ["타이레놀", "500mg", "이브"] }"#,
    );
    let out = temp_out("scan_candidates", "json");

    rma()
        .args([
            "--config", &cfg, "scan", "--input", &input, "--lexicon", &lexicon, "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let candidates = doc["candidates"].as_array().expect("candidates array");
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["canonical"], "타이레놀");
    assert_eq!(candidates[0]["matched_line"], "타이레놀");
    assert_eq!(candidates[0]["line_index"], 0);
    let score = candidates[0]["score"].as_f64().expect("numeric score");
    assert!((score - 0.9).abs() < 1e-9);
    assert_eq!(candidates[1]["canonical"], "이지엔6 이브");
    assert_eq!(doc["medicines"][0]["name"], "타이레놀 500mg");
}

#[test]
fn test_scan_low_confidence_lines_are_dropped() {
    let cfg = setup_test_config("scan_low_score");
    let lexicon = write_temp("scan_low_score_lexicon.txt", LEXICON);
    let input = write_temp(
        "scan_low_score.json",
        r#"{ "texts": ["타이레놀"], "scores": [0.1] }"#,
    );

    rma()
        .args([
            "--config", &cfg, "scan", "--input", &input, "--lexicon", &lexicon,
        ])
        .assert()
        .success()
        .stdout(contains("약 정보 없음"));
}

#[test]
fn test_scan_lexicon_from_config_to_file() {
    let lexicon = write_temp("scan_cfg_lexicon.txt", LEXICON);
    let cfg = setup_test_config("scan_cfg");
    fs::write(&cfg, format!("lexicon: {lexicon:?}\n")).expect("write config");
    let input = write_temp("scan_cfg.json", r#"{ "texts": ["이브"] }"#);
    let out = temp_out("scan_cfg", "json");

    rma()
        .args(["--config", &cfg, "scan", "--input", &input, "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(doc["medicines"][0]["name"], "이지엔6 이브");
    assert_eq!(doc["medicines"][0]["timing"], "unknown");
    assert_eq!(doc["candidates"][0]["matched_line"], "이브");
}

#[test]
fn test_scan_without_lexicon_fails() {
    let cfg = setup_test_config("scan_no_lexicon");
    let input = write_temp("scan_no_lexicon.json", r#"{ "texts": ["이브"] }"#);

    rma()
        .args(["--config", &cfg, "scan", "--input", &input])
        .assert()
        .failure()
        .stderr(contains("no lexicon given"));
}
