mod common;

use common::{DONOR_CSV, Scratch, init_db, name_set, rp};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

fn draw_json(args: &[&str]) -> Value {
    let out = rp().args(args).assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).expect("draw --json prints JSON")
}

#[test]
fn test_init_creates_database() {
    let tmp = Scratch::new();
    let db_path = tmp.db();

    rp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_draw_two_winners_from_two_participants() {
    let tmp = Scratch::new();
    let db_path = tmp.db();
    init_db(&db_path);
    let csv = tmp.csv("name,tickets\nA,3\nB,1\n");

    let body = draw_json(&[
        "--db", &db_path, "draw", "--file", &csv, "--winners", "2", "--seed", "11", "--json",
    ]);

    let winners = body["winners"].as_array().unwrap();
    assert_eq!(winners.len(), 2);
    assert_eq!(
        name_set(winners.iter().map(|w| w["name"].as_str().unwrap())),
        name_set(["A", "B"])
    );
    assert_eq!(body["totalEntries"], 4);
    assert!(body["runId"].is_string());
}

#[test]
fn test_seeded_draw_is_reproducible_from_cli() {
    let tmp = Scratch::new();
    let csv = tmp.csv("name,tickets\nA,3\nB,1\nC,2\nD,5\nE,1\n");
    let args = [
        "draw", "--file", &csv, "--winners", "3", "--seed", "42", "--no-save", "--json",
    ];

    let names = |v: &Value| -> Vec<String> {
        v["winners"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["name"].as_str().unwrap().to_string())
            .collect()
    };

    let first = draw_json(&args);
    let second = draw_json(&args);
    assert_eq!(names(&first), names(&second));
    assert!(first["runId"].is_null());
}

#[test]
fn test_donor_export_draws_every_prize() {
    let tmp = Scratch::new();
    let csv = tmp.csv(DONOR_CSV);
    let body = draw_json(&["draw", "--file", &csv, "--seed", "3", "--no-save", "--json"]);

    assert_eq!(body["prizes"], serde_json::json!(["Bike", "Hamper"]));
    assert_eq!(body["totalEntries"], 7);

    let winners = body["winners"].as_array().unwrap();
    assert_eq!(winners.len(), 2);
    assert_eq!(winners[0]["prize"], "Bike");
    assert_eq!(winners[1]["prize"], "Hamper");
    assert_ne!(winners[0]["name"], winners[1]["name"]);
    assert!(winners.iter().all(|w| w["email"].is_string()));
}

#[test]
fn test_per_prize_draw_respects_prize_tickets() {
    let tmp = Scratch::new();
    let csv = tmp.csv("name,tickets,prize\nA,5,Bike\nB,1,Hamper\n");
    let body = draw_json(&[
        "draw", "--file", &csv, "--per-prize", "--seed", "5", "--no-save", "--json",
    ]);

    let got: Vec<(String, String)> = body["winners"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| {
            (
                w["prize"].as_str().unwrap().to_string(),
                w["name"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        got,
        vec![
            ("Bike".to_string(), "A".to_string()),
            ("Hamper".to_string(), "B".to_string())
        ]
    );
}

#[test]
fn test_explicit_prizes_and_counts() {
    let tmp = Scratch::new();
    let csv = tmp.csv("name\nA\nB\nC\nD\n");
    let body = draw_json(&[
        "draw", "--file", &csv, "--prize", "Car=1", "--prize", "Mug=2", "--seed", "8",
        "--no-save", "--json",
    ]);

    let prizes: Vec<_> = body["winners"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["prize"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(prizes, vec!["Car", "Mug", "Mug"]);
}

#[test]
fn test_invalid_prize_spec_fails() {
    let tmp = Scratch::new();
    let csv = tmp.csv("name\nA\n");
    rp().args(["draw", "--file", &csv, "--prize", "Car=lots", "--no-save"])
        .assert()
        .failure()
        .stderr(contains("Invalid prize specification"));
}

#[test]
fn test_empty_csv_draws_no_winners() {
    let tmp = Scratch::new();
    let csv = tmp.csv("name,tickets\n,\n");
    rp().args(["draw", "--file", &csv, "--no-save"])
        .assert()
        .success()
        .stdout(contains("No winners drawn"));

    let body = draw_json(&["draw", "--file", &csv, "--no-save", "--json"]);
    assert_eq!(body["winners"], serde_json::json!([]));
    assert_eq!(body["totalEntries"], 0);
}

#[test]
fn test_huge_ticket_count_fails_cleanly() {
    let tmp = Scratch::new();
    let csv = tmp.csv("name,tickets\nA,99999999999999999999\n");
    rp().args(["draw", "--file", &csv, "--no-save"])
        .assert()
        .failure()
        .stderr(contains("Ticket pool too large"));
}

#[test]
fn test_json_output_on_uninitialized_database() {
    let tmp = Scratch::new();
    let db_path = tmp.db();
    let csv = tmp.csv("name,tickets\nA,3\nB,1\n");

    // first command against a brand-new DB applies migrations; stdout must stay JSON
    let body = draw_json(&["--db", &db_path, "draw", "--file", &csv, "--seed", "2", "--json"]);
    assert!(body["runId"].is_string());

    let other = Scratch::new();
    let fresh_db = other.db();
    let out = rp()
        .args(["--db", &fresh_db, "runs", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let list: Value = serde_json::from_slice(&out).expect("runs --json prints JSON");
    assert_eq!(list["runs"], serde_json::json!([]));
}

#[test]
fn test_init_announces_migrations_once() {
    let tmp = Scratch::new();
    let db_path = tmp.db();

    rp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied"));

    rp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());
}

#[test]
fn test_runs_list_and_show() {
    let tmp = Scratch::new();
    let db_path = tmp.db();
    init_db(&db_path);
    let csv = tmp.csv("name,tickets\nA,3\nB,1\n");

    let body = draw_json(&["--db", &db_path, "draw", "--file", &csv, "--seed", "1", "--json"]);
    let run_id = body["runId"].as_str().unwrap().to_string();

    let out = rp()
        .args(["--db", &db_path, "runs", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let list: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(list["runs"][0]["runId"], run_id.as_str());
    assert_eq!(list["runs"][0]["totalEntries"], 4);

    rp().args(["--db", &db_path, "runs", "--id", &run_id])
        .assert()
        .success()
        .stdout(contains(run_id.as_str()));

    rp().args(["--db", &db_path, "runs", "--id", "does-not-exist"])
        .assert()
        .failure()
        .stderr(contains("Run not found"));
}

#[test]
fn test_export_winners_and_audit() {
    let tmp = Scratch::new();
    let db_path = tmp.db();
    init_db(&db_path);
    let csv = tmp.csv(DONOR_CSV);

    let body = draw_json(&["--db", &db_path, "draw", "--file", &csv, "--seed", "9", "--json"]);
    let run_id = body["runId"].as_str().unwrap().to_string();

    let winners_out = tmp.out("export_run_winners", "csv");
    rp().args([
        "--db", &db_path, "export", "--run", &run_id, "--what", "winners", "--format", "csv",
        "--file", &winners_out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&winners_out).expect("read winners csv");
    assert!(content.starts_with("Prize,Winner,Email,Timestamp"));
    assert_eq!(content.lines().count(), 3);

    let audit_out = tmp.out("export_run_audit", "json");
    rp().args([
        "--db", &db_path, "export", "--run", &run_id, "--what", "audit", "--format", "json",
        "--file", &audit_out,
    ])
    .assert()
    .success();

    let audit: Value = serde_json::from_str(&fs::read_to_string(&audit_out).unwrap()).unwrap();
    let rows = audit.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["Prize"], "Bike");
    assert_eq!(rows[0]["Person"], "Alice Smith");
    assert_eq!(rows[0]["Ticket Count"], 3);

    rp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("draw"))
        .stdout(contains("export"));
}

#[test]
fn test_export_requires_absolute_path() {
    let tmp = Scratch::new();
    let db_path = tmp.db();
    init_db(&db_path);

    rp().args([
        "--db", &db_path, "export", "--run", "x", "--file", "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("must be absolute"));
}

#[test]
fn test_env_command_resolves_preview() {
    let out = rp()
        .env_remove("DEPLOY_ENV")
        .env_remove("IS_EPHEMERAL")
        .args([
            "env",
            "--deploy-env",
            "prod",
            "--ephemeral",
            "--env-name",
            "pr42",
            "--hosted-zone",
            "dev.example.com",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let body: Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(body["environment"], "dev");
    assert_eq!(body["frontendUrl"], "https://pr42.dev.example.com");
    assert_eq!(body["apiUrl"], "https://pr42.api.dev.example.com");
}

#[test]
fn test_env_command_reads_deploy_env_variable() {
    rp().env("DEPLOY_ENV", "production")
        .env_remove("IS_EPHEMERAL")
        .args(["env", "--hosted-zone", "example.com"])
        .assert()
        .success()
        .stdout(contains("Environment  : prod"))
        .stdout(contains("Frontend URL : https://example.com"));
}
