//! Integration tests for the `gr` CLI binary.
//!
//! Argument parsing, help output, completions, offline query encoding, and
//! config handling run without network access. Request tests point the
//! hidden `--base-url` at a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `gr` binary with env isolation.
///
/// Clears all `GETRESPONSE_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn gr_cmd() -> assert_cmd::Command {
    gr_cmd_with_home(Path::new("/tmp/gr-cli-test-nonexistent"))
}

fn gr_cmd_with_home(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gr");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("GETRESPONSE_PROFILE")
        .env_remove("GETRESPONSE_ACCOUNT_TYPE")
        .env_remove("GETRESPONSE_API_KEY")
        .env_remove("GETRESPONSE_REGION")
        .env_remove("GETRESPONSE_DOMAIN")
        .env_remove("GETRESPONSE_BASE_URL")
        .env_remove("GETRESPONSE_OUTPUT")
        .env_remove("GETRESPONSE_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run `gr` off the async runtime so the mock server keeps serving.
async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let base_url = format!("{}/v3", server.uri());
    let args: Vec<String> = args.iter().map(|a| (*a).to_owned()).collect();
    tokio::task::spawn_blocking(move || {
        gr_cmd()
            .args(&args)
            .args(["--base-url", &base_url, "--api-key", "test-key"])
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = gr_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    gr_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("GetResponse")
            .and(predicate::str::contains("get"))
            .and(predicate::str::contains("post"))
            .and(predicate::str::contains("encode")),
    );
}

#[test]
fn test_version_flag() {
    gr_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gr"));
}

#[test]
fn test_invalid_subcommand() {
    let output = gr_cmd().arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized subcommand"),
        "Expected clap error in output:\n{text}"
    );
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    gr_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    gr_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    gr_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

// ── Offline encoding ────────────────────────────────────────────────

#[test]
fn test_encode_builds_query_string() {
    gr_cmd()
        .args([
            "encode",
            "-Q",
            "createdOn.from=2018-01-01",
            "-Q",
            "name=a b",
            "-S",
            "createdOn=desc",
            "--per-page",
            "10",
        ])
        .assert()
        .success()
        .stdout(
            "?query[createdOn][from]=2018-01-01&query[name]=a%20b\
             &sort[createdOn]=desc&perPage=10&\n",
        );
}

#[test]
fn test_encode_raw_query_gets_question_mark() {
    gr_cmd()
        .args(["encode", "--raw-query", "perPage=5"])
        .assert()
        .success()
        .stdout("?perPage=5\n");
}

#[test]
fn test_encode_rejects_malformed_pair() {
    let output = gr_cmd().args(["encode", "-Q", "novalue"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("KEY=VALUE"));
}

// ── Credentials ─────────────────────────────────────────────────────

#[test]
fn test_missing_credentials_exit_code() {
    let output = gr_cmd().args(["get", "contacts"]).output().unwrap();
    assert_eq!(output.status.code(), Some(3), "Expected auth exit code");
    let text = combined_output(&output);
    assert!(text.contains("No API key"), "Expected hint in output:\n{text}");
}

#[test]
fn test_unknown_profile_is_usage_error() {
    let output = gr_cmd()
        .args(["--profile", "nope", "get", "contacts"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Profile 'nope' not found"));
}

#[test]
fn test_invalid_account_type_is_usage_error() {
    let output = gr_cmd()
        .args(["-t", "gold", "--api-key", "k", "get", "contacts"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_init_show_and_profiles() {
    let home = tempfile::tempdir().unwrap();

    gr_cmd_with_home(home.path())
        .args([
            "-t",
            "enterprise",
            "--domain",
            "example.com",
            "--region",
            "pl",
            "config",
            "init",
            "--api-key-env",
            "MY_GR_KEY",
        ])
        .assert()
        .success();

    gr_cmd_with_home(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_profile = \"default\"")
                .and(predicate::str::contains("[profiles.default]"))
                .and(predicate::str::contains("account_type = \"enterprise\""))
                .and(predicate::str::contains("api_key_env = \"MY_GR_KEY\""))
                .and(predicate::str::contains("domain = \"example.com\"")),
        );

    gr_cmd_with_home(home.path())
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout("default *\n");

    // A second init without --force refuses to overwrite
    let output = gr_cmd_with_home(home.path())
        .args(["config", "init"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("already exists"));
}

#[test]
fn test_config_set_masks_plaintext_key() {
    let home = tempfile::tempdir().unwrap();

    gr_cmd_with_home(home.path())
        .args(["config", "set", "api_key", "super-secret"])
        .assert()
        .success();

    gr_cmd_with_home(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("api_key = \"****\"")
                .and(predicate::str::contains("super-secret").not()),
        );
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let home = tempfile::tempdir().unwrap();
    let output = gr_cmd_with_home(home.path())
        .args(["config", "set", "color", "blue"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("unknown config key"));
}

#[test]
fn test_config_use_unknown_profile() {
    let home = tempfile::tempdir().unwrap();
    let output = gr_cmd_with_home(home.path())
        .args(["config", "use", "missing"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Profile 'missing' not found"));
}

// ── Requests against a mock API ─────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_get_prints_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/contacts/"))
        .and(query_param("perPage", "2"))
        .and(header("x-auth-token", "api-key test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"contactId": "abc", "name": "Ann"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(
        &server,
        &["get", "contacts", "--per-page", "2", "-o", "json-compact"],
    )
    .await;
    assert_eq!(output.status.code(), Some(0), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "[{\"contactId\":\"abc\",\"name\":\"Ann\"}]\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/tags"))
        .and(body_json(json!({"name": "vip"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"tagId": "t1"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(
        &server,
        &["post", "tags", "-d", r#"{"name":"vip"}"#, "-o", "json-compact"],
    )
    .await;
    assert_eq!(output.status.code(), Some(0), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "{\"tagId\":\"t1\"}\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_body_printed_with_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/campaigns/missing/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "httpStatus": 404,
            "code": 1013,
            "message": "Resource not found"
        })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["get", "campaigns/missing", "-o", "json-compact"]).await;
    assert_eq!(output.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"code\":1013"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Resource not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/accounts/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Unable to authenticate"})),
        )
        .mount(&server)
        .await;

    let output = run_against(&server, &["get", "accounts"]).await;
    assert_eq!(output.status.code(), Some(3));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_html_page_reports_environment_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/contacts/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<!DOCTYPE html><html><body>Not here</body></html>"),
        )
        .mount(&server)
        .await;

    let output = run_against(&server, &["get", "contacts", "-o", "json-compact"]).await;
    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"error\":true"), "{stdout}");
    assert!(stdout.contains("\"httpStatus\":404"), "{stdout}");
}
