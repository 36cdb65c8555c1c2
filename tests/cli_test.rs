use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(home: &Path, content: &str) {
    let config_dir = home.join(".perspectize");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), content).unwrap();
}

fn perspectize(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("perspectize").unwrap();
    cmd.env("HOME", home)
        .env_remove("PERSPECTIZE_YT_API_KEY")
        .env_remove("PERSPECTIZE_FORCE_MOCK")
        .env_remove("RUST_LOG");
    cmd
}

fn mock_home() -> TempDir {
    let home = TempDir::new().unwrap();
    write_config(home.path(), "[youtube]\nmock_latency_ms = 0\n");
    home
}

#[test]
fn test_duration_command() {
    let home = TempDir::new().unwrap();
    perspectize(home.path())
        .args(["duration", "PT1H5M9S"])
        .assert()
        .success()
        .stdout("1:05:09\n");
}

#[test]
fn test_duration_command_fallback() {
    let home = TempDir::new().unwrap();
    perspectize(home.path())
        .args(["duration", "not-a-duration"])
        .assert()
        .success()
        .stdout("0:00\n");
}

#[test]
fn test_duration_json() {
    let home = TempDir::new().unwrap();
    let assert = perspectize(home.path())
        .args(["duration", "PT8M20S", "--format", "json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(json["formatted"], "8:20");
    assert_eq!(json["minutes"], 8);
    assert_eq!(json["hours"], 0);
}

#[test]
fn test_video_mock_json() {
    let home = mock_home();
    let assert = perspectize(home.path())
        .args(["video", "--format", "json"])
        .assert()
        .success();
    let json: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(json[0]["duration"], "8:20");
    assert_eq!(
        json[0]["video"]["href"],
        "https://www.youtube.com/watch?v=wzgsNBKtaE4"
    );
    assert!(home.path().join(".perspectize/cache.json").exists());
}

#[test]
fn test_video_text_table() {
    let home = mock_home();
    perspectize(home.path())
        .args(["video", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::contains("YouTube Channel"))
        .stdout(predicate::str::contains("Fringe Sport"))
        .stdout(predicate::str::contains("8:20"));
    assert!(!home.path().join(".perspectize/cache.json").exists());
}

#[test]
fn test_equipment_table() {
    let home = mock_home();
    perspectize(home.path())
        .arg("equipment")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kettlebells vs. Dumbbells Comparison"))
        .stdout(predicate::str::contains("• Goblet squats"));
}

#[test]
fn test_default_dashboard() {
    let home = mock_home();
    perspectize(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("YouTube Video Information"))
        .stdout(predicate::str::contains("Kettlebells vs. Dumbbells Comparison"));
}

#[test]
fn test_config_get_and_cache_clear() {
    let home = mock_home();
    perspectize(home.path())
        .args(["config", "get", "youtube.video_id"])
        .assert()
        .success()
        .stdout("wzgsNBKtaE4\n");

    perspectize(home.path()).arg("equipment").assert().success();
    perspectize(home.path())
        .args(["cache", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 cached queries"));
}

#[tokio::test]
async fn test_video_live_api() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "live1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{
                "id": "live1",
                "snippet": {
                    "title": "Live video",
                    "channelTitle": "Live channel",
                    "channelId": "UC_live",
                    "categoryId": "10"
                },
                "contentDetails": { "duration": "PT2H" }
            }]
        })))
        .mount(&mock_server)
        .await;

    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        &format!(
            "[youtube]\napi_key = \"TEST_KEY\"\napi_url = \"{}\"\n",
            mock_server.uri()
        ),
    );

    let home_path = home.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        perspectize(&home_path)
            .args(["video", "--id", "live1", "--format", "json"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["duration"], "2:00:00");
    assert_eq!(json[0]["channel"]["text"], "Live channel");
    assert!(json[0]["tags"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_video_live_api_no_items_renders_empty_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .mount(&mock_server)
        .await;

    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        &format!(
            "[youtube]\napi_key = \"TEST_KEY\"\napi_url = \"{}\"\n",
            mock_server.uri()
        ),
    );

    let home_path = home.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        perspectize(&home_path)
            .args(["video", "--id", "gone"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Duration"));
    assert!(stdout.contains("No rows."));
}

#[tokio::test]
async fn test_video_live_api_error_exits_nonzero() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let home = TempDir::new().unwrap();
    write_config(
        home.path(),
        &format!(
            "[youtube]\napi_key = \"TEST_KEY\"\napi_url = \"{}\"\n",
            mock_server.uri()
        ),
    );

    let home_path = home.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        perspectize(&home_path)
            .args(["video", "--no-cache"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("status 500"));
}
