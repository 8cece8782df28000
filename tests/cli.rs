use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_config(temp: &PathBuf, org: &str) -> PathBuf {
    let path = temp.join("config.yaml");
    let contents = format!("token: ghp_test\norg: {org}\npreferences:\n  page_size: 100\n");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn ghreport() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ghreport"));
    cmd.env_remove("GHREPORT_CONFIG")
        .env_remove("GHREPORT_TOKEN")
        .env_remove("GHREPORT_ORG")
        .env_remove("GHREPORT_API_URL")
        .env_remove("GHREPORT_FORMAT");
    cmd
}

#[test]
fn version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    ghreport()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf(), "acme");

    let assert = ghreport()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Default organization: acme"));
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));

    Ok(())
}

/// Missing config file should point the user at `ghreport init`.
#[test]
fn missing_config_shows_helpful_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let nonexistent_config = temp.path().join("does-not-exist.yaml");

    let assert = ghreport()
        .arg("repos")
        .arg("report")
        .arg("--config")
        .arg(&nonexistent_config)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.contains("ghreport init"),
        "Expected error to mention 'ghreport init', got: {}",
        stderr
    );

    Ok(())
}

/// A token override alone is enough, but the org must come from somewhere.
#[test]
fn missing_org_shows_helpful_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let nonexistent_config = temp.path().join("does-not-exist.yaml");

    let assert = ghreport()
        .arg("repos")
        .arg("report")
        .arg("--token")
        .arg("ghp_test")
        .arg("--config")
        .arg(&nonexistent_config)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.contains("--org"),
        "Expected error to mention '--org', got: {}",
        stderr
    );

    Ok(())
}

#[test]
fn completion_generates_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    ghreport()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghreport"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn repos_report_json_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = server.url();

    let _repos = server
        .mock("GET", "/orgs/acme/repos")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[
                { "name": "api", "private": true, "size": 512 },
                { "name": "web", "private": false, "size": 128 }
            ]"#,
        )
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf(), "acme");

    let assert = ghreport()
        .arg("repos")
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .arg("--format")
        .arg("json")
        .env("GHREPORT_API_URL", &api_url)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("api"));
    assert!(stdout.contains("web"));
    assert!(stdout.contains("\"meta\""));

    Ok(())
}

/// `preferences.page_size` from the config file controls `per_page`.
#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn repos_report_uses_configured_page_size() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = server.url();

    let _repos = server
        .mock("GET", "/orgs/acme/repos")
        .match_query(mockito::Matcher::UrlEncoded("per_page".into(), "7".into()))
        .with_status(200)
        .with_body(r#"[{ "name": "api", "size": 512 }]"#)
        .expect(1)
        .create();

    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(
        &config_path,
        "token: ghp_test\norg: acme\npreferences:\n  page_size: 7\n",
    )?;

    let assert = ghreport()
        .arg("repos")
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .env("GHREPORT_API_URL", &api_url)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("api"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn repos_report_writes_csv_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = server.url();

    let _repos = server
        .mock("GET", "/orgs/acme/repos")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"[{ "name": "api", "size": 512 }]"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf(), "acme");
    let csv_path = temp.path().join("repos.csv");

    ghreport()
        .arg("repos")
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .arg("--output")
        .arg(&csv_path)
        .env("GHREPORT_API_URL", &api_url)
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_path)?;
    assert!(csv.lines().count() >= 2, "Expected header plus a row: {}", csv);
    assert!(csv.contains("api"));

    Ok(())
}

/// A repository whose release listing fails is skipped, not fatal.
#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn releases_report_skips_failing_repo() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = server.url();

    let _repos = server
        .mock("GET", "/orgs/acme/repos")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"[{ "name": "good" }, { "name": "bad" }]"#)
        .create();
    let _good = server
        .mock("GET", "/repos/acme/good/releases")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(
            r#"[{ "tag_name": "v1.0", "assets": [{ "name": "a.tar.gz", "size": 1024 }] }]"#,
        )
        .create();
    let _bad = server
        .mock("GET", "/repos/acme/bad/releases")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf(), "acme");

    let assert = ghreport()
        .arg("releases")
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .env("GHREPORT_API_URL", &api_url)
        .assert()
        .success();

    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("good"));
    assert!(
        stderr.contains("Skipping bad"),
        "Expected skip warning for 'bad', got: {}",
        stderr
    );

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn unauthorized_error_suggests_init() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let api_url = server.url();

    let _repos = server
        .mock("GET", "/orgs/acme/repos")
        .match_query(mockito::Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message": "Bad credentials"}"#)
        .create();

    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf(), "acme");

    let assert = ghreport()
        .arg("repos")
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .env("GHREPORT_API_URL", &api_url)
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.contains("ghreport init"),
        "Expected error to mention 'ghreport init', got: {}",
        stderr
    );

    Ok(())
}

/// Connection failures surface as network errors, not panics.
#[test]
fn connection_error_shows_network_message() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(&temp.path().to_path_buf(), "acme");

    let assert = ghreport()
        .arg("repos")
        .arg("report")
        .arg("--config")
        .arg(&config_path)
        .env("GHREPORT_API_URL", "http://127.0.0.1:59999")
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(
        stderr.to_lowercase().contains("network") || stderr.to_lowercase().contains("connect"),
        "Expected error to mention a network issue, got: {}",
        stderr
    );

    Ok(())
}
