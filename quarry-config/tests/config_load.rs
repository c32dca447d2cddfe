use quarry_common::ExtractionStrategy;
use quarry_config::QuarryConfigLoader;
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_full_config_with_env_credentials() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
version: "0.1"
webdriver:
  endpoint: "http://localhost:4444"
  headless: true
  wait_timeout_secs: 10
site:
  origin: "https://qa.example.com"
  login_path: "/login"
credentials:
  email: "${QA_ACCOUNT_EMAIL}"
  password: "${QA_ACCOUNT_PASSWORD}"
matching:
  threshold: 0.6
  strategy: leading-bodies
output:
  path: "harvested.txt"
"#;
    let p = write_yaml(&tmp, "quarry.yaml", file_yaml);

    temp_env::with_vars(
        [
            ("QA_ACCOUNT_EMAIL", Some("robot@example.com")),
            ("QA_ACCOUNT_PASSWORD", Some("hunter2")),
        ],
        || {
            let config = QuarryConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load quarry config");

            assert_eq!(config.webdriver.endpoint, "http://localhost:4444");
            assert!(config.webdriver.headless);
            assert_eq!(config.webdriver.wait_timeout_secs, 10);
            assert_eq!(config.site.origin, "https://qa.example.com");
            assert_eq!(config.credentials.email, "robot@example.com");
            assert_eq!(config.credentials.password, "hunter2");
            assert_eq!(config.matching.threshold, 0.6);
            assert_eq!(config.matching.strategy, ExtractionStrategy::LeadingBodies);
            assert_eq!(config.output.path, PathBuf::from("harvested.txt"));
        },
    );
}

#[test]
#[serial]
fn defaults_fill_everything_but_credentials() {
    let config = QuarryConfigLoader::new()
        .with_yaml_str(
            r#"
credentials:
  email: "robot@example.com"
  password: "hunter2"
"#,
        )
        .load()
        .expect("minimal config loads");

    assert_eq!(config.webdriver.endpoint, "http://localhost:9515");
    assert!(!config.webdriver.headless);
    assert_eq!(config.webdriver.wait_timeout_secs, 30);
    assert_eq!(config.site.origin, "https://stackoverflow.com");
    assert_eq!(config.site.login_path, "/users/login?ssrc=head");
    assert_eq!(config.matching.threshold, 0.5);
    assert_eq!(config.matching.strategy, ExtractionStrategy::AcceptedAnswer);
    assert_eq!(config.output.path, PathBuf::from("answers.txt"));
}

#[test]
#[serial]
fn rejects_unexpanded_credentials() {
    // The variable is deliberately absent from the environment.
    let err = QuarryConfigLoader::new()
        .with_yaml_str(
            r#"
credentials:
  email: "${QUARRY_TEST_MISSING_EMAIL}"
  password: "hunter2"
"#,
        )
        .load()
        .expect_err("unexpanded placeholder must be rejected");

    assert!(err.to_string().contains("unexpanded placeholder"));
}

#[test]
#[serial]
fn rejects_out_of_range_threshold() {
    let err = QuarryConfigLoader::new()
        .with_yaml_str(
            r#"
credentials:
  email: "robot@example.com"
  password: "hunter2"
matching:
  threshold: 1.5
"#,
        )
        .load()
        .expect_err("threshold above 1.0 must be rejected");

    assert!(err.to_string().contains("threshold"));
}
