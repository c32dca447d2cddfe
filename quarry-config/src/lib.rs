//! Loader for workspace configuration with YAML + environment overlays.
//!
//! `quarry.yaml` carries everything the run needs: the WebDriver endpoint,
//! the target site, the matching policy, and the output path. Credentials are
//! never written into the file directly; they arrive through `${VAR}`
//! placeholders expanded from the environment at load time.
use config::{Config, ConfigError, Environment, File};
use quarry_common::ExtractionStrategy;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct QuarryConfig {
    pub version: Option<String>,
    #[serde(default)]
    pub webdriver: WebdriverConfig,
    #[serde(default)]
    pub site: SiteConfig,
    pub credentials: Credentials,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct WebdriverConfig {
    /// Address of a running WebDriver service (Chromedriver by default).
    #[serde(default = "default_webdriver_endpoint")]
    pub endpoint: String,
    /// Run without a visible window. The default mirrors a desktop session.
    #[serde(default)]
    pub headless: bool,
    /// Upper bound for every named wait (navigation, selector presence).
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
}

impl Default for WebdriverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_webdriver_endpoint(),
            headless: false,
            wait_timeout_secs: default_wait_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    /// Origin that candidate links are resolved against.
    #[serde(default = "default_site_origin")]
    pub origin: String,
    /// Path of the login form, joined onto `origin`.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_site_origin(),
            login_path: default_login_path(),
        }
    }
}

/// Account used for the login step. Values are expected to come from
/// `${VAR}` environment placeholders, not from literals in the file.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchingConfig {
    /// Minimum title similarity, inclusive, on the `[0, 1]` scale.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub strategy: ExtractionStrategy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            strategy: ExtractionStrategy::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Text file rewritten in full after every processed link.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_webdriver_endpoint() -> String {
    "http://localhost:9515".into()
}
fn default_wait_timeout_secs() -> u64 {
    30
}
fn default_site_origin() -> String {
    "https://stackoverflow.com".into()
}
fn default_login_path() -> String {
    "/users/login?ssrc=head".into()
}
fn default_threshold() -> f64 {
    0.5
}
fn default_output_path() -> PathBuf {
    PathBuf::from("answers.txt")
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Credentials must be present and fully expanded before the browser starts;
/// a leftover `${...}` means the environment variable was never set.
fn validate(cfg: &QuarryConfig) -> Result<(), ConfigError> {
    for (field, value) in [
        ("credentials.email", &cfg.credentials.email),
        ("credentials.password", &cfg.credentials.password),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("{field} is empty")));
        }
        if value.contains("${") {
            return Err(ConfigError::Message(format!(
                "{field} still contains an unexpanded placeholder; is the environment variable set?"
            )));
        }
    }
    if !(0.0..=1.0).contains(&cfg.matching.threshold) {
        return Err(ConfigError::Message(format!(
            "matching.threshold must be within [0, 1], got {}",
            cfg.matching.threshold
        )));
    }
    Ok(())
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct QuarryConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for QuarryConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl QuarryConfigLoader {
    /// Start with sensible defaults: YAML file + `QUARRY_` env overrides.
    pub fn new() -> Self {
        let builder =
            Config::builder().add_source(Environment::with_prefix("QUARRY").separator("__"));
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self.builder.add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly
    /// typed config. `${VAR}` placeholders are expanded recursively before
    /// the typed structs materialise, then credentials are validated.
    ///
    /// ```
    /// use quarry_config::QuarryConfigLoader;
    ///
    /// let config = QuarryConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// credentials:
    ///   email: "robot@example.com"
    ///   password: "hunter2"
    /// "#,
    ///     )
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.matching.threshold, 0.5);
    /// assert_eq!(config.webdriver.endpoint, "http://localhost:9515");
    /// ```
    pub fn load(self) -> Result<QuarryConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: QuarryConfig =
            serde_json::from_value(v).map_err(|e| ConfigError::Message(e.to_string()))?;

        validate(&typed)?;
        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("FOO", Some("bar"), || {
            let mut v = json!("prefix-${FOO}-suffix");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("prefix-bar-suffix"));
        });
    }

    #[test]
    fn expands_in_array_and_object() {
        temp_env::with_vars([("CITY", Some("Winston")), ("STATE", Some("NC"))], || {
            let mut v = json!([
                "hello-$CITY",
                { "loc": "${CITY}-${STATE}" },
                42,
                true,
                null
            ]);
            expand_env_in_value(&mut v);
            assert_eq!(
                v,
                json!(["hello-Winston", { "loc": "Winston-NC" }, 42, true, null])
            );
        });
    }

    #[test]
    fn expands_recursively_across_env_values() {
        temp_env::with_vars(
            [
                ("BAZ", Some("qux")),
                ("BAR", Some("mid-${BAZ}")),
                ("FOO", Some("start-${BAR}-end")),
            ],
            || {
                let mut v = json!("X=${FOO}");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("X=start-mid-qux-end"));
            },
        );
    }

    #[test]
    fn stops_on_cycles_and_leaves_value_reasonable() {
        temp_env::with_vars([("A", Some("${B}")), ("B", Some("${A}"))], || {
            let mut v = json!("x=${A}-y");
            // The depth cap guarantees termination; the cycle itself stays
            // unresolved in the value.
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("hi-${DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("hi-${DOES_NOT_EXIST}"));
    }
}
