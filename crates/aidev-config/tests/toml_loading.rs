//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env var changes.

use aidev_config::{AidevConfig, ConfigError};
use figment::Jail;
use pretty_assertions::assert_eq;

#[test]
fn loads_project_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aidev")?;
        jail.create_file(
            ".aidev/config.toml",
            r#"
[sources]
pull_requests = "data/all_pull_request.parquet"
task_types = "data/pr_task_type.csv"

[output]
dir = "out"

[labeling]
keywords_file = "keywords.toml"
"#,
        )?;

        let config = AidevConfig::load().expect("config loads");
        assert_eq!(config.sources.pull_requests, "data/all_pull_request.parquet");
        assert_eq!(config.sources.task_types, "data/pr_task_type.csv");
        // Unset sources keep their defaults.
        assert_eq!(
            config.sources.repositories,
            "hf://datasets/hao-li/AIDev/all_repository.parquet"
        );
        assert_eq!(config.output.dir, "out");
        assert_eq!(config.labeling.keywords_file(), Some("keywords.toml"));
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aidev")?;
        jail.create_file(
            ".aidev/config.toml",
            r#"
[output]
dir = "from-toml"
"#,
        )?;
        jail.set_env("AIDEV_OUTPUT__DIR", "from-env");
        jail.set_env("AIDEV_SOURCES__COMMIT_DETAILS", "local/commits.parquet");

        let config = AidevConfig::load().expect("config loads");
        assert_eq!(config.output.dir, "from-env");
        assert_eq!(config.sources.commit_details, "local/commits.parquet");
        Ok(())
    });
}

#[test]
fn empty_source_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("AIDEV_SOURCES__PULL_REQUESTS", "");

        let err = AidevConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_surfaces_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".aidev")?;
        jail.create_file(".aidev/config.toml", "[output\ndir = ")?;

        let err = AidevConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
