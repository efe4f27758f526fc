use std::path::PathBuf;

use aidev_config::AidevConfig;
use aidev_label::{KeywordSet, SecurityClassifier};
use anyhow::Context;

use crate::cli::root_commands::RunArgs;

pub fn load_config() -> anyhow::Result<AidevConfig> {
    AidevConfig::load_with_dotenv().context("failed to load aidev configuration")
}

/// Fold `aidev run` flags into the loaded config. Flags win.
pub fn apply_run_overrides(config: &mut AidevConfig, args: &RunArgs) {
    let overrides = [
        (&mut config.sources.pull_requests, &args.pull_requests),
        (&mut config.sources.repositories, &args.repositories),
        (&mut config.sources.task_types, &args.task_types),
        (&mut config.sources.commit_details, &args.commit_details),
        (&mut config.output.dir, &args.output_dir),
        (&mut config.labeling.keywords_file, &args.keywords),
    ];
    for (slot, value) in overrides {
        if let Some(value) = value {
            slot.clone_from(value);
        }
    }
}

/// Build the classifier from a `--keywords` flag, else `labeling.keywords_file`,
/// else the built-in table.
pub fn classifier(config: &AidevConfig, flag: Option<&str>) -> anyhow::Result<SecurityClassifier> {
    let path = flag.or_else(|| config.labeling.keywords_file()).map(PathBuf::from);
    let keywords = KeywordSet::from_optional_path(path.as_deref()).with_context(|| {
        format!(
            "failed to load keyword table from {}",
            path.as_deref()
                .map_or_else(|| "<builtin>".to_string(), |p| p.display().to_string())
        )
    })?;
    Ok(SecurityClassifier::new(keywords))
}
