use aidev_config::AidevConfig;
use aidev_core::responses::ClassifyResponse;
use aidev_label::SecurityClassifier;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::output::output;

/// Handle `aidev classify`.
pub fn handle(args: &ClassifyArgs, config: &AidevConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let classifier = bootstrap::classifier(config, args.keywords.as_deref())?;
    output(&explain(&classifier, &args.title, args.body.as_deref()), flags.format)
}

fn explain(classifier: &SecurityClassifier, title: &str, body: Option<&str>) -> ClassifyResponse {
    let matched_keywords: Vec<String> = classifier
        .matched_keywords(title, body)
        .into_iter()
        .map(str::to_string)
        .collect();
    ClassifyResponse {
        security: !matched_keywords.is_empty(),
        matched_keywords,
        keyword_set_version: classifier.keywords().version().to_string(),
    }
}
