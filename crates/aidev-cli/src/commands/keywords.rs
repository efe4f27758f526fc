use aidev_config::AidevConfig;
use aidev_core::responses::KeywordsResponse;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::KeywordsArgs;
use crate::output::output;

/// Handle `aidev keywords`.
pub fn handle(args: &KeywordsArgs, config: &AidevConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let classifier = bootstrap::classifier(config, args.keywords.as_deref())?;
    let keywords = classifier.keywords();
    let response = KeywordsResponse {
        version: keywords.version().to_string(),
        count: u32::try_from(keywords.len())?,
        keywords: keywords.keywords().to_vec(),
    };
    output(&response, flags.format)
}
