use aidev_config::AidevConfig;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::output::output;
use crate::pipeline::LabelingPipeline;

/// Handle `aidev run`.
pub fn handle(args: &RunArgs, mut config: AidevConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    bootstrap::apply_run_overrides(&mut config, args);
    config.validate()?;

    let classifier = bootstrap::classifier(&config, None)?;
    let report = LabelingPipeline::new(&config, classifier).run()?;
    output(&report, flags.format)
}
