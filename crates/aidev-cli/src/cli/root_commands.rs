use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load the dataset, write Task 1–4, and derive Task 5 security labels.
    Run(RunArgs),
    /// Classify a single title/body with the active keyword table.
    Classify(ClassifyArgs),
    /// Print the active keyword table.
    Keywords(KeywordsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Directory receiving the CSV files (overrides `output.dir`).
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Pull request relation location (overrides `sources.pull_requests`).
    #[arg(long)]
    pub pull_requests: Option<String>,

    /// Repository relation location (overrides `sources.repositories`).
    #[arg(long)]
    pub repositories: Option<String>,

    /// Task-type relation location (overrides `sources.task_types`).
    #[arg(long)]
    pub task_types: Option<String>,

    /// Commit detail relation location (overrides `sources.commit_details`).
    #[arg(long)]
    pub commit_details: Option<String>,

    /// TOML keyword table (overrides `labeling.keywords_file`).
    #[arg(short, long)]
    pub keywords: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// Pull request title.
    #[arg(short, long)]
    pub title: String,

    /// Pull request body. Omit for a missing body.
    #[arg(short, long)]
    pub body: Option<String>,

    /// TOML keyword table (overrides `labeling.keywords_file`).
    #[arg(short, long)]
    pub keywords: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct KeywordsArgs {
    /// TOML keyword table (overrides `labeling.keywords_file`).
    #[arg(short, long)]
    pub keywords: Option<String>,
}
