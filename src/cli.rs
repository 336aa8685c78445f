use clap::{Args, Parser, Subcommand};

use crate::types::{Action, Invocation, MatchSpec, DEFAULT_TOKEN_ENV};

/// Pause or resume monitoring checks by matching name substrings (OR logic).
#[derive(Debug, Parser)]
#[command(name = "check-pause", version)]
pub struct Cli {
    /// Log request details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pause matching checks
    Pause(TargetArgs),
    /// Resume matching checks
    Resume(TargetArgs),
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// One or more substrings to match against check names (OR logic)
    pub patterns: Vec<String>,

    /// Environment variable that holds the API token
    #[arg(long, value_name = "NAME", default_value = DEFAULT_TOKEN_ENV)]
    pub token_env: String,

    /// Show what would be changed, without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Match case-sensitively (default: case-insensitive)
    #[arg(long)]
    pub case_sensitive: bool,
}

impl Cli {
    pub fn invocation(&self) -> Invocation {
        let (action, args) = match &self.command {
            Command::Pause(args) => (Action::Pause, args),
            Command::Resume(args) => (Action::Resume, args),
        };
        Invocation {
            action,
            spec: MatchSpec::new(args.patterns.iter().cloned(), args.case_sensitive),
            token_env: args.token_env.clone(),
            dry_run: args.dry_run,
        }
    }
}
