mod cli;
mod commands;
mod display;
mod input;
mod script;
mod shutdown;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Default to warn unless RUST_LOG says otherwise
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("drums_cli=warn,drums_core=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rules = args.rules.as_deref();
    match args.command {
        Command::Play { bpm, name, script } => {
            commands::play::run(&args.store, rules, bpm, name.as_deref(), &script)
        }
        Command::Tap { bpm, name } => commands::tap::run(&args.store, rules, bpm, name.as_deref()),
        Command::Scores { top, json } => commands::scores::run(&args.store, top, json),
    }
}
