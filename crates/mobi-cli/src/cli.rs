//! Command-line arguments and logging setup

use clap::Parser;
use env_logger::{Env, Target};

/// Get the weekly lesson plan from MobiDziennik as JSON
#[derive(Parser)]
#[command(name = "mobi", version, about)]
pub struct Args {
    /// Username/email
    #[arg(short, long, env = "MOBI_USERNAME")]
    pub user: String,

    /// Password
    #[arg(short, long, env = "MOBI_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Pretty print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Only show one day: today, tomorrow or dayaftertomorrow
    #[arg(long, value_name = "DAY")]
    pub day: Option<String>,

    /// Skip lesson tiles that cannot be parsed instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Log to stderr so stdout carries only the JSON document.
///
/// `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .init();
}
