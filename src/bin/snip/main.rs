use clap::Parser;
use log::error;

use anyhow::Result;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

mod cli;
mod cmd_catalogue;
mod cmd_delete;
mod cmd_get;
mod cmd_put;
mod cmd_search;
mod util;

/// Database and log file live in the working directory; there is no
/// configuration surface beyond the sub-command itself.
pub const DB_PATH: &str = "snippets.db";
pub const LOG_PATH: &str = "snippets.log";

fn init_logger() {
    // Level from RUST_LOG, default debug. Lines go to the side log file,
    // not the terminal; if the file cannot be opened, stderr is kept.
    let mut builder = Builder::from_env(Env::default().default_filter_or("debug"));
    builder.format_timestamp_millis();
    if let Ok(file) = OpenOptions::new().create(true).append(true).open(LOG_PATH) {
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        error!("{:?}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    match cli.cmd {
        cli::Cmd::Put { name, snippet } => cmd_put::exec(name, snippet),

        cli::Cmd::Get { name } => cmd_get::exec(name),

        cli::Cmd::Catalogue => cmd_catalogue::exec(),

        cli::Cmd::Search { search_text } => cmd_search::exec(search_text),

        cli::Cmd::Delete { name } => cmd_delete::exec(name),
    }
}
