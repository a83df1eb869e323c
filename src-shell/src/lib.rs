//! Snowy Browser - Text Shell
//!
//! A line-oriented chrome over the browser core. Pages run on the headless
//! engine; the core owns all state and the shell only parses commands and
//! prints what changed.

mod chrome;
mod commands;
mod state;

use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use commands::privacy::StdinPrompt;
use commands::{dispatch, CommandResult, ParseError, Reply, ShellCommand};
use snowy_core::Config;
use state::AppState;

#[derive(Parser)]
#[command(name = "snowy")]
#[command(about = "A minimal tabbed web browser shell", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory for the session, bookmarks, extensions and config.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log: String,

    /// Print command results as JSON
    #[arg(long)]
    json: bool,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    snowy_core::init_logging_with(&cli.log);

    let data_dir = cli.data_dir.unwrap_or_else(Config::data_dir);
    let config = Config::load(&data_dir);

    let state = AppState::new(config)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    state.initialize()?;

    tracing::info!(data_dir = %data_dir.display(), "Snowy started");
    print_events(&state)?;

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("snowy> ");
        io::stdout().flush()?;

        line.clear();
        let command = if stdin.read_line(&mut line)? == 0 {
            println!();
            ShellCommand::Quit
        } else {
            match line.parse::<ShellCommand>() {
                Ok(command) => command,
                Err(ParseError::Empty) => continue,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            }
        };

        let quit = command == ShellCommand::Quit;
        let result = dispatch(&state, command, &StdinPrompt);
        print_result(&result, cli.json)?;
        print_events(&state)?;

        if quit {
            break;
        }
    }

    tracing::info!("Snowy exited");
    Ok(())
}

fn print_result(result: &CommandResult<Reply>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(result)?);
        return Ok(());
    }

    match (&result.data, &result.error) {
        (Some(reply), _) => {
            let text = reply.to_string();
            if !text.is_empty() {
                println!("{text}");
            }
        }
        (None, Some(error)) => println!("error: {error}"),
        (None, None) => {}
    }
    Ok(())
}

fn print_events(state: &AppState) -> anyhow::Result<()> {
    let events = state.take_events();
    let lines = state.with_browser(|browser| Ok(chrome::render(browser, &events)))?;
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
