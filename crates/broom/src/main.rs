//! broom CLI - reconcile local branches against the remote and sweep the
//! ones that only exist locally

mod cli;
mod colors;
mod prompt;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use broom_core::interaction::InteractionAdapter;
use broom_core::{load_config, run_pass, BroomError, GitCli, Pattern};

use prompt::ConsoleAdapter;

fn main() -> ExitCode {
    let cli = cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: cli::Cli) -> Result<(), BroomError> {
    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let git = GitCli::open(&path)?;

    let config = load_config(git.repo_root())?;
    let protect_pattern = cli.protect.unwrap_or(config.branches.protected);
    let protect = Pattern::regex(&protect_pattern)?;

    let io = ConsoleAdapter::new();
    if !cli.quiet {
        io.print_header(&format!(
            "broom v{} — {}",
            env!("CARGO_PKG_VERSION"),
            git.repo_root().display()
        ));
    }

    run_pass(&git, &io, &protect)?;
    Ok(())
}
