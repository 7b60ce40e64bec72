//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::Parser;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Broom - interactively sweep local git branches missing from the remote
#[derive(Parser)]
#[command(name = "broom")]
#[command(version = VERSION)]
#[command(about = "Interactively delete local branches that no longer exist on the remote")]
#[command(
    long_about = "Broom compares your clone's local branches against the remote listing and presents the local-only ones in a numbered table.\n\nToggle branches by ID (e.g. 1,3), toggle everything with A, or quit with Q. Nothing is deleted until you confirm the plan, and the table is recomputed from fresh listings afterwards.\n\nThe protected branch (master by default) is never offered for deletion; override it with --protect or a .broom.toml at the repository root."
)]
pub struct Cli {
    /// Repository clone to reconcile (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Pattern for the branch that is never offered for deletion
    ///
    /// Interpreted as a regular expression matched against normalized
    /// local branch names. Overrides the .broom.toml setting.
    #[arg(long, value_name = "PATTERN")]
    pub protect: Option<String>,

    /// Suppress the banner and non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["broom"]);
        assert!(cli.path.is_none());
        assert!(cli.protect.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_path_and_protect() {
        let cli = Cli::parse_from(["broom", "/srv/code", "--protect", "main"]);
        assert_eq!(cli.path, Some(PathBuf::from("/srv/code")));
        assert_eq!(cli.protect.as_deref(), Some("main"));
    }
}
