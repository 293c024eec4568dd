use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// List the test machines and compilers configured in act
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a TOML config file
    #[arg(long, global = true, env = "ACT_MACHINES_CONFIG")]
    pub config: Option<PathBuf>,

    /// act executable to run
    #[arg(long = "act", global = true, env = "ACT_PATH")]
    pub act_path: Option<String>,

    /// Machine filter predicate, passed to act verbatim
    #[arg(short = 'm', long, global = true)]
    pub filter_machines: Option<String>,

    /// Compiler filter predicate, passed to act verbatim
    #[arg(short = 'c', long, global = true)]
    pub filter_compilers: Option<String>,

    /// Output format
    #[arg(short = 'F', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner and informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Show each machine with its compilers (default)
    List,
    /// Show machine ids only
    Machines,
    /// Show one "<machine> <compiler>" record per line
    Compilers,
    /// Print the act command line without running it
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    pub fn effective_command(&self) -> Commands {
        self.command.unwrap_or(Commands::List)
    }

    /// Log filter directive implied by `-v`/`-q`
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_list() {
        let cli = Cli::try_parse_from(["act-machines"]).unwrap();
        assert_eq!(cli.effective_command(), Commands::List);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "act-machines",
            "machines",
            "-m",
            "(spam)",
            "-F",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.effective_command(), Commands::Machines);
        assert_eq!(cli.filter_machines.as_deref(), Some("(spam)"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let cli = Cli::try_parse_from(["act-machines", "-v", "-q"]).unwrap();
        assert_eq!(cli.log_level(), "error");
    }
}
