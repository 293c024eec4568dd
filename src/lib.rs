pub mod cli;
pub mod config;
pub mod display;
pub mod id;
pub mod machine_info;
pub mod runner;

use crate::config::ActConfig;
use crate::display::{
    compiler_records_json, format_compiler_records, format_machine_ids, format_machine_table,
    machine_ids_json, machines_json,
};
use anyhow::Context;
pub use cli::{ColorMode, Commands, OutputFormat, cli_parse};
pub use id::{Id, IdError};
use indicatif::{ProgressBar, ProgressStyle};
pub use machine_info::{
    ActClient, MachineInfoError, MachineMap, ParseError, build_args, get_machines,
    invocation_args, parse_compiler_list, split_lines,
};
pub use runner::{CommandRunner, ProcessRunner, RunOutput};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn apply_color_mode(color_mode: ColorMode) {
    match color_mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

fn query_spinner(quiet: bool, program: &str) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Asking {} for compilers...", program));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Shell-style rendering of the command line, for display only
fn render_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|arg| {
            let needs_quotes = arg.is_empty()
                || arg
                    .chars()
                    .any(|c| c.is_whitespace() || "'\"()\\$".contains(c));
            if needs_quotes {
                format!("'{}'", arg.replace('\'', r"'\''"))
            } else {
                arg.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render(command: Commands, format: OutputFormat, machines: &MachineMap) -> String {
    match (command, format) {
        (Commands::Machines, OutputFormat::Text) => format_machine_ids(machines),
        (Commands::Machines, OutputFormat::Json) => machine_ids_json(machines),
        (Commands::Compilers, OutputFormat::Text) => format_compiler_records(machines),
        (Commands::Compilers, OutputFormat::Json) => compiler_records_json(machines),
        (_, OutputFormat::Text) => format_machine_table(machines),
        (_, OutputFormat::Json) => machines_json(machines),
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    init_logging(cli.log_level());
    apply_color_mode(cli.color);

    let file_config = config::load_config(cli.config.as_deref())
        .context("Failed to load config")?;
    let config: ActConfig = file_config.with_overrides(
        cli.act_path.as_deref(),
        cli.filter_machines.as_deref(),
        cli.filter_compilers.as_deref(),
    );
    if let Some(path) = &cli.config {
        info!("Loaded config from {}", path.display());
    }

    let machine_predicate = config.filters.machines.as_deref();
    let compiler_predicate = config.filters.compilers.as_deref();
    let command = cli.effective_command();

    if command == Commands::Command {
        let args = invocation_args(machine_predicate, compiler_predicate);
        match cli.format {
            OutputFormat::Text => println!("{}", render_command_line(&config.act_path, &args)),
            OutputFormat::Json => {
                let argv: Vec<&str> = std::iter::once(config.act_path.as_str())
                    .chain(args.iter().map(String::as_str))
                    .collect();
                println!("{}", serde_json::json!(argv));
            }
        }
        return Ok(());
    }

    let client = ActClient::with_runner(config.act_path.as_str(), ProcessRunner);
    let spinner = query_spinner(cli.quiet, client.program());
    let result = client.list_compilers(machine_predicate, compiler_predicate);
    spinner.finish_and_clear();

    let machines = result.with_context(|| {
        format!(
            "Could not list compilers with '{}'",
            render_command_line(
                client.program(),
                &invocation_args(machine_predicate, compiler_predicate)
            )
        )
    })?;

    let output = render(command, cli.format, &machines);
    if cli.format == OutputFormat::Json {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
    Ok(())
}
