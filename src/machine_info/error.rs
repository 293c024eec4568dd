use crate::id::IdError;
use thiserror::Error;

/// Errors raised while parsing `act configure list-compilers` output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Line {line_number}: expected '<machine> <compiler>', got '{line}'")]
    MalformedLine { line_number: usize, line: String },

    #[error("Line {line_number}: {source}")]
    InvalidId {
        line_number: usize,
        #[source]
        source: IdError,
    },
}

/// Errors raised while querying `act` for machine information
#[derive(Debug, Error)]
pub enum MachineInfoError {
    #[error("Failed to start '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {}{}", exit_description(.code), stderr_excerpt(.stderr))]
    NonZeroExit {
        program: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("Failed to parse compiler list: {0}")]
    Parse(#[from] ParseError),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

fn stderr_excerpt(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}
