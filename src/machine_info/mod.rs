//! Machine and compiler discovery through `act`
//!
//! This module asks `act configure list-compilers` which test machines are
//! configured and which compilers each one has, optionally narrowed by
//! machine and compiler predicates.
//!
//! # Output format
//!
//! ```text
//! localhost gcc.x86.O0
//! localhost clang.x86.O3
//! farfaraway msvc.x86.O3
//! ```
//!
//! Each record is a machine id, whitespace, a compiler id, then any number of
//! ignored tokens. Blank lines are allowed.

pub mod args;
pub mod error;
pub mod parser;

pub use args::{build_args, invocation_args};
pub use error::{MachineInfoError, ParseError};
pub use parser::{parse_compiler_list, split_lines};

use crate::id::Id;
use crate::runner::{CommandRunner, ProcessRunner};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Mapping from machine id to the compilers available on it
pub type MachineMap = BTreeMap<Id, BTreeSet<Id>>;

/// Program name used when no explicit path is configured
pub const DEFAULT_ACT_PROGRAM: &str = "act";

/// Queries an `act` executable for machine information
#[derive(Debug, Clone)]
pub struct ActClient<R> {
    program: String,
    runner: R,
}

impl ActClient<ProcessRunner> {
    /// Client that runs `act` from `PATH` as a child process
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_ACT_PROGRAM, ProcessRunner)
    }
}

impl Default for ActClient<ProcessRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> ActClient<R> {
    pub fn with_runner(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs `act configure list-compilers` and parses what it prints.
    ///
    /// Blocks until the child exits. A non-zero exit is an error and the
    /// output is not parsed.
    pub fn list_compilers(
        &self,
        machine_predicate: Option<&str>,
        compiler_predicate: Option<&str>,
    ) -> Result<MachineMap, MachineInfoError> {
        let args = invocation_args(machine_predicate, compiler_predicate);
        debug!("Querying {} {}", self.program, args.join(" "));

        let output = self
            .runner
            .run(&self.program, &args)
            .map_err(|source| MachineInfoError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if !output.success() {
            warn!(
                "{} exited with {:?}; not parsing its output",
                self.program, output.code
            );
            return Err(MachineInfoError::NonZeroExit {
                program: self.program.clone(),
                code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        let machines = parse_compiler_list(split_lines(&output.stdout))?;
        debug!(
            "Found {} machine(s), {} compiler(s)",
            machines.len(),
            machines.values().map(BTreeSet::len).sum::<usize>()
        );
        Ok(machines)
    }
}

/// Gets machine information from `act` on `PATH`.
pub fn get_machines(
    machine_predicate: Option<&str>,
    compiler_predicate: Option<&str>,
) -> Result<MachineMap, MachineInfoError> {
    ActClient::new().list_compilers(machine_predicate, compiler_predicate)
}
