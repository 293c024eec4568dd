//! Running external commands.
//!
//! The machine query only needs "run this program with these arguments and
//! give me its exit code and output", so that is all [`CommandRunner`]
//! exposes. Tests swap in a fake runner instead of spawning `act`.

use std::io;
use std::process::Command;
use tracing::debug;

/// Captured result of a finished child process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code, or `None` if the process was terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

pub trait CommandRunner {
    /// Run `program` with `args` to completion, capturing its output.
    ///
    /// An `Err` means the process could not be started at all.
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        debug!("Running {} {}", program, args.join(" "));
        let output = Command::new(program).args(args).output()?;

        Ok(RunOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[String]) -> io::Result<RunOutput> {
        (**self).run(program, args)
    }
}
