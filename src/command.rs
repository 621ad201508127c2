use crate::{CommandRunner, Error};
use log::debug;
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Spawns programs directly. Arguments are never passed through a shell.
#[derive(Default, Copy, Clone, Debug)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[&str]) -> Result<String, Error> {
        debug!(">>> {} {}", program.to_string_lossy(), args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("<<< {stdout:?}");

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: program.to_string_lossy().into_owned(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(stdout)
    }
}
