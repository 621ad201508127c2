use crate::Error;
use std::ffi::OsStr;

/// Runs an external program and hands back what it printed on stdout.
pub trait CommandRunner {
    fn run(&self, program: &OsStr, args: &[&str]) -> Result<String, Error>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &OsStr, args: &[&str]) -> Result<String, Error> {
        (**self).run(program, args)
    }
}
