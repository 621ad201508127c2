use crate::sys::posix::InterfaceNameError;
use macaddr::MacAddr6;
use std::io;
use std::process::ExitStatus;
use thiserror::Error as ThisError;

#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid interface name: {0}")]
    InvalidInterfaceName(#[from] InterfaceNameError),
    #[error("`{program}` exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("no hardware address found in interface output")]
    AddressNotFound,
    #[error("interface reports {actual}, expected {expected}")]
    VerificationFailed {
        expected: MacAddr6,
        actual: MacAddr6,
    },
    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
