use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterfaceNameError {
    #[error("interface name is empty")]
    Empty,
    #[error("interface name is > 16 (null-terminated): {0:?}")]
    NameTooLong(String),
    #[error("NUL byte encountered in name: {0:?}")]
    NulByteEncountered(String),
    #[error("interface name contains forbidden character {1:?}: {0:?}")]
    ForbiddenCharacter(String, char),
    #[error("interface name looks like a command-line option: {0:?}")]
    LeadingDash(String),
}

/// Name of a network interface, checked against what the kernel accepts.
///
/// The name always reaches the configuration tool as a single argument, so
/// the checks here only reject names that could never exist or that the tool
/// would parse as an option.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct InterfaceName(String);

impl FromStr for InterfaceName {
    type Err = InterfaceNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for InterfaceName {
    type Error = InterfaceNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(InterfaceNameError::Empty);
        }
        if value.len() >= libc::IFNAMSIZ {
            return Err(InterfaceNameError::NameTooLong(value.to_string()));
        }
        if value.contains('\0') {
            return Err(InterfaceNameError::NulByteEncountered(value.to_string()));
        }
        if let Some(c) = value.chars().find(|c| *c == '/' || c.is_whitespace()) {
            return Err(InterfaceNameError::ForbiddenCharacter(value.to_string(), c));
        }
        if value.starts_with('-') {
            return Err(InterfaceNameError::LeadingDash(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }
}

impl Display for InterfaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl InterfaceName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
