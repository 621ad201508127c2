use crate::sys::DEFAULT_TOOL;
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the interface-configuration tool.
pub const TOOL_ENV: &str = "MACSPOOF_IFCONFIG";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Program invoked to query and reconfigure interfaces.
    pub tool: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: PathBuf::from(DEFAULT_TOOL),
        }
    }
}

impl Config {
    pub fn with_tool(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// Reads [`TOOL_ENV`], falling back to the default tool when unset or empty.
    pub fn from_env() -> Self {
        match env::var_os(TOOL_ENV) {
            Some(tool) if !tool.is_empty() => Self::with_tool(tool),
            _ => Self::default(),
        }
    }
}
