//! Reading and spoofing network interface hardware addresses on UNIX-like
//! systems by driving the interface-configuration tool (`ifconfig`).

mod command;
mod config;
mod error;
mod manager;
mod traits;
pub mod sys;

pub use command::SystemRunner;
pub use config::{Config, TOOL_ENV};
pub use error::Error;
pub use macaddr::{self, MacAddr6};
pub use manager::AddressManager;
pub use sys::posix::{InterfaceName, InterfaceNameError};
pub use traits::CommandRunner;

/// Generates an address whose first group is `00`.
pub fn generate_address() -> MacAddr6 {
    MacAddr6::generate()
}

/// Checks that `candidate` is a six-group hex address separated by `:` or `-`.
pub fn validate(candidate: &str) -> bool {
    MacAddr6::is_valid(candidate)
}

/// Spoofs the hardware address of `interface` using the system tool.
pub fn set_address(interface: &str, mac: Option<&str>) -> Result<MacAddr6, Error> {
    AddressManager::system().set_address(interface, mac)
}

/// Reads the hardware address of `interface` using the system tool.
pub fn get_current_address(interface: &str) -> Result<MacAddr6, Error> {
    AddressManager::system().get_current_address(interface)
}
