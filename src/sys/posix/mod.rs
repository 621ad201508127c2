mod ifacename;
pub use ifacename::{InterfaceName, InterfaceNameError};

use log::warn;

/// Warns when the process is unlikely to be allowed to reconfigure interfaces.
pub fn warn_if_unprivileged() {
    let euid = nix::unistd::geteuid();
    if !euid.is_root() {
        warn!("Running as uid {euid}, changing a hardware address usually requires root");
    }
}
