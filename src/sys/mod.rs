cfg_if::cfg_if! {
    if #[cfg(unix)] {
        pub mod posix;
    } else {
        compile_error!("macspoof only supports UNIX-like systems");
    }
}

/// Tool used when nothing else is configured.
pub const DEFAULT_TOOL: &str = "ifconfig";

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        // net-tools: `ifconfig eth0 hw ether 00:11:22:33:44:55`
        pub(crate) const ASSIGN_ARGS: &[&str] = &["hw", "ether"];
    } else {
        // BSD and macOS: `ifconfig en0 ether 00:11:22:33:44:55`
        pub(crate) const ASSIGN_ARGS: &[&str] = &["ether"];
    }
}

pub(crate) const DOWN_ARG: &str = "down";
pub(crate) const UP_ARG: &str = "up";
