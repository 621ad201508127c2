use crate::command::SystemRunner;
use crate::sys::posix::InterfaceName;
use crate::sys::{ASSIGN_ARGS, DOWN_ARG, UP_ARG};
use crate::{CommandRunner, Config, Error};
use log::{debug, info, warn};
use macaddr::MacAddr6;

/// Reads and replaces interface hardware addresses through an external
/// interface-configuration tool.
///
/// Holds no state between calls. Nothing prevents two managers from
/// reconfiguring the same interface at once, and the result is then
/// undefined.
#[derive(Clone, Debug)]
pub struct AddressManager<R = SystemRunner> {
    config: Config,
    runner: R,
}

impl AddressManager<SystemRunner> {
    /// Manager that runs the real tool, configured from the environment.
    pub fn system() -> Self {
        Self::new(Config::from_env(), SystemRunner)
    }
}

impl<R: CommandRunner> AddressManager<R> {
    pub fn new(config: Config, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generate_address(&self) -> MacAddr6 {
        MacAddr6::generate()
    }

    pub fn validate(&self, candidate: &str) -> bool {
        MacAddr6::is_valid(candidate)
    }

    /// Assigns `mac` to `interface`, or a generated address when `mac` is
    /// absent or malformed.
    ///
    /// The interface is taken down, given the new address and brought back
    /// up. Failures of those three steps are logged and otherwise ignored;
    /// the outcome is decided only by re-reading the interface afterwards.
    /// Nothing is rolled back, so on error the interface may be left down.
    pub fn set_address(&self, interface: &str, mac: Option<&str>) -> Result<MacAddr6, Error> {
        let name = InterfaceName::try_from(interface)?;
        let mac = self.resolve_candidate(mac);
        let mac_arg = mac.to_string();

        let mut assign = vec![name.as_str()];
        assign.extend_from_slice(ASSIGN_ARGS);
        assign.push(&mac_arg);

        self.run_step(&[name.as_str(), DOWN_ARG]);
        self.run_step(&assign);
        self.run_step(&[name.as_str(), UP_ARG]);

        let actual = self.get_current_address(interface)?;
        if actual != mac {
            return Err(Error::VerificationFailed {
                expected: mac,
                actual,
            });
        }

        info!("{name} now uses hardware address {mac}");
        Ok(mac)
    }

    /// Returns the first hardware address found in the tool's report for
    /// `interface`.
    pub fn get_current_address(&self, interface: &str) -> Result<MacAddr6, Error> {
        let name = InterfaceName::try_from(interface)?;
        let output = self
            .runner
            .run(self.config.tool.as_os_str(), &[name.as_str()])?;

        MacAddr6::find_in(&output).ok_or(Error::AddressNotFound)
    }

    fn resolve_candidate(&self, mac: Option<&str>) -> MacAddr6 {
        match mac {
            Some(candidate) if self.validate(candidate) => match candidate.parse() {
                Ok(mac) => return mac,
                Err(e) => warn!("Cannot use {candidate:?}: {e}"),
            },
            Some(candidate) => warn!("Ignoring malformed address {candidate:?}"),
            None => {}
        }

        let mac = self.generate_address();
        debug!("Generated address {mac}");
        mac
    }

    fn run_step(&self, args: &[&str]) {
        if let Err(e) = self.runner.run(self.config.tool.as_os_str(), args) {
            warn!("`{}` failed: {e}", args.join(" "));
        }
    }
}

#[cfg(test)]
mod test {
    use super::AddressManager;
    use crate::sys::ASSIGN_ARGS;
    use crate::{CommandRunner, Config, Error};
    use macaddr::MacAddr6;
    use std::cell::RefCell;
    use std::ffi::OsStr;
    use std::io;

    /// Pretends to be `ifconfig` for a single interface.
    #[derive(Default)]
    struct FakeIfconfig {
        calls: RefCell<Vec<Vec<String>>>,
        current: RefCell<Option<String>>,
        ignore_assign: bool,
        fail_steps: bool,
    }

    impl FakeIfconfig {
        fn with_current(mac: &str) -> Self {
            Self {
                current: RefCell::new(Some(mac.to_string())),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for FakeIfconfig {
        fn run(&self, program: &OsStr, args: &[&str]) -> Result<String, Error> {
            assert_eq!(program, OsStr::new("ifconfig"));
            self.calls
                .borrow_mut()
                .push(args.iter().map(|a| a.to_string()).collect());

            if args.len() == 1 {
                return Ok(match self.current.borrow().as_deref() {
                    Some(mac) => format!(
                        "{} Link encap:Ethernet  HWaddr {}\n  UP BROADCAST MTU:1500\n",
                        args[0],
                        mac.to_lowercase()
                    ),
                    None => format!("{}: flags=73<UP,LOOPBACK,RUNNING>\n", args[0]),
                });
            }
            if self.fail_steps {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "SIOCSIFFLAGS: Operation not permitted",
                )));
            }
            if args[1..args.len() - 1] == *ASSIGN_ARGS && !self.ignore_assign {
                *self.current.borrow_mut() = Some(args[args.len() - 1].to_string());
            }
            Ok(String::new())
        }
    }

    fn manager(fake: &FakeIfconfig) -> AddressManager<&FakeIfconfig> {
        AddressManager::new(Config::default(), fake)
    }

    #[test]
    fn test_get_current_address() {
        let fake = FakeIfconfig::with_current("00:1a:2b:3c:4d:5e");
        let mac = manager(&fake).get_current_address("eth0").unwrap();
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
        assert_eq!(fake.calls(), vec![vec!["eth0".to_string()]]);
    }

    #[test]
    fn test_get_current_address_not_found() {
        let fake = FakeIfconfig::default();
        let err = manager(&fake).get_current_address("lo").unwrap_err();
        assert!(matches!(err, Error::AddressNotFound));
    }

    #[test]
    fn test_set_address_runs_steps_in_order() {
        let fake = FakeIfconfig::with_current("00:11:22:33:44:55");
        let mac = manager(&fake)
            .set_address("eth0", Some("00:1A:2B:3C:4D:5E"))
            .unwrap();
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");

        let mut assign = vec!["eth0".to_string()];
        assign.extend(ASSIGN_ARGS.iter().map(|a| a.to_string()));
        assign.push("00:1A:2B:3C:4D:5E".to_string());

        assert_eq!(
            fake.calls(),
            vec![
                vec!["eth0".to_string(), "down".to_string()],
                assign,
                vec!["eth0".to_string(), "up".to_string()],
                vec!["eth0".to_string()],
            ]
        );
    }

    #[test]
    fn test_set_address_normalizes_candidate() {
        let fake = FakeIfconfig::with_current("00:11:22:33:44:55");
        let mac = manager(&fake)
            .set_address("eth0", Some("00-1a-2b-3c-4d-5e"))
            .unwrap();
        assert_eq!(mac.to_string(), "00:1A:2B:3C:4D:5E");
        assert_eq!(
            fake.calls()[1].last().map(String::as_str),
            Some("00:1A:2B:3C:4D:5E")
        );
    }

    #[test]
    fn test_set_address_replaces_invalid_candidate() {
        let fake = FakeIfconfig::with_current("00:11:22:33:44:55");
        let mac = manager(&fake)
            .set_address("eth0", Some("GG:11:22:33:44:55"))
            .unwrap();

        let applied = fake.calls()[1].last().cloned().unwrap();
        assert_ne!(applied, "GG:11:22:33:44:55");
        assert!(MacAddr6::is_valid(&applied));
        assert!(applied.starts_with("00:"));
        assert_eq!(mac.to_string(), applied);
    }

    #[test]
    fn test_set_address_generates_when_missing() {
        let fake = FakeIfconfig::with_current("00:11:22:33:44:55");
        let mac = manager(&fake).set_address("eth0", None).unwrap();
        assert_eq!(mac.as_slice()[0], 0x00);
        assert_eq!(fake.calls().len(), 4);
    }

    #[test]
    fn test_set_address_verification_mismatch() {
        let fake = FakeIfconfig {
            ignore_assign: true,
            ..FakeIfconfig::with_current("00:11:22:33:44:55")
        };
        let err = manager(&fake)
            .set_address("eth0", Some("00:1A:2B:3C:4D:5E"))
            .unwrap_err();
        match err {
            Error::VerificationFailed { expected, actual } => {
                assert_eq!(expected.to_string(), "00:1A:2B:3C:4D:5E");
                assert_eq!(actual.to_string(), "00:11:22:33:44:55");
            }
            e => panic!("unexpected error: {e}"),
        }
    }

    #[test]
    fn test_set_address_step_failures_do_not_abort() {
        let fake = FakeIfconfig {
            fail_steps: true,
            ..FakeIfconfig::with_current("00:11:22:33:44:55")
        };
        let err = manager(&fake)
            .set_address("eth0", Some("00:1A:2B:3C:4D:5E"))
            .unwrap_err();
        assert!(matches!(err, Error::VerificationFailed { .. }));
        assert_eq!(fake.calls().len(), 4);
    }

    #[test]
    fn test_set_address_rejects_interface_before_running() {
        let fake = FakeIfconfig::with_current("00:11:22:33:44:55");
        let err = manager(&fake)
            .set_address("eth0; reboot", None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInterfaceName(_)));
        assert!(fake.calls().is_empty());
    }

    #[test]
    fn test_generate_and_validate() {
        let fake = FakeIfconfig::default();
        let manager = manager(&fake);
        let mac = manager.generate_address();
        assert!(manager.validate(&mac.to_string()));
        assert!(!manager.validate("00:1A:2B:3C:4D"));
    }
}
