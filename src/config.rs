//! Operating mode for a single run.

use std::time::Duration;

use crate::cli::Cli;

/// Default timeout for each external tool invocation, in seconds
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 5;

/// Address family restriction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Family {
    /// IPv4 preferred, IPv6 accepted
    #[default]
    Any,
    /// IPv4 only (`-4`)
    V4Only,
    /// IPv6 only (`-6`)
    V6Only,
}

impl Family {
    pub fn allows_v4(&self) -> bool {
        *self != Family::V6Only
    }

    pub fn allows_v6(&self) -> bool {
        *self != Family::V4Only
    }

    /// Whether an address string belongs to an allowed family.
    pub fn accepts(&self, addr: &str) -> bool {
        if addr.contains(':') {
            self.allows_v6()
        } else {
            self.allows_v4()
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Any => "any",
            Family::V4Only => "ipv4",
            Family::V6Only => "ipv6",
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable operating mode, derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Only look at this interface (`-i`)
    pub interface: Option<String>,
    /// Fail instead of falling back when the default route yields nothing (`-d`)
    pub default_route_only: bool,
    /// Fail if more than one address would be printed (`-1`)
    pub single_address: bool,
    /// Keep 127.x.x.x and ::1 (`-0`)
    pub include_localhost: bool,
    /// Address family restriction (`-4` / `-6`)
    pub family: Family,
    /// Print interface names and exit (`-L`)
    pub list_interfaces: bool,
    /// Diagnostic verbosity (`-v`)
    pub verbosity: u8,
    /// Timeout for each external tool, `None` for no limit (`-t`)
    pub tool_timeout: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            interface: None,
            default_route_only: false,
            single_address: false,
            include_localhost: false,
            family: Family::Any,
            list_interfaces: false,
            verbosity: 0,
            tool_timeout: Some(Duration::from_secs(DEFAULT_TOOL_TIMEOUT_SECS)),
        }
    }
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        let family = if cli.ipv4_only {
            Family::V4Only
        } else if cli.ipv6_only {
            Family::V6Only
        } else {
            Family::Any
        };

        Self {
            interface: cli.interface,
            default_route_only: cli.default_route_only,
            single_address: cli.single_address,
            include_localhost: cli.include_localhost,
            family,
            list_interfaces: cli.list_interfaces,
            verbosity: cli.verbosity,
            tool_timeout: match cli.timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        }
    }
}
