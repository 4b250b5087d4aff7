//! Discovery of the external helper programs on `PATH`.

use std::path::PathBuf;
use tracing::debug;

/// Interface address query tool (`ipconfig getifaddr`, macOS)
pub const IPCONFIG: &str = "ipconfig";
/// Generic interface configuration tool
pub const IFCONFIG: &str = "ifconfig";
/// Routing table query tool
pub const ROUTE: &str = "route";
/// Hostname resolution tool (`hostname -I`)
pub const HOSTNAME: &str = "hostname";

/// Helper programs found on this host. `None` means not installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tools {
    pub ipconfig: Option<PathBuf>,
    pub ifconfig: Option<PathBuf>,
    pub route: Option<PathBuf>,
    pub hostname: Option<PathBuf>,
}

impl Tools {
    /// Search `PATH` for every helper program.
    pub fn locate() -> Self {
        let tools = Self {
            ipconfig: find(IPCONFIG),
            ifconfig: find(IFCONFIG),
            route: find(ROUTE),
            hostname: find(HOSTNAME),
        };
        debug!("Available tools: {:?}", tools);
        tools
    }

    /// True if no helper program was found at all.
    pub fn is_empty(&self) -> bool {
        self.ipconfig.is_none()
            && self.ifconfig.is_none()
            && self.route.is_none()
            && self.hostname.is_none()
    }
}

fn find(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => Some(path),
        Err(e) => {
            debug!("{} not available: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Tools::default().is_empty());
    }

    #[test]
    fn test_not_empty_with_one_tool() {
        let tools = Tools {
            route: Some(PathBuf::from("/sbin/route")),
            ..Default::default()
        };
        assert!(!tools.is_empty());
    }

    #[test]
    fn test_find_missing_tool() {
        assert!(find("myip-definitely-not-installed").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_existing_tool() {
        // sh is always on PATH on unix hosts
        let path = find("sh").unwrap();
        assert!(path.is_absolute());
    }
}
