//! Address extraction for a single interface.
//!
//! `ipconfig getifaddr NAME` is asked first (IPv4 only). Otherwise the output
//! of `ifconfig NAME` is scanned: the interface must be UP and RUNNING, the
//! first `inet` address wins, and the first `inet6` address is kept as the
//! fallback when no IPv4 address is usable.

use std::net::Ipv4Addr;
use std::path::Path;
use tracing::debug;

use crate::cmd_abstraction::{run_quietly, CommandExecutor};
use crate::config::{Family, Options};
use crate::tools::Tools;

/// Whether `addr` is a loopback address (127.x.x.x or ::1).
pub fn is_localhost(addr: &str) -> bool {
    addr.starts_with("127.") || addr == "::1"
}

/// Strip an IPv6 zone index (`fe80::1%en0` -> `fe80::1`).
pub fn strip_zone(addr: &str) -> &str {
    addr.split('%').next().unwrap_or(addr)
}

/// Apply the localhost policy to a found address.
pub fn filter_localhost(addr: String, options: &Options) -> Option<String> {
    if !options.include_localhost && is_localhost(&addr) {
        debug!("Ignoring localhost address {}", addr);
        None
    } else {
        Some(addr)
    }
}

/// Flags from the bracketed list on an ifconfig header line.
///
/// `en0: flags=8863<UP,BROADCAST,RUNNING>` yields `["UP", "BROADCAST", "RUNNING"]`.
/// A line without brackets has no flags.
pub fn interface_flags(line: &str) -> Vec<&str> {
    let Some(start) = line.find('<') else {
        return Vec::new();
    };
    let Some(len) = line[start + 1..].find('>') else {
        return Vec::new();
    };

    line[start + 1..start + 1 + len]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|flag| !flag.is_empty())
        .collect()
}

/// Scan `ifconfig NAME` output for the address to report.
pub fn scan_ifconfig(output: &str, family: Family) -> Option<String> {
    let mut lines = output.lines();

    let flags = interface_flags(lines.next()?);
    if !flags.contains(&"UP") || !flags.contains(&"RUNNING") {
        debug!("Interface is not UP and RUNNING: {:?}", flags);
        return None;
    }

    let mut ipv6: Option<String> = None;
    for line in lines {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("inet") if family.allows_v4() => {
                // Older net-tools print "inet addr:10.0.0.2"
                let addr = fields.next().unwrap_or("").trim_start_matches("addr:");
                if !addr.is_empty() {
                    return Some(addr.to_string());
                }
            }
            Some("inet6") if family.allows_v6() && ipv6.is_none() => {
                let addr = strip_zone(fields.next().unwrap_or(""));
                if !addr.is_empty() {
                    ipv6 = Some(addr.to_string());
                }
            }
            _ => {}
        }
    }

    ipv6
}

/// Find the address of interface `name`, or `None` if it has no usable one.
pub fn interface_address<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
    options: &Options,
    name: &str,
) -> Option<String> {
    if options.family.allows_v4() {
        if let Some(ipconfig) = &tools.ipconfig {
            if let Some(addr) = ipconfig_address(executor, ipconfig, name) {
                debug!("ipconfig reports {} for {}", addr, name);
                return filter_localhost(addr, options);
            }
        }
    }

    let ifconfig = tools.ifconfig.as_deref()?;
    let output = run_quietly(executor, ifconfig, &[name])?;
    let addr = scan_ifconfig(output.stdout_if_success()?, options.family)?;
    debug!("ifconfig reports {} for {}", addr, name);
    filter_localhost(addr, options)
}

fn ipconfig_address<E: CommandExecutor + ?Sized>(
    executor: &E,
    ipconfig: &Path,
    name: &str,
) -> Option<String> {
    let output = run_quietly(executor, ipconfig, &["getifaddr", name])?;
    let addr = output.stdout_if_success()?.trim();
    if addr.parse::<Ipv4Addr>().is_ok() {
        Some(addr.to_string())
    } else {
        None
    }
}
