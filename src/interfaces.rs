//! Interface resolution: the default route interface and the list of all
//! interface names.

use std::path::Path;
use tracing::debug;

use crate::cmd_abstraction::{run_quietly, CommandExecutor};
use crate::tools::Tools;

/// Find the interface of the default route, if the routing table has one.
///
/// Tries the BSD form (`route -n get default`) first, then the Linux
/// net-tools table (`route -n`).
pub fn default_route_interface<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
) -> Option<String> {
    let route = tools.route.as_deref()?;

    for args in [&["-n", "get", "default"][..], &["-n"][..]] {
        let Some(output) = run_quietly(executor, route, args) else {
            continue;
        };
        if let Some(iface) = output.stdout_if_success().and_then(parse_default_route) {
            debug!("Default route interface: {}", iface);
            return Some(iface);
        }
    }

    debug!("No default route interface found");
    None
}

/// Extract the default route interface from `route` output.
///
/// Understands both the `interface: en0` field printed by BSD `route get`
/// and the `Iface` column of a Linux routing table.
pub fn parse_default_route(output: &str) -> Option<String> {
    for line in output.lines() {
        if let Some(value) = line.trim().strip_prefix("interface:") {
            let iface = value.trim();
            if !iface.is_empty() {
                return Some(iface.to_string());
            }
        }
    }

    // Destination Gateway Genmask Flags Metric Ref Use Iface
    output
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .find(|fields| {
            fields.len() >= 8 && (fields[0] == "0.0.0.0" || fields[0] == "default")
        })
        .and_then(|fields| fields.last().map(|iface| iface.to_string()))
}

/// List all interface names, in the order the tools report them.
///
/// Uses `ipconfig getiflist` when available, then `ifconfig -l`, then the
/// header lines of `ifconfig -a`. Returns an empty list if nothing works.
pub fn list_interfaces<E: CommandExecutor + ?Sized>(executor: &E, tools: &Tools) -> Vec<String> {
    if let Some(ipconfig) = tools.ipconfig.as_deref() {
        let names = word_list(executor, ipconfig, &["getiflist"]);
        if !names.is_empty() {
            debug!("ipconfig lists interfaces: {:?}", names);
            return names;
        }
    }

    let Some(ifconfig) = tools.ifconfig.as_deref() else {
        debug!("No tool available to list interfaces");
        return Vec::new();
    };

    let names = word_list(executor, ifconfig, &["-l"]);
    if !names.is_empty() {
        debug!("ifconfig -l lists interfaces: {:?}", names);
        return names;
    }

    let names = run_quietly(executor, ifconfig, &["-a"])
        .and_then(|output| output.stdout_if_success().map(parse_interface_headers))
        .unwrap_or_default();
    debug!("ifconfig -a lists interfaces: {:?}", names);
    names
}

/// Interface names from the header lines of `ifconfig -a` output.
///
/// A header line starts in the first column; the name ends at the first
/// colon or whitespace. Duplicates are dropped, order is kept.
pub fn parse_interface_headers(output: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for line in output.lines() {
        if line.is_empty() || line.starts_with(char::is_whitespace) {
            continue;
        }
        let name = line
            .split(|c: char| c == ':' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Whitespace separated distinct words printed by a successful command.
fn word_list<E: CommandExecutor + ?Sized>(executor: &E, cmd: &Path, args: &[&str]) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    let Some(output) = run_quietly(executor, cmd, args) else {
        return words;
    };
    if let Some(stdout) = output.stdout_if_success() {
        for word in stdout.split_whitespace() {
            if !words.iter().any(|w| w == word) {
                words.push(word.to_string());
            }
        }
    }
    words
}
