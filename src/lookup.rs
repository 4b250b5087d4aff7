//! The fallback chain that decides what to print.
//!
//! Strategies run in a fixed order and the first one that produces output
//! wins: interface listing (`-L`), explicit interface (`-i`), default route,
//! every interface, and finally `hostname -I`.

use std::io::Write;
use tracing::{debug, info};

use crate::address::{filter_localhost, interface_address, strip_zone};
use crate::cmd_abstraction::{run_quietly, CommandExecutor};
use crate::config::Options;
use crate::error::MyipError;
use crate::interfaces::{default_route_interface, list_interfaces};
use crate::tools::Tools;

/// Run the fallback chain and return the lines to print.
pub fn lookup<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
    options: &Options,
) -> Result<Vec<String>, MyipError> {
    if options.list_interfaces {
        return interface_names(executor, tools);
    }

    if let Some(name) = options.interface.as_deref() {
        return explicit_interface(executor, tools, options, name);
    }

    if let Some(addr) = default_route_address(executor, tools, options) {
        return Ok(vec![addr]);
    }
    if options.default_route_only {
        return Err(MyipError::DefaultRouteNotFound);
    }

    let found = all_interface_addresses(executor, tools, options)?;
    if !found.is_empty() {
        return Ok(found);
    }

    let found = hostname_addresses(executor, tools, options)?;
    if !found.is_empty() {
        return Ok(found);
    }

    Err(MyipError::NoAddress)
}

/// Write each line to `out`.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

fn interface_names<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
) -> Result<Vec<String>, MyipError> {
    let names = list_interfaces(executor, tools);
    if names.is_empty() {
        Err(MyipError::NoInterfaces)
    } else {
        Ok(names)
    }
}

fn explicit_interface<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
    options: &Options,
    name: &str,
) -> Result<Vec<String>, MyipError> {
    match interface_address(executor, tools, options, name) {
        Some(addr) => Ok(vec![addr]),
        None => Err(MyipError::AddressNotFound(name.to_string())),
    }
}

fn default_route_address<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
    options: &Options,
) -> Option<String> {
    let iface = default_route_interface(executor, tools)?;
    let addr = interface_address(executor, tools, options, &iface);
    match &addr {
        Some(addr) => info!("Default route interface {} has address {}", iface, addr),
        None => info!("Default route interface {} has no usable address", iface),
    }
    addr
}

fn all_interface_addresses<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
    options: &Options,
) -> Result<Vec<String>, MyipError> {
    let mut found = Vec::new();
    for iface in list_interfaces(executor, tools) {
        if let Some(addr) = interface_address(executor, tools, options, &iface) {
            debug!("Interface {} has address {}", iface, addr);
            accumulate(&mut found, addr, options)?;
        }
    }
    if !found.is_empty() {
        info!("Found {} address(es) across all interfaces", found.len());
    }
    Ok(found)
}

fn hostname_addresses<E: CommandExecutor + ?Sized>(
    executor: &E,
    tools: &Tools,
    options: &Options,
) -> Result<Vec<String>, MyipError> {
    let mut found = Vec::new();
    let Some(hostname) = tools.hostname.as_deref() else {
        return Ok(found);
    };
    let Some(output) = run_quietly(executor, hostname, &["-I"]) else {
        return Ok(found);
    };

    for token in output.stdout_if_success().unwrap_or_default().split_whitespace() {
        let addr = strip_zone(token);
        if addr.is_empty() || !options.family.accepts(addr) {
            continue;
        }
        if let Some(addr) = filter_localhost(addr.to_string(), options) {
            accumulate(&mut found, addr, options)?;
        }
    }
    if !found.is_empty() {
        info!("hostname -I reports {} address(es)", found.len());
    }
    Ok(found)
}

/// Add an address, enforcing the single address cap.
fn accumulate(found: &mut Vec<String>, addr: String, options: &Options) -> Result<(), MyipError> {
    if options.single_address && !found.is_empty() {
        debug!("Second address {} found after {}", addr, found[0]);
        return Err(MyipError::MultipleAddresses);
    }
    found.push(addr);
    Ok(())
}
