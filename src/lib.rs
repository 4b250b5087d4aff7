//! # myip - print the local host's IP address
//!
//! Finds the interface of the default route and prints its address. When the
//! default route cannot be used it falls back to every interface, and then to
//! `hostname -I`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          myip                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap) -> Options                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Tools (which)                                              │
//! │    └── ipconfig, ifconfig, route, hostname on PATH          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CommandExecutor (tokio process + timeout, mockall in tests)│
//! ├─────────────────────────────────────────────────────────────┤
//! │  Lookup chain                                               │
//! │    ├── -L interface list                                    │
//! │    ├── -i explicit interface                                │
//! │    ├── default route interface                              │
//! │    ├── all interfaces                                       │
//! │    └── hostname -I                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use myip::cmd_abstraction::RealCommandExecutor;
//! use myip::config::Options;
//! use myip::lookup::lookup;
//! use myip::tools::Tools;
//!
//! fn main() -> anyhow::Result<()> {
//!     let options = Options::default();
//!     let executor = RealCommandExecutor::new(options.tool_timeout)?;
//!     let tools = Tools::locate();
//!
//!     for addr in lookup(&executor, &tools, &options)? {
//!         println!("{}", addr);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`address`] - Address extraction for one interface
//! - [`cli`] - Command-line interface definitions
//! - [`cmd_abstraction`] - Command execution abstraction
//! - [`config`] - Operating mode
//! - [`error`] - Error types and exit codes
//! - [`interfaces`] - Default route and interface listing
//! - [`lookup`] - The fallback chain
//! - [`tools`] - Helper program discovery

pub mod address;
pub mod cli;
pub mod cmd_abstraction;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod lookup;
pub mod tools;

pub use cli::{parse_args, Cli, Invocation};
pub use config::{Family, Options};
pub use error::MyipError;
