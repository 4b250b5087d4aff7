//! CLI argument parsing with clap.
//!
//! clap's own help and version flags are disabled: `-h` and `-V` are plain
//! flags here so that they can leave through the informational exit code
//! instead of clap's exit 0.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

use crate::config::{Options, DEFAULT_TOOL_TIMEOUT_SECS};
use crate::error::{MyipError, UsageKind};

const EXIT_CODES: &str = "\
Exit codes:
    0   IP address(es) printed
    1   no IP address determined
    2   help or version printed
    3   command line error
    4   -d given and the default route address was not found
    5   -1 given and more than one address was found
    6   -L given and no interfaces were found
   >=10 internal error";

#[derive(Parser, Debug)]
#[command(name = "myip")]
#[command(
    about = "Print the IP address of this host, preferring the default route interface",
    after_help = EXIT_CODES
)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Print help and exit
    #[arg(short = 'h')]
    pub help: bool,

    /// Set verbosity level
    #[arg(short = 'v', value_name = "LEVEL", default_value_t = 0)]
    pub verbosity: u8,

    /// Print version and exit
    #[arg(short = 'V')]
    pub version: bool,

    /// Only use the default route interface, never fall back to other interfaces
    #[arg(short = 'd')]
    pub default_route_only: bool,

    /// Print at most one address; fail if more than one is found
    #[arg(short = '1')]
    pub single_address: bool,

    /// Include localhost addresses (127.x.x.x and ::1)
    #[arg(short = '0')]
    pub include_localhost: bool,

    /// Only print IPv4 addresses
    #[arg(short = '4', conflicts_with = "ipv6_only")]
    pub ipv4_only: bool,

    /// Only print IPv6 addresses
    #[arg(short = '6')]
    pub ipv6_only: bool,

    /// Only use interface NAME
    #[arg(short = 'i', value_name = "NAME")]
    pub interface: Option<String>,

    /// List interface names and exit
    #[arg(short = 'L')]
    pub list_interfaces: bool,

    /// Timeout in seconds for each external tool (0 = no timeout)
    #[arg(short = 't', value_name = "SECS", default_value_t = DEFAULT_TOOL_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// What the command line asks for
#[derive(Debug)]
pub enum Invocation {
    /// Look up addresses with these options
    Run(Options),
    /// Print this text and take the informational exit
    Informational(String),
}

/// Parse command-line arguments (including the program name).
pub fn parse_args<I, T>(args: I) -> Result<Invocation, MyipError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(usage_error)?;

    if cli.help {
        return Ok(Invocation::Informational(
            Cli::command().render_help().to_string(),
        ));
    }
    if cli.version {
        return Ok(Invocation::Informational(version_string()));
    }

    Ok(Invocation::Run(Options::from(cli)))
}

/// One-line usage summary, printed after command-line errors.
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

pub fn version_string() -> String {
    format!("myip {}", env!("CARGO_PKG_VERSION"))
}

fn usage_error(err: clap::Error) -> MyipError {
    let kind = match err.kind() {
        ErrorKind::ArgumentConflict => UsageKind::ConflictingOptions,
        ErrorKind::InvalidValue | ErrorKind::MissingRequiredArgument => {
            UsageKind::MissingArgument
        }
        _ => UsageKind::InvalidOption,
    };

    // Keep only the first line of clap's report, without its "error: " prefix
    let rendered = err.to_string();
    let message = rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();

    MyipError::usage(kind, message)
}
