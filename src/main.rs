//! myip - print the local host's IP address.

use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use myip::cli::{parse_args, usage, Invocation};
use myip::cmd_abstraction::RealCommandExecutor;
use myip::error::{MyipError, EXIT_INFORMATIONAL, EXIT_SUCCESS};
use myip::lookup::{lookup, write_lines};
use myip::tools::Tools;
use myip::Options;

fn main() -> ExitCode {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("myip: {}", e);
            if matches!(e, MyipError::Usage { .. }) {
                eprintln!("{}", usage());
            }
            e.exit_code()
        }
    };
    ExitCode::from(code as u8)
}

fn run() -> Result<i32, MyipError> {
    let options = match parse_args(std::env::args_os())? {
        Invocation::Run(options) => options,
        Invocation::Informational(text) => {
            println!("{}", text.trim_end());
            return Ok(EXIT_INFORMATIONAL);
        }
    };

    init_logging(&options)?;

    let executor = RealCommandExecutor::new(options.tool_timeout)
        .map_err(|e| MyipError::Internal(format!("{:#}", e)))?;
    let tools = Tools::locate();

    let lines = lookup(&executor, &tools, &options)?;
    write_lines(&mut std::io::stdout().lock(), &lines)?;

    Ok(EXIT_SUCCESS)
}

// Setup logging based on verbosity
fn init_logging(options: &Options) -> Result<(), MyipError> {
    let log_level = match options.verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MyipError::Internal(format!("failed to set up logging: {}", e)))
}
