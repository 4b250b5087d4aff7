//! Command execution abstraction for testability.
//!
//! Every helper program (`ipconfig`, `ifconfig`, `route`, `hostname`) is run
//! through the [`CommandExecutor`] trait, so the parsers and the fallback chain
//! can be unit tested with scripted output instead of the host's real tools.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, trace};

#[cfg(test)]
use mockall::automock;

/// Output from command execution
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
    /// Whether the command succeeded (exit code 0)
    pub success: bool,
    /// The exit code, if available
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Stdout of a successful run, `None` if the command failed.
    pub fn stdout_if_success(&self) -> Option<&str> {
        if self.success {
            Some(&self.stdout)
        } else {
            None
        }
    }
}

/// Trait for command execution, allowing dependency injection for testing.
#[cfg_attr(test, automock)]
pub trait CommandExecutor {
    /// Execute a command with the given arguments.
    ///
    /// # Arguments
    /// * `cmd` - Path of the program to run (e.g., "/sbin/ifconfig")
    /// * `args` - The arguments to pass to the command
    ///
    /// # Returns
    /// A `CommandOutput` with stdout, stderr and exit status. An `Err` means the
    /// program could not be run at all or did not finish in time.
    fn execute(&self, cmd: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// Real implementation of CommandExecutor that runs actual system commands.
///
/// Commands run on a current-thread runtime so that a hung helper can be
/// killed once the timeout expires.
#[derive(Debug)]
pub struct RealCommandExecutor {
    runtime: tokio::runtime::Runtime,
    timeout: Option<Duration>,
}

impl RealCommandExecutor {
    /// Create an executor; `None` disables the per-command timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start command runtime")?;
        Ok(Self { runtime, timeout })
    }
}

impl CommandExecutor for RealCommandExecutor {
    fn execute(&self, cmd: &Path, args: &[String]) -> Result<CommandOutput> {
        debug!("Running {} {}", cmd.display(), args.join(" "));

        let mut command = Command::new(cmd);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = self.runtime.block_on(async {
            let child = command.output();
            match self.timeout {
                Some(limit) => match tokio::time::timeout(limit, child).await {
                    Ok(result) => result.with_context(|| format!("failed to run {}", cmd.display())),
                    Err(_) => Err(anyhow!(
                        "{} timed out after {} ms",
                        cmd.display(),
                        limit.as_millis()
                    )),
                },
                None => child
                    .await
                    .with_context(|| format!("failed to run {}", cmd.display())),
            }
        })?;

        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        };
        trace!("{} exited with {:?}: {}", cmd.display(), result.code, result.stdout);
        Ok(result)
    }
}

/// Helper function to convert a slice of &str to Vec<String>.
///
/// mockall has issues with lifetimes in `&[&str]`, so the trait takes
/// `&[String]` instead.
pub fn args_to_strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// Run a command, logging and swallowing failures to spawn.
///
/// A helper that cannot be run is treated the same as one that printed
/// nothing, so the caller simply moves on to its next strategy.
pub fn run_quietly<E: CommandExecutor + ?Sized>(
    executor: &E,
    cmd: &Path,
    args: &[&str],
) -> Option<CommandOutput> {
    match executor.execute(cmd, &args_to_strings(args)) {
        Ok(output) => {
            if !output.success {
                debug!(
                    "{} {} exited with {:?}: {}",
                    cmd.display(),
                    args.join(" "),
                    output.code,
                    output.stderr.trim()
                );
            }
            Some(output)
        }
        Err(e) => {
            debug!("{:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_to_strings() {
        let args = args_to_strings(&["-n", "get", "default"]);
        assert_eq!(args, vec!["-n", "get", "default"]);
    }

    #[test]
    fn test_args_to_strings_empty() {
        let args = args_to_strings(&[]);
        assert!(args.is_empty());
    }

    #[test]
    fn test_command_output_default() {
        let output = CommandOutput::default();
        assert!(output.stdout.is_empty());
        assert!(output.stderr.is_empty());
        assert!(!output.success);
        assert!(output.code.is_none());
        assert!(output.stdout_if_success().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_real_command_executor_execute_echo() {
        let executor = RealCommandExecutor::new(Some(Duration::from_secs(5))).unwrap();
        let args = args_to_strings(&["-n", "hello"]);
        let output = executor.execute(Path::new("echo"), &args).unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_real_command_executor_execute_failure() {
        let executor = RealCommandExecutor::new(None).unwrap();
        let args = args_to_strings(&["--invalid-flag"]);
        // The command runs, it just fails
        let output = executor.execute(Path::new("ls"), &args).unwrap();
        assert!(!output.success);
    }

    #[test]
    fn test_real_command_executor_missing_program() {
        let executor = RealCommandExecutor::new(None).unwrap();
        let result = executor.execute(Path::new("/nonexistent/myip-no-such-tool"), &[]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_real_command_executor_timeout() {
        let executor = RealCommandExecutor::new(Some(Duration::from_millis(100))).unwrap();
        let args = args_to_strings(&["5"]);
        let err = executor.execute(Path::new("sleep"), &args).unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_run_quietly_swallows_spawn_errors() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_execute()
            .times(1)
            .returning(|_, _| Err(anyhow!("no such file")));

        assert!(run_quietly(&mock, Path::new("/sbin/route"), &["-n"]).is_none());
    }

    #[test]
    fn test_run_quietly_passes_arguments() {
        let mut mock = MockCommandExecutor::new();
        mock.expect_execute()
            .withf(|cmd, args| {
                cmd == Path::new("/usr/sbin/ipconfig")
                    && args == ["getifaddr".to_string(), "en0".to_string()]
            })
            .times(1)
            .returning(|_, _| {
                Ok(CommandOutput {
                    stdout: "10.0.0.2\n".to_string(),
                    stderr: String::new(),
                    success: true,
                    code: Some(0),
                })
            });

        let output = run_quietly(&mock, Path::new("/usr/sbin/ipconfig"), &["getifaddr", "en0"]);
        assert_eq!(output.unwrap().stdout_if_success(), Some("10.0.0.2\n"));
    }
}
