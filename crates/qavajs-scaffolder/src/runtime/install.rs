//! Package installation through the project's package manager

use crate::error::ScaffoldError;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Installs an ordered list of package identifiers into a working directory
#[allow(async_fn_in_trait)]
pub trait PackageInstaller {
    async fn install(&self, packages: &[String], cwd: &Path) -> Result<()>;
}

/// Runs `<program> <install|add> <packages...>` and streams its output.
///
/// Blocks until the command exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Subcommand that adds packages: `add` for yarn, pnpm and bun, `install` otherwise
    pub fn subcommand(&self) -> &'static str {
        let name = Path::new(&self.program)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.program);
        match name {
            "yarn" | "pnpm" | "bun" => "add",
            _ => "install",
        }
    }

    /// Full command line, for display
    pub fn command_line(&self, packages: &[String]) -> String {
        let mut parts = vec![self.program.as_str(), self.subcommand()];
        parts.extend(packages.iter().map(String::as_str));
        parts.join(" ")
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new("npm")
    }
}

impl PackageInstaller for CommandInstaller {
    async fn install(&self, packages: &[String], cwd: &Path) -> Result<()> {
        let cmd = self.command_line(packages);
        tracing::info!(command = %cmd, cwd = %cwd.display(), "running package install");
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let mut child = TokioCommand::new(&self.program)
            .arg(self.subcommand())
            .args(packages)
            .current_dir(cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start {}", self.program))?;

        let stdout = child
            .stdout
            .take()
            .context("Failed to capture installer stdout")?;
        let stderr = child
            .stderr
            .take()
            .context("Failed to capture installer stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();
        let mut stdout_open = true;
        let mut stderr_open = true;

        while stdout_open || stderr_open {
            tokio::select! {
                line = stdout_reader.next_line(), if stdout_open => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_open = false;
                        }
                    }
                }
                line = stderr_reader.next_line(), if stderr_open => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_open = false,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_open = false;
                        }
                    }
                }
            }
        }

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for {}", self.program))?;
        println!();

        if status.success() {
            Ok(())
        } else {
            Err(ScaffoldError::InstallFailed {
                program: self.program.clone(),
                code: status.code().unwrap_or(-1),
            }
            .into())
        }
    }
}
