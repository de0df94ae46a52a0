use pibench_config::SpeedTestConfig;
use pibench_core::{Error, Result};
use tokio::process::Command;

/// Runs an external speed-test utility once and returns its stdout verbatim.
#[derive(Debug, Clone)]
pub struct SpeedTest {
    program: String,
    args:    Vec<String>,
}

impl SpeedTest {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(cfg: &SpeedTestConfig) -> Self {
        Self::new(cfg.command.clone(), cfg.args.clone())
    }

    /// No timeout is applied beyond whatever the utility enforces itself.
    pub async fn run(&self) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: self.program.clone(),
                status:  output.status.to_string(),
                stderr:  String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
