//! Device temperature sources.
//!
//! The default reads the Raspberry Pi firmware via `vcgencmd measure_temp`;
//! boards without it can point at a sysfs thermal zone instead.

use pibench_config::{TemperatureConfig, TemperatureSourceKind};
use pibench_core::{Error, Result};
use std::path::PathBuf;
use std::process::Command;

/// Anything that can report the device temperature in °C.
pub trait TemperatureSource: Send {
    fn read_celsius(&mut self) -> Result<f32>;
}

/// Build the source selected in `[temperature]`.
pub fn from_config(cfg: &TemperatureConfig) -> Box<dyn TemperatureSource> {
    match cfg.source {
        TemperatureSourceKind::Command => {
            Box::new(CommandTemperature::new(cfg.command.clone(), cfg.args.clone()))
        }
        TemperatureSourceKind::ThermalZone => Box::new(ThermalZone::new(cfg.thermal_zone.clone())),
    }
}

/// Runs a command whose stdout looks like `temp=48.3'C`.
#[derive(Debug, Clone)]
pub struct CommandTemperature {
    program: String,
    args:    Vec<String>,
}

impl CommandTemperature {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl TemperatureSource for CommandTemperature {
    fn read_celsius(&mut self) -> Result<f32> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
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

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_measure_temp(&stdout).ok_or_else(|| {
            Error::TemperatureUnavailable(format!("unexpected output {:?}", stdout.trim()))
        })
    }
}

/// Parse `temp=<float>'C` (trailing newline allowed).
pub fn parse_measure_temp(raw: &str) -> Option<f32> {
    raw.trim()
        .strip_prefix("temp=")?
        .strip_suffix("'C")?
        .parse()
        .ok()
}

/// Reads a Linux thermal zone file (millidegrees Celsius).
#[derive(Debug, Clone)]
pub struct ThermalZone {
    path: PathBuf,
}

impl ThermalZone {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemperatureSource for ThermalZone {
    fn read_celsius(&mut self) -> Result<f32> {
        let raw = std::fs::read_to_string(&self.path)?;
        let millis: f32 = raw.trim().parse().map_err(|_| {
            Error::TemperatureUnavailable(format!(
                "'{}' holds {:?}, expected millidegrees",
                self.path.display(),
                raw.trim()
            ))
        })?;
        Ok(millis / 1000.0)
    }
}
