pub mod schema;

pub use schema::{
    BenchConfig, NetworkMode, SamplerConfig, SpeedTestConfig, StressConfig, TemperatureConfig,
    TemperatureSourceKind, ThemeConfig, VideoConfig, WindowConfig,
};

use pibench_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `BenchConfig::default()` if
/// the file doesn't exist, so the app behaves the same with no config at all.
pub fn load(path: impl AsRef<Path>) -> Result<BenchConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(BenchConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read '{}': {e}", path.display())))?;

    parse(&raw)
}

/// Parse configuration from TOML text.
pub fn parse(raw: &str) -> Result<BenchConfig> {
    toml::from_str(raw).map_err(|e| Error::Config(format!("TOML parse error: {e}")))
}

/// Load from [`default_path`], logging and falling back to defaults on error.
pub fn load_or_default() -> BenchConfig {
    load(default_path()).unwrap_or_else(|e| {
        tracing::warn!("{e}; using defaults");
        BenchConfig::default()
    })
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("pibench").join("pibench.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, BenchConfig::default());
    }

    #[test]
    fn defaults_match_reference_behaviour() {
        let cfg = BenchConfig::default();
        assert_eq!(cfg.sampler.interval_ms, 1_000);
        assert_eq!(cfg.sampler.history, 60);
        assert_eq!(cfg.sampler.network, NetworkMode::Delta);
        assert_eq!(cfg.temperature.command, "vcgencmd");
        assert_eq!(cfg.temperature.args, vec!["measure_temp"]);
        assert_eq!(cfg.speedtest.command, "speedtest-cli");
        assert_eq!(cfg.speedtest.args, vec!["--simple"]);
        assert_eq!(cfg.stress.duration_secs, 10);
        assert_eq!(cfg.stress.workers, 0);
        assert_eq!(cfg.video.device, 0);
        assert_eq!(cfg.video.duration_secs, 10);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[sampler]
network = "cumulative"

[temperature]
source = "thermal-zone"
thermal_zone = "/tmp/zone"

[stress]
workers = 2
"#
        )
        .unwrap();

        let cfg = load(file.path()).unwrap();
        assert_eq!(cfg.sampler.network, NetworkMode::Cumulative);
        assert_eq!(cfg.sampler.history, 60);
        assert_eq!(cfg.temperature.source, TemperatureSourceKind::ThermalZone);
        assert_eq!(cfg.temperature.thermal_zone, PathBuf::from("/tmp/zone"));
        assert_eq!(cfg.temperature.command, "vcgencmd");
        assert_eq!(cfg.stress.workers, 2);
        assert_eq!(cfg.stress.duration_secs, 10);
        assert_eq!(cfg.theme, ThemeConfig::default());
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let err = parse("[sampler]\ninterval_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("config error: TOML parse error"));
    }
}
