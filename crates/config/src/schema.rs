use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure parsed from `pibench.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub window:      WindowConfig,
    pub sampler:     SamplerConfig,
    pub temperature: TemperatureConfig,
    pub stress:      StressConfig,
    pub speedtest:   SpeedTestConfig,
    pub video:       VideoConfig,
    pub theme:       ThemeConfig,
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title:  String,
    pub width:  f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:  "Raspberry Pi Benchmark Suite".to_string(),
            width:  1200.0,
            height: 800.0,
        }
    }
}

/// Tick rate and history length for the live charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Tick period in milliseconds.
    pub interval_ms: u64,
    /// Samples kept per chart series.
    pub history: usize,
    /// How network counters are plotted.
    pub network: NetworkMode,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1_000,
            history:     60,
            network:     NetworkMode::Delta,
        }
    }
}

/// Network series plotting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    /// MB transferred since the previous tick.
    #[default]
    Delta,
    /// MB transferred since boot.
    Cumulative,
}

/// Where the device temperature comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureConfig {
    pub source: TemperatureSourceKind,
    /// Command printing `temp=<float>'C`.
    pub command: String,
    pub args: Vec<String>,
    /// sysfs file holding millidegrees Celsius.
    pub thermal_zone: PathBuf,
}

impl Default for TemperatureConfig {
    fn default() -> Self {
        Self {
            source:       TemperatureSourceKind::Command,
            command:      "vcgencmd".to_string(),
            args:         vec!["measure_temp".to_string()],
            thermal_zone: PathBuf::from("/sys/class/thermal/thermal_zone0/temp"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TemperatureSourceKind {
    #[default]
    Command,
    ThermalZone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    pub duration_secs: u64,
    /// Worker threads; `0` = one per logical CPU.
    pub workers: usize,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            duration_secs: 10,
            workers:       0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedTestConfig {
    pub command: String,
    pub args:    Vec<String>,
}

impl Default for SpeedTestConfig {
    fn default() -> Self {
        Self {
            command: "speedtest-cli".to_string(),
            args:    vec!["--simple".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    /// Camera index, i.e. `/dev/video<N>`.
    pub device: usize,
    pub duration_secs: u64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            device:        0,
            duration_secs: 10,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1e1e2e"`).
    pub background: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent color for chart titles.
    pub accent: String,
    /// Chart plot-area background.
    pub chart_background: String,
    pub cpu_line:     String,
    pub ram_line:     String,
    pub net_in_line:  String,
    pub net_out_line: String,
    /// Font size in points.
    pub font_size: f32,
    /// Outer window padding (pixels).
    pub padding: u16,
    /// Gap between rows (pixels).
    pub spacing: u16,
    /// Height of each chart (pixels).
    pub chart_height: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:       "#1e1e2e".to_string(), // Catppuccin Mocha — base
            foreground:       "#cdd6f4".to_string(), // Catppuccin Mocha — text
            accent:           "#cba6f7".to_string(), // Catppuccin Mocha — mauve
            chart_background: "#181825".to_string(), // Catppuccin Mocha — mantle
            cpu_line:         "#89b4fa".to_string(), // blue
            ram_line:         "#f9e2af".to_string(), // yellow
            net_in_line:      "#a6e3a1".to_string(), // green
            net_out_line:     "#f38ba8".to_string(), // red
            font_size:        15.0,
            padding:          12,
            spacing:          8,
            chart_height:     170.0,
        }
    }
}
