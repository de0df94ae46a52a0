use crate::window::RollingWindow;
use chrono::{DateTime, Local};

/// One tick's worth of system readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Global CPU usage (0.0 – 100.0).
    pub cpu_percent: f32,
    /// Used RAM as a percentage of total (0.0 – 100.0).
    pub ram_percent: f32,
    /// Device temperature; `0.0` when the sensor is unavailable.
    pub temp_celsius: f32,
    /// Network received, in MB (per-tick or cumulative depending on config).
    pub net_in_mb: f64,
    /// Network sent, in MB (per-tick or cumulative depending on config).
    pub net_out_mb: f64,
    pub taken_at: DateTime<Local>,
}

/// Terminal outcome of a benchmark job.
///
/// Errors are carried as display text so the result stays `Clone` and can
/// travel through the UI message loop.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkResult {
    /// Stress test finished; side effects only.
    Stress,
    /// Raw speed-test output, or an error message.
    SpeedTest(Result<String, String>),
    /// Measured frames per second, or an error message.
    Video(Result<f64, String>),
}

pub const SPEED_IDLE: &str = "Speed Test: Not Run";
pub const SPEED_RUNNING: &str = "Running speed test...";
pub const VIDEO_IDLE: &str = "Video FPS: Not Running";

/// Everything the window shows: four chart series plus five labels.
///
/// Label text always reflects the most recent update.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub cpu:     RollingWindow,
    pub ram:     RollingWindow,
    pub net_in:  RollingWindow,
    pub net_out: RollingWindow,

    pub cpu_label:   String,
    pub ram_label:   String,
    pub temp_label:  String,
    pub speed_label: String,
    pub video_label: String,

    /// When the last tick was applied.
    pub last_tick: Option<DateTime<Local>>,
}

impl Dashboard {
    pub fn new(history: usize) -> Self {
        Self {
            cpu:     RollingWindow::new(history),
            ram:     RollingWindow::new(history),
            net_in:  RollingWindow::new(history),
            net_out: RollingWindow::new(history),

            cpu_label:   "CPU Usage: ".to_string(),
            ram_label:   "RAM Usage: ".to_string(),
            temp_label:  "CPU Temp: ".to_string(),
            speed_label: SPEED_IDLE.to_string(),
            video_label: VIDEO_IDLE.to_string(),

            last_tick: None,
        }
    }

    /// Apply one tick: labels and all four series move together.
    pub fn on_tick(&mut self, sample: &Sample) {
        self.cpu_label  = format!("CPU Usage: {:.1}%", sample.cpu_percent);
        self.ram_label  = format!("RAM Usage: {:.1}%", sample.ram_percent);
        self.temp_label = format!("CPU Temp: {:.1}°C", sample.temp_celsius);

        self.cpu.push(sample.cpu_percent);
        self.ram.push(sample.ram_percent);
        self.net_in.push(sample.net_in_mb as f32);
        self.net_out.push(sample.net_out_mb as f32);

        self.last_tick = Some(sample.taken_at);
    }

    pub fn on_speed_test_started(&mut self) {
        self.speed_label = SPEED_RUNNING.to_string();
    }

    pub fn on_benchmark_result(&mut self, result: &BenchmarkResult) {
        match result {
            BenchmarkResult::Stress => {}
            BenchmarkResult::SpeedTest(Ok(text)) => self.speed_label = text.clone(),
            BenchmarkResult::SpeedTest(Err(e)) => self.speed_label = format!("Error: {e}"),
            BenchmarkResult::Video(Ok(fps)) => {
                self.video_label = format!("Video FPS: {fps:.1} fps");
            }
            BenchmarkResult::Video(Err(e)) => self.video_label = format!("Error: {e}"),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(crate::window::DEFAULT_CAPACITY)
    }
}
