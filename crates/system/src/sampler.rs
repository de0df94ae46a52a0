use crate::gauges::{Gauges, SysinfoGauges};
use crate::temperature::{self, TemperatureSource};
use chrono::Local;
use pibench_config::{BenchConfig, NetworkMode};
use pibench_core::Sample;
use tracing::debug;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Reads one [`Sample`] per tick.
///
/// Never fails: an unavailable temperature reads as `0.0`.
pub struct MetricSampler {
    gauges:      Box<dyn Gauges>,
    temperature: Box<dyn TemperatureSource>,
    network:     NetworkMode,
    /// Cumulative counters from the previous tick, for delta mode.
    last_net:    Option<(u64, u64)>,
}

impl MetricSampler {
    pub fn new(
        gauges: Box<dyn Gauges>,
        temperature: Box<dyn TemperatureSource>,
        network: NetworkMode,
    ) -> Self {
        Self {
            gauges,
            temperature,
            network,
            last_net: None,
        }
    }

    /// Sampler over the real OS, configured from `[sampler]` and `[temperature]`.
    pub fn from_config(cfg: &BenchConfig) -> Self {
        Self::new(
            Box::new(SysinfoGauges::new()),
            temperature::from_config(&cfg.temperature),
            cfg.sampler.network,
        )
    }

    pub fn sample(&mut self) -> Sample {
        self.gauges.refresh();

        let temp_celsius = match self.temperature.read_celsius() {
            Ok(t) => t,
            Err(e) => {
                debug!("Temperature unavailable: {e}");
                0.0
            }
        };

        let (rx, tx) = self.gauges.net_totals();
        let (net_in, net_out) = match self.network {
            NetworkMode::Cumulative => (rx, tx),
            NetworkMode::Delta => {
                // First tick has no baseline; counters that went backwards
                // (interface removed) read as zero rather than wrapping.
                let (prev_rx, prev_tx) = self.last_net.unwrap_or((rx, tx));
                (rx.saturating_sub(prev_rx), tx.saturating_sub(prev_tx))
            }
        };
        self.last_net = Some((rx, tx));

        Sample {
            cpu_percent: self.gauges.cpu_percent(),
            ram_percent: self.gauges.ram_percent(),
            temp_celsius,
            net_in_mb: net_in as f64 / BYTES_PER_MB,
            net_out_mb: net_out as f64 / BYTES_PER_MB,
            taken_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pibench_core::{Error, Result};
    use std::collections::VecDeque;

    const MB: u64 = 1024 * 1024;

    /// Replays a fixed script of readings, one entry per refresh.
    struct ScriptedGauges {
        script:  VecDeque<(f32, f32, u64, u64)>,
        current: (f32, f32, u64, u64),
    }

    impl ScriptedGauges {
        fn new(script: impl IntoIterator<Item = (f32, f32, u64, u64)>) -> Self {
            Self {
                script:  script.into_iter().collect(),
                current: (0.0, 0.0, 0, 0),
            }
        }
    }

    impl Gauges for ScriptedGauges {
        fn refresh(&mut self) {
            if let Some(next) = self.script.pop_front() {
                self.current = next;
            }
        }
        fn cpu_percent(&self) -> f32 {
            self.current.0
        }
        fn ram_percent(&self) -> f32 {
            self.current.1
        }
        fn net_totals(&self) -> (u64, u64) {
            (self.current.2, self.current.3)
        }
    }

    struct FixedTemp(f32);

    impl TemperatureSource for FixedTemp {
        fn read_celsius(&mut self) -> Result<f32> {
            Ok(self.0)
        }
    }

    struct BrokenTemp;

    impl TemperatureSource for BrokenTemp {
        fn read_celsius(&mut self) -> Result<f32> {
            Err(Error::TemperatureUnavailable("vcgencmd: not found".into()))
        }
    }

    #[test]
    fn reads_gauges_and_temperature() {
        let mut sampler = MetricSampler::new(
            Box::new(ScriptedGauges::new([(37.5, 61.0, 0, 0)])),
            Box::new(FixedTemp(49.2)),
            NetworkMode::Delta,
        );

        let s = sampler.sample();
        assert_eq!(s.cpu_percent, 37.5);
        assert_eq!(s.ram_percent, 61.0);
        assert_eq!(s.temp_celsius, 49.2);
    }

    #[test]
    fn failed_temperature_reads_zero() {
        let mut sampler = MetricSampler::new(
            Box::new(ScriptedGauges::new([(10.0, 20.0, 0, 0)])),
            Box::new(BrokenTemp),
            NetworkMode::Delta,
        );

        assert_eq!(sampler.sample().temp_celsius, 0.0);
    }

    #[test]
    fn delta_mode_reports_per_tick_megabytes() {
        let mut sampler = MetricSampler::new(
            Box::new(ScriptedGauges::new([
                (0.0, 0.0, 100 * MB, 10 * MB),
                (0.0, 0.0, 103 * MB, 11 * MB),
                (0.0, 0.0, 103 * MB, 11 * MB),
                // counters went backwards (interface removed)
                (0.0, 0.0, 50 * MB, 5 * MB),
            ])),
            Box::new(FixedTemp(0.0)),
            NetworkMode::Delta,
        );

        let first = sampler.sample();
        assert_eq!((first.net_in_mb, first.net_out_mb), (0.0, 0.0));

        let second = sampler.sample();
        assert_eq!((second.net_in_mb, second.net_out_mb), (3.0, 1.0));

        let idle = sampler.sample();
        assert_eq!((idle.net_in_mb, idle.net_out_mb), (0.0, 0.0));

        let reset = sampler.sample();
        assert_eq!((reset.net_in_mb, reset.net_out_mb), (0.0, 0.0));
    }

    #[test]
    fn cumulative_mode_reports_totals() {
        let mut sampler = MetricSampler::new(
            Box::new(ScriptedGauges::new([
                (0.0, 0.0, 100 * MB, 10 * MB),
                (0.0, 0.0, 103 * MB, 11 * MB),
            ])),
            Box::new(FixedTemp(0.0)),
            NetworkMode::Cumulative,
        );

        let first = sampler.sample();
        assert_eq!((first.net_in_mb, first.net_out_mb), (100.0, 10.0));

        let second = sampler.sample();
        assert_eq!((second.net_in_mb, second.net_out_mb), (103.0, 11.0));
    }
}
