//! System metric sampling: CPU, RAM, temperature and network counters.

pub mod gauges;
pub mod sampler;
pub mod temperature;

pub use gauges::{Gauges, SysinfoGauges};
pub use sampler::MetricSampler;
pub use temperature::{CommandTemperature, TemperatureSource, ThermalZone};
