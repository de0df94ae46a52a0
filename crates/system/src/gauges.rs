use sysinfo::{Networks, System};

/// Instantaneous OS gauges read once per tick.
pub trait Gauges: Send {
    /// Refresh the underlying counters; call once before reading.
    fn refresh(&mut self);

    /// Global CPU usage (0.0 – 100.0).
    fn cpu_percent(&self) -> f32;

    /// Used RAM as a percentage of total (0.0 – 100.0).
    fn ram_percent(&self) -> f32;

    /// Cumulative `(received, transmitted)` bytes across all interfaces.
    fn net_totals(&self) -> (u64, u64);
}

/// [`Gauges`] backed by `sysinfo`.
pub struct SysinfoGauges {
    sys:      System,
    networks: Networks,
}

impl SysinfoGauges {
    pub fn new() -> Self {
        let mut sys = System::new();
        // CPU usage is computed between two refreshes; prime the first one.
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        Self {
            sys,
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoGauges {
    fn default() -> Self {
        Self::new()
    }
}

impl Gauges for SysinfoGauges {
    fn refresh(&mut self) {
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();
        self.networks.refresh(true); // true = drop interfaces that went away
    }

    fn cpu_percent(&self) -> f32 {
        self.sys.global_cpu_usage().clamp(0.0, 100.0)
    }

    fn ram_percent(&self) -> f32 {
        let total = self.sys.total_memory();
        if total == 0 {
            return 0.0;
        }
        (self.sys.used_memory() as f64 / total as f64 * 100.0) as f32
    }

    fn net_totals(&self) -> (u64, u64) {
        self.networks.iter().fold((0, 0), |(rx, tx), (_, data)| {
            (rx + data.total_received(), tx + data.total_transmitted())
        })
    }
}
