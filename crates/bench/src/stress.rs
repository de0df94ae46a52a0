use pibench_config::StressConfig;
use pibench_core::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{info, warn};

/// Saturates every core for a fixed duration.
///
/// Each worker spins on floating-point trig until a shared stop flag is set
/// at the deadline; the job cannot be stopped earlier.
#[derive(Debug, Clone)]
pub struct StressJob {
    workers:  usize,
    duration: Duration,
}

impl StressJob {
    /// `workers == 0` means one per logical CPU.
    pub fn new(workers: usize, duration: Duration) -> Self {
        let workers = if workers == 0 { num_cpus::get() } else { workers };
        Self {
            workers: workers.max(1),
            duration,
        }
    }

    pub fn from_config(cfg: &StressConfig) -> Self {
        Self::new(cfg.workers, Duration::from_secs(cfg.duration_secs))
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Blocks for the full duration, then returns how many workers were joined.
    pub fn run(&self) -> Result<usize> {
        let stop = Arc::new(AtomicBool::new(false));
        let mut handles = Vec::with_capacity(self.workers);

        for i in 0..self.workers {
            let flag = Arc::clone(&stop);
            let spawned = thread::Builder::new()
                .name(format!("stress-{i}"))
                .spawn(move || spin(&flag));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    stop.store(true, Ordering::Relaxed);
                    join_all(handles);
                    return Err(Error::Worker(format!("cannot spawn stress worker {i}: {e}")));
                }
            }
        }

        info!(workers = self.workers, secs = self.duration.as_secs_f64(), "Stress test running");
        thread::sleep(self.duration);
        stop.store(true, Ordering::Relaxed);

        Ok(join_all(handles))
    }
}

fn spin(stop: &AtomicBool) {
    let mut x = 1.0_f64;
    while !stop.load(Ordering::Relaxed) {
        x += x.sin();
        std::hint::black_box(x);
    }
}

fn join_all(handles: Vec<JoinHandle<()>>) -> usize {
    let mut joined = 0;
    for handle in handles {
        match handle.join() {
            Ok(()) => joined += 1,
            Err(_) => warn!("Stress worker panicked"),
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn zero_workers_means_every_cpu() {
        let job = StressJob::new(0, Duration::from_secs(1));
        assert_eq!(job.workers(), num_cpus::get());
    }

    #[test]
    fn from_config_uses_duration() {
        let job = StressJob::from_config(&StressConfig {
            duration_secs: 3,
            workers:       2,
        });
        assert_eq!(job.workers(), 2);
        assert_eq!(job.duration(), Duration::from_secs(3));
    }

    #[test]
    fn all_workers_stop_shortly_after_deadline() {
        let job = StressJob::new(2, Duration::from_millis(200));

        let started = Instant::now();
        let joined = job.run().unwrap();
        let elapsed = started.elapsed();

        assert_eq!(joined, 2);
        assert!(elapsed >= Duration::from_millis(200));
        assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
    }
}
