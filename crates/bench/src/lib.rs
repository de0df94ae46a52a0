//! On-demand benchmark jobs.
//!
//! Each runner performs one job on a background thread and resolves to a
//! single [`BenchmarkResult`]; failures are folded into the result as text
//! so the caller never has to handle an error.

pub mod speedtest;
pub mod stress;
pub mod video;

pub use speedtest::SpeedTest;
pub use stress::StressJob;
pub use video::{Camera, DefaultCamera, FrameSource, VideoJob};

use pibench_config::{SpeedTestConfig, StressConfig, VideoConfig};
use pibench_core::BenchmarkResult;
use tracing::{error, info, warn};

/// Run the CPU stress test to completion.
pub async fn run_stress(cfg: StressConfig) -> BenchmarkResult {
    let job = StressJob::from_config(&cfg);
    info!(workers = job.workers(), "Starting stress test");

    match tokio::task::spawn_blocking(move || job.run()).await {
        Ok(Ok(joined)) => info!(workers = joined, "Stress test finished"),
        Ok(Err(e)) => warn!("Stress test failed: {e}"),
        Err(e) => error!("Stress test task died: {e}"),
    }

    BenchmarkResult::Stress
}

/// Run the internet speed test once.
pub async fn run_speed_test(cfg: SpeedTestConfig) -> BenchmarkResult {
    let test = SpeedTest::from_config(&cfg);
    info!(command = %cfg.command, "Starting speed test");

    let outcome = test.run().await.map_err(|e| {
        warn!("Speed test failed: {e}");
        e.to_string()
    });

    BenchmarkResult::SpeedTest(outcome)
}

/// Measure the default camera's frame rate.
pub async fn run_video(cfg: VideoConfig) -> BenchmarkResult {
    info!(device = cfg.device, "Starting video test");
    run_video_with(VideoJob::from_config(&cfg)).await
}

/// Run any [`VideoJob`] on a blocking thread.
pub async fn run_video_with<C>(job: VideoJob<C>) -> BenchmarkResult
where
    C: Camera + Send + 'static,
{
    let outcome = match tokio::task::spawn_blocking(move || job.run()).await {
        Ok(Ok(fps)) => Ok(fps),
        Ok(Err(e)) => {
            warn!("Video test failed: {e}");
            Err(e.to_string())
        }
        Err(e) => {
            error!("Video test task died: {e}");
            Err(format!("video test aborted: {e}"))
        }
    };

    BenchmarkResult::Video(outcome)
}
