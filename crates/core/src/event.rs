use crate::state::BenchmarkResult;

/// All messages that flow through the application update loop.
///
/// Sources:
/// - Timer subscription  → `Tick`
/// - Buttons             → `Run*`
/// - Finished job tasks  → `BenchmarkFinished`
#[derive(Debug, Clone)]
pub enum Message {
    /// Sampling interval elapsed — take a sample and redraw.
    Tick,

    // ── User actions ──────────────────────────────────────────────────────────
    RunStressTest,
    RunSpeedTest,
    RunVideoTest,

    // ── Background jobs ───────────────────────────────────────────────────────
    /// A benchmark job published its single terminal result.
    BenchmarkFinished(BenchmarkResult),
}
