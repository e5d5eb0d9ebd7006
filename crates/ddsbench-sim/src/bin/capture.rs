//! Acquisition pipeline entry point: simulate the NCO, capture its
//! output, and persist the raw sample log for later analysis.

use ddsbench_core::sample_store;
use ddsbench_sim::capture::{run_capture, CaptureConfig};
use ddsbench_sim::clock::SimDuration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Oscillator phase step for this session.
const STEP: u16 = 4000;
/// Samples to acquire, one per clock cycle.
const NUM_SAMPLES: usize = 10_000;
/// Raw sample log consumed by the `analyze` binary.
const SAMPLE_FILE: &str = "sin_log.data";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CaptureConfig {
        step: STEP,
        clock_period: SimDuration::ns(1),
        reset_hold: SimDuration::ns(100),
        num_samples: NUM_SAMPLES,
    };

    let samples = run_capture(&config)?;
    sample_store::persist_samples(SAMPLE_FILE, &samples)?;
    info!(file = SAMPLE_FILE, n = samples.len(), "sample log written");
    Ok(())
}
