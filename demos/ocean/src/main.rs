//! `ocean` — the reef ecosystem on the default 130×200 field.
//!
//! Loads an optional JSON config (every field has a default), runs until the
//! step budget is spent or predators or prey die out, and writes CSV output
//! to `output/ocean/`.
//!
//! Run with:
//!   cargo run -p ocean --release -- demos/ocean/ocean.json
//!
//! Set `RUST_LOG=debug` for one log line per step.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use reef_agent::{Population, Species};
use reef_core::{SimConfig, SimRng};
use reef_field::Field;
use reef_output::{CsvWriter, OutputWriter, SimOutputObserver};
use reef_sim::{MixedTrophicLevels, SimBuilder, SimObserver, StepReport};

const OUTPUT_DIR: &str = "output/ocean";

// ── Progress observer ─────────────────────────────────────────────────────────

/// Prints one status line per simulated day and forwards every callback to
/// the wrapped observer.
struct DailyStatus<O: SimObserver> {
    inner:       O,
    peak_agents: usize,
}

impl<O: SimObserver> DailyStatus<O> {
    fn new(inner: O) -> Self {
        Self { inner, peak_agents: 0 }
    }
}

impl<O: SimObserver> SimObserver for DailyStatus<O> {
    fn on_step_start(&mut self, step: u64) {
        self.inner.on_step_start(step);
    }

    fn on_step_end(&mut self, report: &StepReport, field: &Field, population: &Population) {
        self.peak_agents = self.peak_agents.max(report.counts.total());
        if report.hour == 0 {
            println!("day {:>4} | {:<7} | {}", report.day, report.weather, report.counts);
        }
        self.inner.on_step_end(report, field, population);
    }

    fn on_sim_end(&mut self, final_report: &StepReport) {
        self.inner.on_sim_end(final_report);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;

    println!("=== ocean — reef ecosystem ===");
    println!(
        "Field: {}x{}  |  Steps: {}  |  Seed: {}",
        config.depth, config.width, config.max_steps, config.seed
    );
    println!();

    // 1. Build the simulator; the field is populated at random.
    let mut sim = SimBuilder::new(config.clone(), SimRng::new(config.seed)).build()?;
    let start = sim.report(Default::default());
    println!("Initial population: {}", start.counts);

    // 2. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = DailyStatus::new(SimOutputObserver::new(writer, &config));

    // 3. Run.
    let t0 = Instant::now();
    let steps = sim.run_long(&mut obs, &MixedTrophicLevels);
    let elapsed = t0.elapsed();

    if let Some(err) = obs.inner.take_error() {
        return Err(err).context("writing simulation output");
    }
    obs.inner.into_writer().finish()?;

    // 4. Summary.
    let last = sim.report(Default::default());
    println!();
    println!("=== Summary ===");
    println!("Steps run      : {steps} of {}", config.max_steps);
    println!("Ended at       : {}", sim.clock());
    println!("Weather        : {}", last.weather);
    println!("Peak agents    : {}", obs.peak_agents);
    for species in Species::ALL {
        println!("  {:<12} : {}", species.as_str(), last.counts.get(species));
    }
    println!("Infected       : {}", last.counts.infected);
    println!("Krill on field : {}", last.total_krill);
    println!("Wall time      : {:.2?}", elapsed);
    println!("Output         : {OUTPUT_DIR}/");
    info!(steps, "done");
    Ok(())
}
