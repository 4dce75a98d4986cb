//! haul — runs the mining-haul scenario suite.
//!
//! Each scenario is an independent simulation of `trucks` trucks sharing
//! `stations` unload stations over three virtual days.  Scenarios run in
//! parallel (one `Sim` per rayon task); reports are printed in suite order
//! and CSV output for each lands in `$HAUL_OUTPUT_DIR/<trucks>x<stations>/`.
//!
//! ```text
//! haul [config.json]
//! ```
//!
//! The optional JSON file holds a `SimConfig`; absent fields take their
//! defaults.  `RUST_LOG` controls log verbosity (default `info`).

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{info, warn};
use rayon::prelude::*;

use hs_core::SimConfig;
use hs_output::{CsvWriter, SimOutputObserver, TextReport};
use hs_sim::{Sim, SimReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:               u64  = 42;
const DEFAULT_OUTPUT_DIR: &str = "output/haul";

/// `(label, trucks, stations)`, including the degenerate fleets.
const SCENARIOS: [(&str, usize, usize); 9] = [
    ("0.1", 3, 1),
    ("0.2", 5, 2),
    ("0.3", 10, 3),
    ("0.4", 50, 3),
    ("1.1", 1, 1),
    ("1.2", 30, 1),
    ("2.1", 0, 1),
    ("2.2", 1, 0),
    ("2.3", 0, 0),
];

// ── Scenario runner ───────────────────────────────────────────────────────────

struct Outcome {
    title:   String,
    report:  SimReport,
    elapsed: Duration,
}

fn run_scenario(
    index:    usize,
    label:    &str,
    trucks:   usize,
    stations: usize,
    base:     &SimConfig,
    out_root: &Path,
) -> Result<Outcome> {
    let config = SimConfig {
        // Distinct but reproducible streams per scenario.
        seed: base.seed.map(|s| s.wrapping_add(index as u64)),
        ..base.clone()
    };
    let title = format!("Test Case {label}: {trucks} Trucks, {stations} Stations");

    let mut sim = Sim::new(trucks, stations, config)
        .with_context(|| format!("building scenario {label}"))?;

    let dir = out_root.join(format!("{trucks}x{stations}"));
    let writer = CsvWriter::new(&dir).with_context(|| format!("opening {}", dir.display()))?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        warn!("scenario {label}: output error: {e}");
    }

    Ok(Outcome { title, report: sim.report(), elapsed })
}

fn load_config(path: Option<PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default().with_seed(SEED));
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    let out_root = std::env::var_os("HAUL_OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    info!(
        "mining {}..={} min, travel {} min, unload {} min, horizon {} min, seed {:?}",
        config.mining_min,
        config.mining_max,
        config.travel_time,
        config.unload_time,
        config.horizon,
        config.seed
    );
    info!("writing CSV output under {}", out_root.display());

    let t0 = Instant::now();
    let outcomes: Vec<Result<Outcome>> = SCENARIOS
        .par_iter()
        .enumerate()
        .map(|(i, &(label, trucks, stations))| {
            run_scenario(i, label, trucks, stations, &config, &out_root)
        })
        .collect();

    for outcome in outcomes {
        let outcome = outcome?;
        print!("{}", TextReport::new(&outcome.title, &outcome.report));
        println!("({:.3} ms)\n", outcome.elapsed.as_secs_f64() * 1e3);
    }

    info!(
        "{} scenarios finished in {:.3} s",
        SCENARIOS.len(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
