use std::sync::Arc;

use anyhow::Context;
use cfg::Cfg;
use clap::Parser;
use heap::HeapQueue;
use queue::test::stress::{StressTestConfig, run_stress_test};

pub mod cfg;

const PERCENTILES: [f64; 4] = [50.0, 90.0, 99.0, 99.9];

fn main() {
    let cfg = cfg::Cfg::parse();
    tracing_subscriber::fmt().with_max_level(cfg.log_level).init();
    println!("Running configuration:\n{cfg:#?}");

    if let Err(e) = run(cfg) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run(cfg: Cfg) -> anyhow::Result<()> {
    let queue_cfg = heap::Cfg {
        capacity: cfg.capacity,
        high_water_percent: cfg.high_water_percent,
    };
    let queue = Arc::new(HeapQueue::with_cfg(queue_cfg).context("could not create the queue")?);

    let config = StressTestConfig {
        num_clients: cfg.client_num,
        requests_per_client: cfg.request_num,
        set_percent: cfg.set_percent,
        range_percent: cfg.range_percent,
        key_distribution: cfg.key_distribution,
        key_space: cfg.key_space,
        payload_size_range: (cfg.payload_min, cfg.payload_max),
        range_span: cfg.range_span,
    };
    let results = run_stress_test(queue, config).context("stress test aborted")?;
    results.print_summary(&PERCENTILES);

    anyhow::ensure!(results.passed(), "post-run checks failed");
    Ok(())
}
