//! How early should an overloaded server shed load?
//!
//! Sweeps the arrival rate from light to heavy load and compares three
//! arrival-queue capacities. A deep queue keeps accepting work it can
//! no longer answer promptly; a shallow one rejects early and keeps
//! latency bounded for the requests it does accept. The interesting
//! question is where overall QoS comes out, since a rejection is worth
//! almost nothing but a slow answer may be worth even less.

use std::error::Error;

use steward::prelude::*;

const TICKS: u64 = 50_000;

fn measure(rate: u64, q1_max: usize) -> Result<Summary, Box<dyn Error>> {
    let mut config = SimConfig::default();
    config.client.rate = rate;
    config.server.q1_max = q1_max;
    let hooks = steward::standard_hooks(&config);
    let mut engine = Engine::new(config, hooks)?;
    engine.warmup(5_000)?;
    let report = engine.run_experiment(TICKS)?;
    Ok(*report.all())
}

fn main() -> Result<(), Box<dyn Error>> {
    let depths = [1usize, 10, 50];

    println!("rate, q1_max, qos, latency, count");
    // Smaller rate means more arrivals per tick span, so load rises
    // left to right.
    for rate in [50u64, 25, 10, 5, 2] {
        for q1_max in depths {
            let all = measure(rate, q1_max)?;
            println!(
                "{rate}, {q1_max}, {:.3}, {:.1}, {}",
                all.qos, all.latency, all.count
            );
        }
    }
    Ok(())
}
