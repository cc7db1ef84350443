//! Estimating live-response quality from observed dependency behavior.
//!
//! Controlled degradation needs informed decisions: a server that
//! tracks what the dependency has been doing can estimate what a live
//! answer is currently worth before committing to wait for one. This
//! driver installs a [`DependencyHistory`] observer and a configure
//! hook that re-derives the expected QoS of a live response every tick
//! from the mean observed latency.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use steward::policies::DependencyHistory;
use steward::prelude::*;
use steward::types::sigmoid;

/// Recomputes, once per tick, what a live response is expected to be
/// worth given the latency the dependency has been exhibiting.
struct LiveQosEstimator {
    history: DependencyHistory,
    decay_max: f64,
    decay_k: f64,
    estimate: Rc<RefCell<f64>>,
}

impl ConfigureHook for LiveQosEstimator {
    fn on_tick(&mut self, _now: TickId) {
        let value = sigmoid(self.history.mean_latency(), self.decay_max, self.decay_k);
        *self.estimate.borrow_mut() = value;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = SimConfig::default();
    config.server.q1_max = 10;
    config.server.p1_max = 10;
    config.server.q2_max = 12;
    config.server.p2_max = 5;

    let history = DependencyHistory::new();
    let estimate = Rc::new(RefCell::new(1.0));

    let mut hooks = steward::standard_hooks(&config);
    hooks.observers.push(Box::new(history.recorder()));
    hooks.configure = Box::new(LiveQosEstimator {
        history: history.clone(),
        decay_max: config.client.decay_max,
        decay_k: config.client.decay_k,
        estimate: Rc::clone(&estimate),
    });

    let mut engine = Engine::new(config, hooks)?;
    engine.warmup(5_000)?;
    let report = engine.run_experiment(50_000)?;
    println!("{report}");

    println!("dependency calls observed: {}", history.len());
    println!("mean dependency latency:   {:.1}", history.mean_latency());
    println!("dependency error rate:     {:.3}", history.error_rate());
    println!("expected QoS of live:      {:.3}", estimate.borrow());
    Ok(())
}
