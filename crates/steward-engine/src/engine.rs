//! The tick scheduler: owns all simulation state and advances it in a
//! fixed per-tick order.
//!
//! Each tick runs, in order: the configure hook, stage-2 completion
//! harvesting, stage-1 admission (cache lookup and forward), the
//! abandonment pass over the stage-2 queue, stage-2 admission
//! (dependency dispatch), and finally arrival generation. Keeping the
//! order fixed is what makes runs reproducible for a given seed.

use std::fmt;

use smallvec::SmallVec;
use steward_core::{
    AbandonPolicy, Abandonment, Cache, Clock, ConfigureHook, DependencyModel, DependencyObserver,
    DependencyOutcome, EvictionPolicy, KeySampler, PolicyView, Queue, QosScorer, Request,
    RequestId, RequestStore, ResponseClassifier, ResponseType, StageId, StepError, TickId,
};

use crate::config::{ConfigError, SimConfig};
use crate::metrics::TickMetrics;
use crate::pool::{StageOneWorker, StageTwoWorker};
use crate::report::{CacheReport, Report};
use crate::stats::{summarize, Summary};

// ── Hooks ────────────────────────────────────────────────────────

/// The full set of pluggable behaviors driving one engine.
///
/// Built once and handed to [`Engine::new`]. Hook state (RNGs,
/// adaptive policies) persists across [`Engine::reset`].
pub struct Hooks {
    /// Runs first every tick.
    pub configure: Box<dyn ConfigureHook>,
    /// Samples dependency calls for stage-2 workers.
    pub dependency: Box<dyn DependencyModel>,
    /// Per-tick decision for each request waiting in the stage-2 queue.
    pub abandon: Box<dyn AbandonPolicy>,
    /// Picks the terminal type for non-live, non-rejected completions.
    pub classifier: Box<dyn ResponseClassifier>,
    /// Scores completed requests for reports.
    pub qos: Box<dyn QosScorer>,
    /// Produces keys for new arrivals.
    pub sampler: Box<dyn KeySampler>,
    /// Notified after every dependency sample.
    pub observers: Vec<Box<dyn DependencyObserver>>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ── Engine ───────────────────────────────────────────────────────

/// A complete simulation: clock, request store, queues, worker pools,
/// cache, and the policy hooks that drive them.
pub struct Engine {
    config: SimConfig,
    hooks: Hooks,
    clock: Clock,
    store: RequestStore,
    q1: Queue,
    q2: Queue,
    p1: Vec<StageOneWorker>,
    p2: Vec<StageTwoWorker>,
    cache: Cache,
    completed: Vec<RequestId>,
    last_metrics: TickMetrics,
}

impl Engine {
    /// Build an engine from a validated configuration.
    pub fn new(config: SimConfig, hooks: Hooks) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            hooks,
            clock: Clock::new(),
            store: RequestStore::new(),
            q1: Queue::new(StageId::Q1),
            q2: Queue::new(StageId::Q2),
            p1: Vec::new(),
            p2: Vec::new(),
            cache: Cache::new(),
            completed: Vec::new(),
            last_metrics: TickMetrics::default(),
        })
    }

    /// Replace the cache with an empty one governed by the given
    /// eviction policy. Intended to be called before the first step.
    pub fn set_eviction_policy(&mut self, evictor: Box<dyn EvictionPolicy>) {
        self.cache = Cache::with_eviction(evictor);
    }

    // ── Stepping ─────────────────────────────────────────────────

    /// Advance the simulation by one tick.
    pub fn step(&mut self) -> Result<(), StepError> {
        self.clock.tick();
        self.last_metrics = TickMetrics::default();
        let now = self.clock.now();

        self.hooks.configure.on_tick(now);
        self.harvest_completions(now);
        self.admit_stage_one(now)?;
        self.abandonment_pass(now);
        self.admit_stage_two(now)?;
        self.generate_arrival(now);
        Ok(())
    }

    /// Advance by `ticks` ticks, relative to the current clock.
    pub fn run(&mut self, ticks: u64) -> Result<(), StepError> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(())
    }

    /// Reset to a fresh state, then run `ticks` ticks and discard the
    /// completed set, so later statistics exclude the warmup period.
    /// Requests still in flight at the end of warmup are kept.
    pub fn warmup(&mut self, ticks: u64) -> Result<(), StepError> {
        self.reset();
        self.run(ticks)?;
        self.completed.clear();
        Ok(())
    }

    /// Run `ticks` ticks and render the report over everything
    /// completed so far.
    pub fn run_experiment(&mut self, ticks: u64) -> Result<Report, StepError> {
        self.run(ticks)?;
        Ok(self.report())
    }

    /// Discard all simulation state: clock, requests, queues, pools,
    /// cache, completed set. Hook state is deliberately kept so seeded
    /// policies keep their RNG streams.
    pub fn reset(&mut self) {
        self.clock = Clock::new();
        self.store = RequestStore::new();
        self.q1 = Queue::new(StageId::Q1);
        self.q2 = Queue::new(StageId::Q2);
        self.p1.clear();
        self.p2.clear();
        self.cache.clear();
        self.completed.clear();
        self.last_metrics = TickMetrics::default();
    }

    // ── Tick phases ──────────────────────────────────────────────

    /// Harvest every stage-2 worker whose completion tick has been
    /// reached. Success writes the cache and answers live; failure and
    /// timeout send the request back toward the stage-2 queue.
    fn harvest_completions(&mut self, now: TickId) {
        let mut finished: SmallVec<[StageTwoWorker; 8]> = SmallVec::new();
        self.p2.retain(|worker| {
            if worker.is_done(now) {
                finished.push(*worker);
                false
            } else {
                true
            }
        });

        for worker in finished {
            let id = worker.request;
            self.store[id].tries += 1;
            self.last_metrics.completions += 1;
            match worker.outcome {
                DependencyOutcome::Success => {
                    let key = self.store[id].key;
                    self.cache.write(key, now);
                    self.respond(id, Some(ResponseType::Live));
                }
                DependencyOutcome::Failure | DependencyOutcome::Timeout => {
                    // Even an already-answered split request goes back
                    // to the queue; one-shot completion makes the
                    // overflow response a no-op for it.
                    if self.forward_to_q2(id, now) {
                        self.last_metrics.retries += 1;
                    }
                }
            }
        }
    }

    /// Clear yesterday's stage-1 workers and admit from the arrival
    /// queue. Stage 1 resolves within its tick: each admission does the
    /// cache lookup and forwards immediately, so `p1_max` bounds
    /// admissions per tick.
    fn admit_stage_one(&mut self, now: TickId) -> Result<(), StepError> {
        self.p1.clear();
        while self.p1.len() < self.config.server.p1_max && !self.q1.is_empty() {
            let id = self.q1.dequeue(&mut self.store, now)?;
            self.last_metrics.p1_admissions += 1;
            let key = self.store[id].key;
            self.store[id].cache_ts = self.cache.read(key);
            self.forward_to_q2(id, now);
            self.p1.push(StageOneWorker { request: id });
        }
        Ok(())
    }

    /// Ask the abandonment policy about every request in the stage-2
    /// queue. Decisions are made over a snapshot taken at the start of
    /// the pass, in queue order.
    fn abandonment_pass(&mut self, now: TickId) {
        let snapshot: SmallVec<[RequestId; 16]> = self.q2.items().iter().copied().collect();
        for id in snapshot {
            let view = PolicyView {
                now,
                server: &self.config.server,
                client: &self.config.client,
            };
            match self.hooks.abandon.decide(&self.store[id], &view) {
                Abandonment::Wait => {}
                Abandonment::Reneg => {
                    if self.q2.remove(id, &mut self.store) {
                        self.respond(id, None);
                        self.last_metrics.reneged += 1;
                    }
                }
                Abandonment::Split => {
                    // Answer now but leave the request queued; it keeps
                    // holding its slot until naturally dequeued.
                    if self.respond(id, None) {
                        self.last_metrics.split += 1;
                    }
                }
            }
        }
    }

    /// Fill free stage-2 workers from the stage-2 queue. Each admission
    /// samples one dependency call and pins its completion tick.
    fn admit_stage_two(&mut self, now: TickId) -> Result<(), StepError> {
        while self.p2.len() < self.config.server.p2_max && !self.q2.is_empty() {
            let id = self.q2.dequeue(&mut self.store, now)?;
            self.last_metrics.p2_admissions += 1;
            let sample = self.hooks.dependency.call(now);
            for observer in &mut self.hooks.observers {
                observer.observe(&sample);
            }
            self.store[id].dependency_time += sample.latency;
            self.p2.push(StageTwoWorker {
                request: id,
                outcome: sample.outcome,
                done_at: now.0 as f64 + sample.latency,
            });
        }
        Ok(())
    }

    /// Create one arrival on ticks divisible by the client rate. A full
    /// arrival queue rejects the request outright.
    fn generate_arrival(&mut self, now: TickId) {
        if now.0 % self.config.client.rate != 0 {
            return;
        }
        let key = self.hooks.sampler.sample();
        let id = self.store.insert(Request::new(key, now));
        self.last_metrics.arrivals += 1;
        if self.q1.full(self.config.server.q1_max) {
            self.respond(id, Some(ResponseType::Rejected));
            self.last_metrics.rejected_arrivals += 1;
        } else {
            self.q1.enqueue(id, &mut self.store, now);
        }
    }

    // ── Internal helpers ─────────────────────────────────────────

    /// Move a request toward the stage-2 queue. If the queue is full
    /// the request is answered immediately by the classifier instead.
    /// Returns true iff the request was enqueued.
    fn forward_to_q2(&mut self, id: RequestId, now: TickId) -> bool {
        if self.q2.full(self.config.server.q2_max) {
            self.respond(id, None);
            self.last_metrics.forward_rejections += 1;
            false
        } else {
            self.q2.enqueue(id, &mut self.store, now);
            true
        }
    }

    /// Answer a request. With no forced type the classifier picks
    /// between cached and fallback. Double completion is a no-op;
    /// returns true iff this call completed the request.
    fn respond(&mut self, id: RequestId, forced: Option<ResponseType>) -> bool {
        let now = self.clock.now();
        let response_type = match forced {
            Some(t) => t,
            None => {
                let view = PolicyView {
                    now,
                    server: &self.config.server,
                    client: &self.config.client,
                };
                self.hooks.classifier.classify(&self.store[id], &view)
            }
        };
        if self.store[id].complete(now, response_type) {
            self.completed.push(id);
            true
        } else {
            false
        }
    }

    fn view(&self) -> PolicyView<'_> {
        PolicyView {
            now: self.clock.now(),
            server: &self.config.server,
            client: &self.config.client,
        }
    }

    // ── Statistics and reporting ─────────────────────────────────

    /// Aggregate measures over all completed requests.
    pub fn stats(&self) -> Summary {
        self.stats_for(&self.completed)
    }

    /// Aggregate measures over an arbitrary set of completed requests.
    pub fn stats_for(&self, ids: &[RequestId]) -> Summary {
        summarize(ids, &self.store, self.hooks.qos.as_ref(), &self.view())
    }

    /// Render the full report: overall row, per-type rows, and cache
    /// effectiveness when caching is enabled.
    pub fn report(&self) -> Report {
        let all = self.stats();
        let by_type = ResponseType::ALL
            .into_iter()
            .map(|t| {
                let ids: Vec<RequestId> = self
                    .completed
                    .iter()
                    .copied()
                    .filter(|&id| self.store[id].response_type() == Some(t))
                    .collect();
                (t, self.stats_for(&ids))
            })
            .collect();

        let cache = (self.config.server.ttl > 0).then(|| {
            let now = self.clock.now();
            let ttl = self.config.server.ttl;
            let mut report = CacheReport::default();
            for &id in &self.completed {
                let request = &self.store[id];
                if request.response_type() == Some(ResponseType::Rejected) {
                    continue;
                }
                report.total += 1;
                if request.cache_ts.is_some() {
                    report.entries += 1;
                }
                if request.cache_hit(now, ttl) {
                    report.hits += 1;
                }
            }
            report
        });

        Report {
            all,
            by_type,
            cache,
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    /// The current tick.
    pub fn now(&self) -> TickId {
        self.clock.now()
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Mutable access to the configuration, for experiments that
    /// adjust capacities between steps. Changes take effect on the
    /// next tick.
    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    /// One request by ID.
    pub fn request(&self, id: RequestId) -> &Request {
        &self.store[id]
    }

    /// Every request created so far, completed or not.
    pub fn requests(&self) -> &RequestStore {
        &self.store
    }

    /// IDs of completed requests, in completion order.
    pub fn completed(&self) -> &[RequestId] {
        &self.completed
    }

    /// Arrival queue depth.
    pub fn q1_len(&self) -> usize {
        self.q1.len()
    }

    /// Stage-2 queue depth.
    pub fn q2_len(&self) -> usize {
        self.q2.len()
    }

    /// Stage-1 admissions made on the most recent tick.
    pub fn p1_len(&self) -> usize {
        self.p1.len()
    }

    /// In-flight dependency calls.
    pub fn p2_len(&self) -> usize {
        self.p2.len()
    }

    /// Distinct cache entries.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Counters for the most recent tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("now", &self.clock.now())
            .field("requests", &self.store.len())
            .field("q1", &self.q1.len())
            .field("q2", &self.q2.len())
            .field("p2", &self.p2.len())
            .field("completed", &self.completed.len())
            .finish()
    }
}
