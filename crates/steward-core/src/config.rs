//! Configuration surface for the server, the client load, and the
//! default dependency model.
//!
//! These are plain knob structs; structural validation happens in the
//! engine crate when a simulation is constructed.

/// Server-side capacities and retry/caching knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Stage-1 pool capacity (cache lookups started per tick).
    pub p1_max: usize,
    /// Stage-2 pool capacity (concurrent dependency calls).
    pub p2_max: usize,
    /// Capacity of the arrival queue. 0 rejects every arrival.
    pub q1_max: usize,
    /// Capacity of the dependency queue. 0 short-circuits every forward.
    pub q2_max: usize,
    /// Cache freshness window in ticks. 0 disables caching entirely.
    pub ttl: u64,
    /// Maximum dependency attempts before the default abandonment
    /// policy reneges.
    pub tries: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            p1_max: 10,
            p2_max: 5,
            q1_max: 10,
            q2_max: 10,
            ttl: 300_000,
            tries: 1,
        }
    }
}

/// Client load shape and QoS valuation knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Ticks between arrivals; a request arrives whenever
    /// `tick % rate == 0`.
    pub rate: u64,
    /// Size of the identity key space arrivals sample from.
    pub key_space: u64,
    /// Sharpness of the latency decay curve.
    pub decay_k: f64,
    /// Latency (in ticks) at which a response is worth nothing.
    pub decay_max: f64,
    /// Sharpness of the cache-age decay curve.
    pub cache_age_k: f64,
    /// Cache age (in ticks) at which a cached response is worth nothing.
    pub cache_age_max: f64,
    /// Base QoS value of a live response.
    pub live: f64,
    /// Base QoS value of a fallback response.
    pub fallback: f64,
    /// Base QoS value of a rejected response.
    pub rejected: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rate: 25,
            key_space: 50_000,
            decay_k: 3.0,
            decay_max: 400.0,
            cache_age_k: 3.0,
            cache_age_max: 600_000.0,
            live: 1.0,
            fallback: 0.1,
            rejected: 0.01,
        }
    }
}

/// Parameters for the default normal-latency dependency model.
#[derive(Clone, Debug, PartialEq)]
pub struct DependencyConfig {
    /// Mean latency in ticks.
    pub mean: f64,
    /// Latency standard deviation in ticks.
    pub std: f64,
    /// Probability that a call that does not time out succeeds.
    pub availability: f64,
    /// Latency cutoff; samples above it are reported as timeouts at
    /// exactly this latency.
    pub timeout: f64,
}

impl Default for DependencyConfig {
    fn default() -> Self {
        Self {
            mean: 150.0,
            std: 25.0,
            availability: 0.98,
            timeout: 175.0,
        }
    }
}
