//! The default QoS scorer.

use steward_core::{sigmoid, PolicyView, QosScorer, Request, ResponseType};

/// Scores a completed request as a base value for its response type,
/// multiplied by a sigmoid latency decay.
///
/// Rejected, live, and fallback responses use the configured base
/// values; cached responses derive their base value from a second
/// sigmoid decay over the age of the cache entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct SigmoidScorer;

impl QosScorer for SigmoidScorer {
    fn score(&self, request: &Request, view: &PolicyView<'_>) -> f64 {
        let client = view.client;
        let value = match request.response_type() {
            Some(ResponseType::Rejected) => client.rejected,
            Some(ResponseType::Live) => client.live,
            Some(ResponseType::Fallback) => client.fallback,
            Some(ResponseType::Cached) => {
                let age = request.cache_age(view.now).unwrap_or(0) as f64;
                sigmoid(age, client.cache_age_max, client.cache_age_k)
            }
            None => 0.0,
        };
        let latency = request.latency().unwrap_or(0) as f64;
        value * sigmoid(latency, client.decay_max, client.decay_k)
    }
}
