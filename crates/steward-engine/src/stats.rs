//! Aggregation of completed requests into summary statistics.

use steward_core::{PolicyView, QosScorer, RequestId, RequestStore, StageId};

/// Aggregate outcome measures over a set of completed requests.
///
/// All means over an empty set are defined to be 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    /// Number of requests in the set.
    pub count: usize,
    /// Mean QoS score.
    pub qos: f64,
    /// Mean dependency attempts.
    pub tries: f64,
    /// Mean arrival-to-response latency in ticks.
    pub latency: f64,
    /// Mean accumulated wait in the arrival queue.
    pub q1_wait: f64,
    /// Mean accumulated wait in the dependency queue.
    pub q2_wait: f64,
    /// Mean accumulated dependency service time.
    pub dependency_time: f64,
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Summarize the given requests. Requests that have not responded
/// contribute zero latency, which never happens for the engine's
/// completed set.
pub(crate) fn summarize(
    ids: &[RequestId],
    store: &RequestStore,
    scorer: &dyn QosScorer,
    view: &PolicyView<'_>,
) -> Summary {
    let count = ids.len();
    let mut qos = 0.0;
    let mut tries = 0.0;
    let mut latency = 0.0;
    let mut q1_wait = 0.0;
    let mut q2_wait = 0.0;
    let mut dependency_time = 0.0;
    for &id in ids {
        let request = &store[id];
        qos += scorer.score(request, view);
        tries += f64::from(request.tries);
        latency += request.latency().unwrap_or(0) as f64;
        q1_wait += request.queue_wait(StageId::Q1) as f64;
        q2_wait += request.queue_wait(StageId::Q2) as f64;
        dependency_time += request.dependency_time;
    }
    Summary {
        count,
        qos: mean(qos, count),
        tries: mean(tries, count),
        latency: mean(latency, count),
        q1_wait: mean(q1_wait, count),
        q2_wait: mean(q2_wait, count),
        dependency_time: mean(dependency_time, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_core::{
        ClientConfig, Request, RequestKey, ResponseType, ServerConfig, TickId,
    };

    struct UnitScorer;
    impl QosScorer for UnitScorer {
        fn score(&self, _request: &steward_core::Request, _view: &PolicyView<'_>) -> f64 {
            1.0
        }
    }

    #[test]
    fn empty_set_is_all_zeros() {
        let store = RequestStore::new();
        let server = ServerConfig::default();
        let client = ClientConfig::default();
        let view = PolicyView {
            now: TickId(0),
            server: &server,
            client: &client,
        };
        let summary = summarize(&[], &store, &UnitScorer, &view);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn means_are_arithmetic() {
        let mut store = RequestStore::new();
        let mut a = Request::new(RequestKey(1), TickId(0));
        a.tries = 1;
        a.dependency_time = 10.0;
        a.complete(TickId(10), ResponseType::Live);
        let mut b = Request::new(RequestKey(2), TickId(0));
        b.tries = 3;
        b.dependency_time = 30.0;
        b.complete(TickId(30), ResponseType::Fallback);
        let ids = vec![store.insert(a), store.insert(b)];

        let server = ServerConfig::default();
        let client = ClientConfig::default();
        let view = PolicyView {
            now: TickId(100),
            server: &server,
            client: &client,
        };
        let summary = summarize(&ids, &store, &UnitScorer, &view);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.qos, 1.0);
        assert_eq!(summary.tries, 2.0);
        assert_eq!(summary.latency, 20.0);
        assert_eq!(summary.dependency_time, 20.0);
    }
}
