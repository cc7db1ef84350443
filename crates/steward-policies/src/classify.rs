//! The default non-live response classifier.

use steward_core::{PolicyView, Request, ResponseClassifier, ResponseType};

/// Classifies a non-live completion as `Cached` when the request holds
/// a fresh cache observation, `Fallback` otherwise.
#[derive(Clone, Copy, Debug, Default)]
pub struct CacheAwareClassifier;

impl ResponseClassifier for CacheAwareClassifier {
    fn classify(&self, request: &Request, view: &PolicyView<'_>) -> ResponseType {
        if view.cache_hit(request) {
            ResponseType::Cached
        } else {
            ResponseType::Fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use steward_core::{ClientConfig, RequestKey, ServerConfig, TickId};

    #[test]
    fn fresh_hit_is_cached_otherwise_fallback() {
        let server = ServerConfig {
            ttl: 100,
            ..ServerConfig::default()
        };
        let client = ClientConfig::default();
        let view = PolicyView {
            now: TickId(50),
            server: &server,
            client: &client,
        };
        let classifier = CacheAwareClassifier;

        let mut r = Request::new(RequestKey(1), TickId(40));
        assert_eq!(classifier.classify(&r, &view), ResponseType::Fallback);

        r.cache_ts = Some(TickId(45));
        assert_eq!(classifier.classify(&r, &view), ResponseType::Cached);
    }
}
