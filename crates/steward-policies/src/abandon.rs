//! The default abandonment policy.

use steward_core::{AbandonPolicy, Abandonment, PolicyView, Request};

/// Reneg as soon as waiting stops paying: when a usable cache hit is
/// already in hand, or the configured attempt budget is spent.
/// Otherwise keep waiting. Never splits.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultAbandon;

impl AbandonPolicy for DefaultAbandon {
    fn decide(&mut self, request: &Request, view: &PolicyView<'_>) -> Abandonment {
        if view.cache_hit(request) || request.tries >= view.server.tries {
            Abandonment::Reneg
        } else {
            Abandonment::Wait
        }
    }
}
