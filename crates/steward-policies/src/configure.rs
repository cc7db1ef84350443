//! The default (inert) configure hook.

use steward_core::{ConfigureHook, TickId};

/// Configure hook that does nothing. Experiments that adapt per tick
/// install their own hook instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoConfigure;

impl ConfigureHook for NoConfigure {
    fn on_tick(&mut self, _now: TickId) {}
}
