use oxo_core::*;
use std::time::Duration;

/// Idle-session eviction policy: sessions untouched for `ttl` are dropped
/// by a sweep that runs every `interval`.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    pub ttl: Duration,
    pub interval: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            ttl: SESSION_IDLE_TTL,
            interval: SWEEP_INTERVAL,
        }
    }
}
