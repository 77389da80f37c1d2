//! Local load-weight sampling.
//!
//! The sampler turns two already-maintained runtime counters, the current
//! concurrent-session count and its configured ceiling, into a 0-100 load
//! percentage. It reads the counters once and has no side effects.

use crate::base::error::ZoneError;

/// Session statistics surface maintained by the hosting runtime.
///
/// Both methods must be O(1) reads of live counters. Implementations are
/// expected to be cheap enough to call once per zone round without
/// coordination.
pub trait SessionStats: Send + Sync {
    /// Number of sessions currently active on this node.
    fn active_sessions(&self) -> u32;

    /// Configured ceiling on concurrent sessions.
    fn max_sessions(&self) -> u32;
}

/// Blanket implementation for Arc-wrapped statistics surfaces.
impl<S: SessionStats + ?Sized> SessionStats for std::sync::Arc<S> {
    fn active_sessions(&self) -> u32 {
        (**self).active_sessions()
    }

    fn max_sessions(&self) -> u32 {
        (**self).max_sessions()
    }
}

/// Computes this node's load weight as `round(active * 100 / max)`.
///
/// Standard rounding, not truncation. A session ceiling of zero is a
/// configuration-level precondition violation and fails loudly with
/// [`ZoneError::ZeroSessionCapacity`] rather than returning garbage.
pub fn sample_weight(stats: &dyn SessionStats) -> Result<i32, ZoneError> {
    let max = stats.max_sessions();
    if max == 0 {
        return Err(ZoneError::ZeroSessionCapacity);
    }

    let weight = (stats.active_sessions() as f64 * 100.0 / max as f64).round() as i32;
    tracing::trace!(active = stats.active_sessions(), max, weight, "sampled local weight");
    Ok(weight)
}
