// Mon Oct 19 2026 - Alex

use crate::document::{ExpressionRuntime, LeafRef, ValueType};

/// Offset kept between the sample time and the end of the composition.
pub const END_GUARD: f64 = 0.001;

/// Mid-time of the composition, clamped so it never reaches the end frame.
pub fn representative_time(duration: f64) -> f64 {
    (duration * 0.5).max(0.0).min((duration - END_GUARD).max(0.0))
}

pub struct EvaluationForcer<'r, R: ExpressionRuntime + ?Sized> {
    runtime: &'r R,
}

impl<'r, R: ExpressionRuntime + ?Sized> EvaluationForcer<'r, R> {
    pub fn new(runtime: &'r R) -> Self {
        Self { runtime }
    }

    /// Requests the value at `time` so the host fills in its error state.
    /// Faults are dropped here; callers read them back through the host.
    pub fn force(&self, target: LeafRef<'_>, time: f64) {
        if target.leaf.value_type == ValueType::NoValue {
            return;
        }

        if let Err(fault) = self.runtime.value_at_time(target, time) {
            log::trace!(
                "{} / {} {}: {}",
                target.composition.name,
                target.layer.name,
                target.node,
                fault
            );
        }
    }
}
