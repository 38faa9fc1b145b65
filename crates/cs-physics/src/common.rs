//! Common constants and helpers for physics calculations.

use crate::error::{PhysicsError, PhysicsResult};
use cs_core::ensure_finite;

/// Valve flow areas at or below this threshold (m²) are treated as closed.
///
/// Keeps the Bernoulli branch away from a division by near-zero area.
pub const VALVE_AREA_EPSILON_M2: f64 = 1e-4;

/// Ensure a value is finite, returning PhysicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> PhysicsResult<()> {
    ensure_finite(value, what).map_err(|_| PhysicsError::NonPhysical { what })?;
    Ok(())
}
