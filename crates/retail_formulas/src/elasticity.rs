//! Two-point price elasticity of demand.
//!
//! Both measures compare an old and a new (volume, retail) observation.
//! Arc elasticity uses midpoints and is symmetric in the direction of the
//! change; point elasticity is relative to the old observation.

use crate::elementwise::map4;
use retail_core::types::RetailError;

/// Arc (midpoint) price elasticity.
///
/// `((v₁ − v₀)/(r₁ − r₀)) · (((r₁ + r₀)/2) / ((v₁ + v₀)/2))`
///
/// # Examples
/// ```
/// use retail_formulas::elasticity::arc_elasticity;
///
/// let e = arc_elasticity(100.0, 80.0, 2.0, 2.5);
/// assert!((e - (-1.0)).abs() < 1e-12);
/// ```
pub fn arc_elasticity(old_volume: f64, new_volume: f64, old_retail: f64, new_retail: f64) -> f64 {
    let slope = (new_volume - old_volume) / (new_retail - old_retail);
    let mid_retail = (new_retail + old_retail) / 2.0;
    let mid_volume = (new_volume + old_volume) / 2.0;
    slope * (mid_retail / mid_volume)
}

/// Element-wise [`arc_elasticity`].
pub fn arc_elasticity_each(
    old_volume: &[f64],
    new_volume: &[f64],
    old_retail: &[f64],
    new_retail: &[f64],
) -> Result<Vec<f64>, RetailError> {
    map4(
        ("old_volume", old_volume),
        ("new_volume", new_volume),
        ("old_retail", old_retail),
        ("new_retail", new_retail),
        arc_elasticity,
    )
}

/// Point price elasticity relative to the old observation.
///
/// `((v₁ − v₀) · r₀) / ((r₁ − r₀) · v₀)`
pub fn point_elasticity(old_volume: f64, new_volume: f64, old_retail: f64, new_retail: f64) -> f64 {
    ((new_volume - old_volume) * old_retail) / ((new_retail - old_retail) * old_volume)
}

/// Element-wise [`point_elasticity`].
pub fn point_elasticity_each(
    old_volume: &[f64],
    new_volume: &[f64],
    old_retail: &[f64],
    new_retail: &[f64],
) -> Result<Vec<f64>, RetailError> {
    map4(
        ("old_volume", old_volume),
        ("new_volume", new_volume),
        ("old_retail", old_retail),
        ("new_retail", new_retail),
        point_elasticity,
    )
}
