/// Ceiling on the per-render iteration budget, bounding worst-case render
/// time regardless of zoom depth.
pub const MAX_ITERATIONS_CAP: u32 = 550;

/// Budget used before the first viewport-changing render.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Iteration budget for a zoom scale (`scale = 1 / real-axis width`).
/// An empirical heuristic: deeper zooms need more iterations to resolve
/// boundary detail. The 66.5 multiplier and the 550 cap are part of the
/// output contract and must not be retuned.
#[must_use]
pub fn iterations_for_scale(scale: f64) -> u32 {
    let raw = (2.0 * (1.0 - (5.0 * scale).sqrt()).abs().sqrt()).abs().sqrt() * 66.5;

    (raw as u32).clamp(1, MAX_ITERATIONS_CAP)
}
