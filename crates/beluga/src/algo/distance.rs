//! Pairwise distance penalties over a single pair of points.
//!
//! This is the ratio-form target-distance family: standalone pure functions
//! with hand-derived gradients, usable as building blocks when a quadratic
//! target term (see [`spring`](crate::algo::spring)) is too stiff. The
//! combined spring energy does not call into this module.

/// Squared distance between two points; the basic attraction penalty.
pub fn attraction(x: f64, y: f64, xx: f64, yy: f64) -> f64 {
    (x - xx) * (x - xx) + (y - yy) * (y - yy)
}

/// Gradient of [`attraction`] with respect to `(x, y, xx, yy)`.
pub fn attraction_grad(x: f64, y: f64, xx: f64, yy: f64) -> (f64, f64, f64, f64) {
    (2.0 * (x - xx), 2.0 * (y - yy), 2.0 * (xx - x), 2.0 * (yy - y))
}

/// Ratio-form target-distance penalty.
///
/// With `r = attraction / target`, the penalty is `r + 1/r`: minimal exactly
/// when the squared distance equals `target` and growing in both directions.
/// `target` must be non-zero.
pub fn ratio_target(x: f64, y: f64, xx: f64, yy: f64, target: f64) -> f64 {
    let r = attraction(x, y, xx, yy) / target;
    r + 1.0 / r
}

/// Gradient of [`ratio_target`] with respect to `(x, y, xx, yy)`.
pub fn ratio_target_grad(x: f64, y: f64, xx: f64, yy: f64, target: f64) -> (f64, f64, f64, f64) {
    let d = attraction(x, y, xx, yy);
    let scale = 1.0 / target - target / (d * d);
    let (dx, dy, dxx, dyy) = attraction_grad(x, y, xx, yy);
    (scale * dx, scale * dy, scale * dxx, scale * dyy)
}

/// Penalty for drifting away from the center of the unit viewport.
pub fn centering(x: f64, y: f64) -> f64 {
    let r = (x - 0.5) * (y - 0.5);
    r * r
}

/// Gradient of [`centering`] with respect to `(x, y)`.
pub fn centering_grad(x: f64, y: f64) -> (f64, f64) {
    let r = (x - 0.5) * (y - 0.5);
    (2.0 * r * (y - 0.5), 2.0 * r * (x - 0.5))
}
