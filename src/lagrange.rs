//! Local Lagrange derivative estimation via the Newton form.
//!
//! Builds a degree-3 [divided-difference](https://en.wikipedia.org/wiki/Newton_polynomial)
//! triangle through four nodes and evaluates the derivative of the
//! resulting cubic in closed form. Used only to estimate the clamped
//! spline's boundary slopes from sampled values.

use crate::EPS;

/// Number of nodes the local fit uses.
pub const NODES: usize = 4;

/// Builds the Newton divided-difference triangle in place.
///
/// After the call `f[k]` holds the order-`k` divided difference of the
/// leading `k + 1` nodes. An update whose two nodes are numerically
/// coincident, relative to their magnitudes, is skipped so the previous
/// entry is retained instead of propagating a blown-up quotient.
pub fn divided_differences(x: &[f64; NODES], f: &mut [f64; NODES]) {
    for j in 0..NODES - 1 {
        for i in (j + 1..NODES).rev() {
            let dx = x[i] - x[i - j - 1];
            if dx.abs() > EPS * x[i].abs().max(x[i - j - 1].abs()) {
                f[i] = (f[i] - f[i - 1]) / dx;
            }
        }
    }
}

/// Derivative of the Newton-form cubic at `at`, in closed form.
///
/// `f` must already hold the divided-difference triangle built by
/// [`divided_differences`] over the same nodes `x`.
pub fn derivative_at(x: &[f64; NODES], f: &[f64; NODES], at: f64) -> f64 {
    f[1] + (2.0 * at - (x[0] + x[1])) * f[2]
        + (3.0 * at * at - 2.0 * (x[0] + x[1] + x[2]) * at
            + (x[0] * x[1] + x[0] * x[2] + x[1] * x[2]))
            * f[3]
}
