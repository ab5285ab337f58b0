//! In-place Thomas-algorithm solve of a tridiagonal linear system.
//!
//! Forward elimination followed by back substitution, no pivoting. The
//! caller guarantees diagonal dominance and a non-zero diagonal at every
//! step; the result is undefined for ill-conditioned inputs. O(n) time,
//! O(1) extra space.

/// Solves the tridiagonal system in place, leaving the solution in `rhs`.
///
/// `diag.len()` fixes the system size `n >= 2`; `low` and `up` hold the
/// sub- and super-diagonal in their first `n - 1` entries. All four slices
/// are overwritten.
pub fn solve(low: &mut [f64], diag: &mut [f64], up: &mut [f64], rhs: &mut [f64]) {
    let n = diag.len();
    debug_assert!(n >= 2);
    debug_assert!(low.len() >= n - 1 && up.len() >= n - 1 && rhs.len() >= n);

    up[0] /= diag[0];
    for i in 0..n - 2 {
        diag[i + 1] -= low[i] * up[i];
        up[i + 1] /= diag[i + 1];
    }
    diag[n - 1] -= low[n - 2] * up[n - 2];

    rhs[0] /= diag[0];
    for i in 1..n {
        rhs[i] = (rhs[i] - low[i - 1] * rhs[i - 1]) / diag[i];
    }

    for i in (0..n - 1).rev() {
        rhs[i] -= up[i] * rhs[i + 1];
    }
}
