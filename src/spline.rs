use crate::funcs;
use crate::lagrange::{self, NODES};
use crate::tridiagonal;
use crate::EPS;

/// Fewest grid points the spline build accepts.
pub(crate) const SPLINE_MIN_POINTS: usize = 3;

/// Rebuilds the clamped-spline segment coefficients from the samples.
///
/// Boundary slopes come from degree-3 Newton fits through the leading and
/// trailing four grid abscissas, sampling the raw function; interior slopes
/// solve a diagonally dominant tridiagonal system. When the grid has fewer
/// than [`SPLINE_MIN_POINTS`] points or a numerically degenerate step,
/// `coeffs` is left untouched and evaluation yields zero.
pub(crate) fn update_coeffs(
    a: f64,
    b: f64,
    x: &[f64],
    f_x: &[f64],
    func_id: i32,
    coeffs: &mut [f64],
) {
    let n = x.len();
    if n > 1 && (x[1] - x[0]).abs() <= EPS {
        return;
    }
    if n < SPLINE_MIN_POINTS {
        return;
    }

    let step = (b - a) / (n - 1) as f64;

    let mut lag_x = [0.0; NODES];
    let mut lag_f = [0.0; NODES];

    for i in 0..NODES {
        lag_x[i] = a + i as f64 * step;
        lag_f[i] = funcs::value(func_id, lag_x[i]);
    }
    lagrange::divided_differences(&lag_x, &mut lag_f);
    let slope_a = lagrange::derivative_at(&lag_x, &lag_f, a);

    let mut xi = b - (NODES - 1) as f64 * step;
    for i in 0..NODES {
        lag_x[i] = xi;
        lag_f[i] = funcs::value(func_id, xi);
        xi += step;
    }
    lagrange::divided_differences(&lag_x, &mut lag_f);
    let slope_b = lagrange::derivative_at(&lag_x, &lag_f, b);

    // identity rows clamp the boundary slopes; interior rows are
    // (h, 4h, h) with rhs 3(f_{i+1} - f_{i-1})
    let mut low = vec![0.0; n];
    let mut diag = vec![0.0; n];
    let mut up = vec![0.0; n];
    let mut slopes = vec![0.0; n];

    diag[0] = 1.0;
    up[0] = 0.0;
    slopes[0] = slope_a;
    slopes[n - 1] = slope_b;

    for i in 1..n - 1 {
        diag[i] = 4.0 * step;
        up[i] = step;
        low[i - 1] = step;
        slopes[i] = 3.0 * (f_x[i + 1] - f_x[i - 1]);
    }

    diag[n - 1] = 1.0;
    low[n - 2] = 0.0;

    tridiagonal::solve(&mut low, &mut diag, &mut up, &mut slopes);

    for i in 0..n - 1 {
        let secant = (f_x[i + 1] - f_x[i]) / step;
        coeffs[4 * i] = f_x[i];
        coeffs[4 * i + 1] = slopes[i];
        coeffs[4 * i + 2] = (secant - slopes[i]) / step;
        coeffs[4 * i + 3] = (slopes[i] + slopes[i + 1] - 2.0 * secant) / (step * step);
    }
}

// binary search; narrows to the bracketing interval and returns its left
// endpoint, degenerating to 0
fn locate(x: &[f64], xq: f64) -> usize {
    let mut left = 0;
    let mut right = x.len() - 1;
    while right - left > 1 {
        let mid = (left + right) / 2;
        if xq >= x[mid] && xq <= x[mid + 1] {
            return mid;
        }
        if xq >= x[mid] {
            left = mid;
        }
        if xq <= x[mid] {
            right = mid;
        }
    }
    left
}

/// Evaluates the spline at `xq`, or zero for a degenerate grid.
///
/// The cubic term multiplies `t^2 (xq - x[i+1])` rather than `t^3`; the
/// quadratic coefficient is derived to match, so the pair interpolates the
/// segment end values and slopes exactly.
pub(crate) fn eval(x: &[f64], coeffs: &[f64], xq: f64) -> f64 {
    let n = x.len();
    if n < SPLINE_MIN_POINTS {
        return 0.0;
    }
    if (x[1] - x[0]).abs() <= EPS {
        return 0.0;
    }

    let i = locate(x, xq).min(n - 2);

    let t = xq - x[i];
    coeffs[4 * i] + coeffs[4 * i + 1] * t + coeffs[4 * i + 2] * t * t
        + coeffs[4 * i + 3] * t * t * (xq - x[i + 1])
}
