use crate::funcs;

/// Rebuilds the Bessel (Hermite) segment coefficients from the samples.
///
/// Interior slopes blend the two adjacent secant slopes weighted by the
/// opposite interval widths; boundary slopes correct the one-sided secant
/// toward the interior slope and the analytic second derivative at the
/// boundary sample. `coeffs` holds 4 entries per segment.
pub(crate) fn update_coeffs(x: &[f64], f_x: &[f64], func_id: i32, coeffs: &mut [f64]) {
    let n = x.len();
    let mut d = vec![0.0; n];

    for i in 1..n - 1 {
        let s_left = (f_x[i] - f_x[i - 1]) / (x[i] - x[i - 1]);
        let s_right = (f_x[i + 1] - f_x[i]) / (x[i + 1] - x[i]);
        d[i] = ((x[i + 1] - x[i]) * s_left + (x[i] - x[i - 1]) * s_right)
            / (x[i + 1] - x[i - 1]);
    }

    let s_first = (f_x[1] - f_x[0]) / (x[1] - x[0]);
    let s_last = (f_x[n - 1] - f_x[n - 2]) / (x[n - 1] - x[n - 2]);

    d[0] = 0.5
        * (3.0 * s_first - d[1]
            - 0.5 * funcs::second_derivative(func_id, x[0]) * (x[1] - x[0]));
    d[n - 1] = 0.5
        * (3.0 * s_last - d[n - 2]
            + 0.5 * funcs::second_derivative(func_id, x[n - 1]) * (x[n - 1] - x[n - 2]));

    for i in 0..n - 1 {
        let h = x[i + 1] - x[i];
        let secant = (f_x[i + 1] - f_x[i]) / h;
        coeffs[4 * i] = f_x[i];
        coeffs[4 * i + 1] = d[i];
        coeffs[4 * i + 2] = (3.0 * secant - 2.0 * d[i] - d[i + 1]) / h;
        coeffs[4 * i + 3] = (d[i] + d[i + 1] - 2.0 * secant) / (h * h);
    }
}

/// Evaluates the Bessel interpolant at `xq`.
///
/// The containing segment is found by a forward linear scan; a query
/// outside the grid silently extrapolates with the nearest boundary
/// segment's cubic.
pub(crate) fn eval(x: &[f64], coeffs: &[f64], xq: f64) -> f64 {
    let n = x.len();
    let mut i = 0;
    while i < n - 2 && xq > x[i + 1] {
        i += 1;
    }

    let t = xq - x[i];
    coeffs[4 * i] + coeffs[4 * i + 1] * t + coeffs[4 * i + 2] * t * t
        + coeffs[4 * i + 3] * t * t * t
}
