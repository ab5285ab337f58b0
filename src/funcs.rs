//! Built-in test function library.
//!
//! A closed set of seven analytic functions addressed by an integer id,
//! together with their analytic second derivatives and a per-function
//! max-value estimate used as the disturbance amplitude.
//!
//! | id | f(x)            |
//! |----|-----------------|
//! | 0  | 1               |
//! | 1  | x               |
//! | 2  | x^2             |
//! | 3  | x^3             |
//! | 4  | x^4             |
//! | 5  | e^x             |
//! | 6  | 1/(25x^2 + 1)   |
//!
//! Ids outside this table evaluate to zero everywhere; the engine degrades
//! silently rather than reporting an error.

/// Number of built-in test functions.
pub const FUNC_COUNT: i32 = 7;

/// Evaluates test function `func_id` at `x`.
///
/// Returns `0.0` for an id outside `0..FUNC_COUNT`.
pub fn value(func_id: i32, x: f64) -> f64 {
    match func_id {
        0 => 1.0,
        1 => x,
        2 => x * x,
        3 => x * x * x,
        4 => x * x * x * x,
        5 => x.exp(),
        6 => 1.0 / (25.0 * x * x + 1.0),
        _ => 0.0,
    }
}

/// Analytic second derivative of test function `func_id` at `x`.
///
/// Consumed only by the Bessel boundary-slope correction; a production
/// system without known ground truth would need a different boundary
/// policy. Returns `0.0` for an id outside `0..FUNC_COUNT`.
pub fn second_derivative(func_id: i32, x: f64) -> f64 {
    match func_id {
        0 | 1 => 0.0,
        2 => 2.0,
        3 => 6.0 * x,
        4 => 12.0 * x * x,
        5 => x.exp(),
        6 => {
            let q = 25.0 * x * x + 1.0;
            -50.0 / (q * q) + 5000.0 * x * x / (q * q * q)
        }
        _ => 0.0,
    }
}

/// Estimates the maximum absolute value of `func_id` over `[a, b]`.
///
/// - id 0 is constant, so the estimate is always 1;
/// - id 5 increases monotonically, so the right boundary dominates;
/// - id 6 peaks at the origin and decays in `|x|`: the peak itself when the
///   domain straddles zero, otherwise the boundary closer to the peak;
/// - the monomials grow in `|x|`, so the boundary farther from zero
///   dominates.
pub fn max_value(func_id: i32, a: f64, b: f64) -> f64 {
    if func_id == 0 {
        1.0
    } else if func_id == 5 {
        value(func_id, b)
    } else if func_id == 6 {
        if a * b < 0.0 {
            value(func_id, 0.0)
        } else if a.abs() < b.abs() {
            value(func_id, a).abs()
        } else {
            value(func_id, b).abs()
        }
    } else if a.abs() > b.abs() {
        value(func_id, a).abs()
    } else {
        value(func_id, b).abs()
    }
}
