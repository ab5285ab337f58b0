//! The interpolation engine.
//!
//! [`Engine`] exclusively owns the uniform sample grid, the sampled values
//! and both piecewise-cubic coefficient sets. Every mutator performs a full
//! eager rebuild of the coefficients; every query reads through
//! [`Engine::value`] or the per-method evaluators.

use crate::method::Method;
use crate::{bessel, funcs, spline};

/// Owning aggregate of grid, samples and both coefficient sets.
///
/// Construction and all mutators assume well-formed inputs (`n >= 2`,
/// `b > a`, an id within the function table); validation is the caller's
/// responsibility, see [`crate::EngineCfg`]. Out-of-range queries or an
/// unknown function id degrade to best-effort numeric results rather than
/// signalling.
#[derive(Debug, Clone)]
pub struct Engine {
    a: f64,
    b: f64,
    n: usize,
    func_id: i32,
    disturb: i32,

    x: Vec<f64>,
    f_x: Vec<f64>,
    bessel_coeffs: Vec<f64>,
    spline_coeffs: Vec<f64>,
}

impl Engine {
    /// Builds the initial grid and both coefficient sets.
    pub fn new(a: f64, b: f64, n: usize, func_id: i32) -> Self {
        let mut engine = Self {
            a,
            b,
            n,
            func_id,
            disturb: 0,
            x: vec![0.0; n],
            f_x: vec![0.0; n],
            bessel_coeffs: vec![0.0; 4 * (n - 1)],
            spline_coeffs: vec![0.0; 4 * (n - 1)],
        };
        engine.resample();
        engine.update_coeffs();
        engine
    }

    fn resample(&mut self) {
        let step = (self.b - self.a) / (self.n - 1) as f64;
        for i in 0..self.n {
            let xi = self.a + i as f64 * step;
            self.x[i] = xi;
            self.f_x[i] = funcs::value(self.func_id, xi);
        }
    }

    fn update_coeffs(&mut self) {
        bessel::update_coeffs(&self.x, &self.f_x, self.func_id, &mut self.bessel_coeffs);
        spline::update_coeffs(
            self.a,
            self.b,
            &self.x,
            &self.f_x,
            self.func_id,
            &mut self.spline_coeffs,
        );
    }

    /// Switches the active test function; no-op if unchanged.
    ///
    /// The grid stays in place, values are resampled pure (any disturbance
    /// is only re-applied by the next disturb call).
    pub fn change_func(&mut self, func_id: i32) {
        if func_id == self.func_id {
            return;
        }
        self.func_id = func_id;

        for i in 0..self.n {
            self.f_x[i] = funcs::value(func_id, self.x[i]);
        }

        self.update_coeffs();
    }

    /// Changes the sample count and rebuilds from scratch; no-op if
    /// unchanged.
    pub fn change_n(&mut self, n: usize) {
        if n == self.n {
            return;
        }
        self.n = n;

        self.x.resize(n, 0.0);
        self.f_x.resize(n, 0.0);
        self.bessel_coeffs.resize(4 * (n - 1), 0.0);
        self.spline_coeffs.resize(4 * (n - 1), 0.0);

        self.resample();
        self.update_coeffs();
    }

    /// Raises the disturbance counter and re-perturbs the middle sample.
    ///
    /// The perturbation is absolute in the counter: the middle sample is
    /// always `f(x_mid) + counter * 0.1 * max_value()`, never compounded
    /// from its previous perturbed value.
    pub fn increase_disturb(&mut self) {
        self.disturb += 1;
        self.apply_disturb();
    }

    /// Lowers the disturbance counter and re-perturbs the middle sample.
    pub fn decrease_disturb(&mut self) {
        self.disturb -= 1;
        self.apply_disturb();
    }

    fn apply_disturb(&mut self) {
        let mid = self.n / 2;
        self.f_x[mid] =
            funcs::value(self.func_id, self.x[mid]) + self.disturb as f64 * 0.1 * self.max_value();
        self.update_coeffs();
    }

    /// Halves both bounds and rebuilds.
    ///
    /// Bounds scale independently, so the domain only stays centered when
    /// it is symmetric about zero; asymmetric domains drift. Known quirk,
    /// kept as-is.
    pub fn increase_scale(&mut self) {
        self.a /= 2.0;
        self.b /= 2.0;
        self.resample();
        self.update_coeffs();
    }

    /// Doubles both bounds and rebuilds.
    pub fn decrease_scale(&mut self) {
        self.a *= 2.0;
        self.b *= 2.0;
        self.resample();
        self.update_coeffs();
    }

    /// Max-value estimate of the active function over the current domain.
    pub fn max_value(&self) -> f64 {
        funcs::max_value(self.func_id, self.a, self.b)
    }

    /// Bessel (Hermite) interpolant at `x`.
    pub fn bessel(&self, x: f64) -> f64 {
        bessel::eval(&self.x, &self.bessel_coeffs, x)
    }

    /// Clamped-spline interpolant at `x`; zero when the grid has fewer
    /// than three points or a degenerate step.
    pub fn spline(&self, x: f64) -> f64 {
        spline::eval(&self.x, &self.spline_coeffs, x)
    }

    /// Sampled value minus Bessel value at `x`.
    pub fn bessel_error(&self, x: f64) -> f64 {
        funcs::value(self.func_id, x) - self.bessel(x)
    }

    /// Sampled value minus spline value at `x`.
    pub fn spline_error(&self, x: f64) -> f64 {
        funcs::value(self.func_id, x) - self.spline(x)
    }

    /// Query dispatch; a pure lookup with no side effects.
    pub fn value(&self, x: f64, method: Method) -> f64 {
        match method {
            Method::Origin => funcs::value(self.func_id, x),
            Method::Bessel => self.bessel(x),
            Method::Spline => self.spline(x),
            Method::BesselError => self.bessel_error(x),
            Method::SplineError => self.spline_error(x),
        }
    }

    // getters
    pub fn a(&self) -> f64 { self.a }
    pub fn b(&self) -> f64 { self.b }
    pub fn n(&self) -> usize { self.n }
    pub fn func_id(&self) -> i32 { self.func_id }
    pub fn disturb(&self) -> i32 { self.disturb }
    pub fn bessel_coeffs(&self) -> &[f64] { &self.bessel_coeffs }
    pub fn spline_coeffs(&self) -> &[f64] { &self.spline_coeffs }
}
