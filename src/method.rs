//! Defines the query-mode variants accepted by the engine dispatch.

/// Query modes for [`crate::Engine::value`].
/// - [`Method::Origin`]      raw function value
/// - [`Method::Bessel`]      Bessel (Hermite) interpolant
/// - [`Method::Spline`]      clamped cubic spline interpolant
/// - [`Method::BesselError`] raw value minus Bessel value
/// - [`Method::SplineError`] raw value minus spline value
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Origin,
    Bessel,
    Spline,
    BesselError,
    SplineError,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Origin => "origin",
            Method::Bessel => "bessel",
            Method::Spline => "spline",
            Method::BesselError => "bessel error",
            Method::SplineError => "spline error",
        }
    }
}
