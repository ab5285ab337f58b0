use assert_approx_eq::assert_approx_eq;
use duospline::{Engine, Method};

#[test]
fn disturb_round_trip_restores_middle_sample() {
    // n = 9 over [-1, 1] puts the middle node at x = 0
    let mut engine = Engine::new(-1.0, 1.0, 9, 6);

    for _ in 0..3 {
        engine.increase_disturb();
    }
    assert_eq!(engine.disturb(), 3);

    for _ in 0..3 {
        engine.decrease_disturb();
    }
    assert_eq!(engine.disturb(), 0);
    assert_approx_eq!(engine.bessel(0.0), 1.0, 1e-12);
    assert_approx_eq!(engine.spline(0.0), 1.0, 1e-12);
}

#[test]
fn disturb_is_absolute_in_counter() {
    // runge over a straddling domain: max_value() == f(0) == 1
    let mut engine = Engine::new(-1.0, 1.0, 9, 6);

    for _ in 0..4 {
        engine.increase_disturb();
    }

    // middle sample is f(0) + 4 * 0.1 * 1, not a compounded sum, and the
    // interpolant reproduces it at the node
    assert_approx_eq!(engine.bessel(0.0), 1.4, 1e-12);
}

#[test]
fn counter_survives_function_change_but_perturbation_does_not() {
    let mut engine = Engine::new(-1.0, 1.0, 9, 6);
    engine.increase_disturb();
    engine.increase_disturb();

    // values are resampled pure; the counter itself persists
    engine.change_func(2);
    assert_eq!(engine.disturb(), 2);
    assert_approx_eq!(engine.bessel(0.0), 0.0, 1e-12);

    // the next disturb call re-applies the accumulated counter
    engine.increase_disturb();
    assert_approx_eq!(engine.bessel(0.0), 0.3, 1e-12);
}

#[test]
fn change_func_same_id_is_a_no_op() {
    let mut engine = Engine::new(-1.0, 1.0, 9, 6);
    engine.increase_disturb();

    // a real change would wipe the perturbed sample
    engine.change_func(6);
    assert_approx_eq!(engine.bessel(0.0), 1.1, 1e-12);
}

#[test]
fn scale_round_trip_restores_bounds() {
    let mut engine = Engine::new(-10.0, 10.0, 10, 5);

    engine.increase_scale();
    assert_eq!(engine.a(), -5.0);
    assert_eq!(engine.b(), 5.0);

    engine.decrease_scale();
    assert_eq!(engine.a(), -10.0);
    assert_eq!(engine.b(), 10.0);
}

#[test]
fn scale_rebuilds_amplitude() {
    let mut engine = Engine::new(-10.0, 10.0, 10, 5);
    engine.increase_scale();

    assert_eq!(engine.max_value(), 5.0_f64.exp());
}

#[test]
fn resample_keeps_domain_and_function() {
    let mut engine = Engine::new(-10.0, 10.0, 10, 5);
    engine.change_n(20);

    assert_eq!(engine.a(), -10.0);
    assert_eq!(engine.b(), 10.0);
    assert_eq!(engine.func_id(), 5);
    assert_eq!(engine.n(), 20);
    assert_eq!(engine.bessel_coeffs().len(), 4 * (20 - 1));
    assert_eq!(engine.spline_coeffs().len(), 4 * (20 - 1));
}

#[test]
fn identity_scenario() {
    let engine = Engine::new(-1.0, 1.0, 5, 1);

    assert_approx_eq!(engine.value(0.3, Method::Bessel), 0.3, 1e-9);
    assert_approx_eq!(engine.value(0.3, Method::Spline), 0.3, 1e-9);
}

#[test]
fn dispatch_matches_dedicated_evaluators() {
    let engine = Engine::new(-1.0, 1.0, 8, 6);
    let x = 0.23;

    assert_eq!(engine.value(x, Method::Bessel), engine.bessel(x));
    assert_eq!(engine.value(x, Method::Spline), engine.spline(x));
    assert_eq!(engine.value(x, Method::BesselError), engine.bessel_error(x));
    assert_eq!(engine.value(x, Method::SplineError), engine.spline_error(x));
}

#[test]
fn method_names() {
    assert_eq!(Method::Origin.name(), "origin");
    assert_eq!(Method::Bessel.name(), "bessel");
    assert_eq!(Method::Spline.name(), "spline");
    assert_eq!(Method::BesselError.name(), "bessel error");
    assert_eq!(Method::SplineError.name(), "spline error");
}

#[test]
fn unknown_function_collapses_to_zero() {
    let engine = Engine::new(-1.0, 1.0, 5, 99);

    assert_eq!(engine.value(0.3, Method::Origin), 0.0);
    assert_eq!(engine.value(0.3, Method::Bessel), 0.0);
    assert_eq!(engine.value(0.3, Method::Spline), 0.0);
    assert_eq!(engine.value(0.3, Method::BesselError), 0.0);
    assert_eq!(engine.value(0.3, Method::SplineError), 0.0);
}
