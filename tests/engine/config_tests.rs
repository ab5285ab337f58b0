use duospline::{EngineCfg, EngineError, Method};

type EngineResult = Result<(), EngineError>;

#[test]
fn defaults_build_the_standard_engine() {
    let engine = EngineCfg::new().build();

    assert_eq!(engine.a(), -10.0);
    assert_eq!(engine.b(), 10.0);
    assert_eq!(engine.n(), 10);
    assert_eq!(engine.func_id(), 0);
    assert_eq!(engine.value(0.0, Method::Origin), 1.0);
}

#[test]
fn full_chain() -> EngineResult {
    let engine = EngineCfg::new()
        .set_bounds(-1.0, 1.0)?
        .set_n(5)?
        .set_func(1)?
        .build();

    assert_eq!(engine.a(), -1.0);
    assert_eq!(engine.b(), 1.0);
    assert_eq!(engine.n(), 5);
    assert_eq!(engine.func_id(), 1);
    Ok(())
}

#[test]
fn rejects_degenerate_domain() {
    let err = EngineCfg::new().set_bounds(1.0, 1.0).unwrap_err();
    assert!(matches!(err, EngineError::DegenerateDomain { .. }));

    let err = EngineCfg::new().set_bounds(2.0, -2.0).unwrap_err();
    assert!(matches!(err, EngineError::DegenerateDomain { .. }));
}

#[test]
fn rejects_insufficient_points() {
    let err = EngineCfg::new().set_n(1).unwrap_err();
    assert!(matches!(err, EngineError::InsufficientPoints { got: 1 }));
}

#[test]
fn rejects_unknown_function() {
    let err = EngineCfg::new().set_func(7).unwrap_err();
    assert!(matches!(err, EngineError::UnknownFunction { got: 7, .. }));

    let err = EngineCfg::new().set_func(-1).unwrap_err();
    assert!(matches!(err, EngineError::UnknownFunction { got: -1, .. }));
}

#[test]
fn default_trait_matches_new() {
    let cfg = EngineCfg::default();
    assert_eq!(cfg.a(), -10.0);
    assert_eq!(cfg.b(), 10.0);
    assert_eq!(cfg.n(), 10);
    assert_eq!(cfg.func_id(), 0);
}
