use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("degenerate domain: b - a = {got}, need at least {min}")]
    DegenerateDomain { got: f64, min: f64 },

    #[error("insufficient sample points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("unknown function id {got}, expected 0..{count}")]
    UnknownFunction { got: i32, count: i32 },
}
