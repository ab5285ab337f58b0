//! Validated configuration for constructing an [`Engine`].
//!
//! The engine core assumes well-formed inputs and never validates them
//! itself; [`EngineCfg`] is the caller-side layer that checks domain width,
//! sample count and function id before construction.
//!
//! [`EngineCfg`] — fields
//! - `a`, `b`    : domain bounds
//! - `n`         : sample count
//! - `func_id`   : built-in test function id
//!
//! [`EngineCfg::new`] initializes the defaults `[-10, 10]`, `n = 10`,
//! `func_id = 0`.

use crate::engine::Engine;
use crate::errors::EngineError;
use crate::funcs::FUNC_COUNT;

pub const DEFAULT_A: f64 = -10.0;
pub const DEFAULT_B: f64 = 10.0;
pub const DEFAULT_N: usize = 10;

/// Minimum allowed domain width `b - a`.
pub const MIN_DOMAIN_WIDTH: f64 = 1e-6;

#[derive(Debug, Copy, Clone)]
pub struct EngineCfg {
    a: f64,
    b: f64,
    n: usize,
    func_id: i32,
}

impl EngineCfg {
    pub fn new() -> Self {
        Self {
            a: DEFAULT_A,
            b: DEFAULT_B,
            n: DEFAULT_N,
            func_id: 0,
        }
    }

    pub fn set_bounds(mut self, a: f64, b: f64) -> Result<Self, EngineError> {
        if b - a < MIN_DOMAIN_WIDTH {
            return Err(EngineError::DegenerateDomain {
                got: b - a,
                min: MIN_DOMAIN_WIDTH,
            });
        }
        self.a = a;
        self.b = b;
        Ok(self)
    }

    pub fn set_n(mut self, n: usize) -> Result<Self, EngineError> {
        if n < 2 {
            return Err(EngineError::InsufficientPoints { got: n });
        }
        self.n = n;
        Ok(self)
    }

    pub fn set_func(mut self, func_id: i32) -> Result<Self, EngineError> {
        if !(0..FUNC_COUNT).contains(&func_id) {
            return Err(EngineError::UnknownFunction {
                got: func_id,
                count: FUNC_COUNT,
            });
        }
        self.func_id = func_id;
        Ok(self)
    }

    // getters
    pub fn a(&self) -> f64 { self.a }
    pub fn b(&self) -> f64 { self.b }
    pub fn n(&self) -> usize { self.n }
    pub fn func_id(&self) -> i32 { self.func_id }

    pub fn build(self) -> Engine {
        Engine::new(self.a, self.b, self.n, self.func_id)
    }
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self::new()
    }
}
