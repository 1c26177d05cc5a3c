//! Model parameters

use serde::{Deserialize, Serialize};

/// Parameters of the Solow model.
///
/// The record is never mutated in place: a change of parameters builds a
/// new value. No ranges are enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolowParams {
    /// Population growth rate
    pub n: f64,
    /// Savings rate
    pub s: f64,
    /// Depreciation rate
    pub delta: f64,
    /// Output elasticity of capital
    pub alpha: f64,
    /// Productivity
    pub z: f64,
}

impl Default for SolowParams {
    fn default() -> Self {
        Self {
            n: 0.05,
            s: 0.3,
            delta: 0.1,
            alpha: 0.3,
            z: 2.0,
        }
    }
}

impl SolowParams {
    /// Build a parameter set in the order the dashboard controls report them.
    pub fn new(s: f64, delta: f64, n: f64, alpha: f64, z: f64) -> Self {
        Self {
            n,
            s,
            delta,
            alpha,
            z,
        }
    }

    /// True when every field is a finite number
    pub fn is_finite(&self) -> bool {
        [self.n, self.s, self.delta, self.alpha, self.z]
            .iter()
            .all(|v| v.is_finite())
    }
}
