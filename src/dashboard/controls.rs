//! Slider controls
//!
//! The five range controls of the dashboard page. Their ranges are the only
//! input constraint in the system: the model itself accepts any value.

use serde::Serialize;
use thiserror::Error;

use crate::model::SolowParams;

/// Tolerance for slider bounds, so `0.1 + 0.2`-style values still pass
const BOUND_EPSILON: f64 = 1e-9;

/// Which model parameter a control drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    S,
    Delta,
    N,
    Alpha,
    Z,
}

impl Parameter {
    /// Field name in [`SolowParams`]
    pub fn field(&self) -> &'static str {
        match self {
            Parameter::S => "s",
            Parameter::Delta => "delta",
            Parameter::N => "n",
            Parameter::Alpha => "alpha",
            Parameter::Z => "z",
        }
    }

    pub fn get(&self, params: &SolowParams) -> f64 {
        match self {
            Parameter::S => params.s,
            Parameter::Delta => params.delta,
            Parameter::N => params.n,
            Parameter::Alpha => params.alpha,
            Parameter::Z => params.z,
        }
    }

    fn set(&self, params: &mut SolowParams, value: f64) {
        match self {
            Parameter::S => params.s = value,
            Parameter::Delta => params.delta = value,
            Parameter::N => params.n = value,
            Parameter::Alpha => params.alpha = value,
            Parameter::Z => params.z = value,
        }
    }
}

/// One labelled tick on a slider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mark {
    pub value: f64,
    pub label: String,
}

/// A numeric range control
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliderSpec {
    /// DOM id on the dashboard page
    pub id: &'static str,
    pub label: &'static str,
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Decimal places shown in mark labels
    pub decimals: usize,
}

impl SliderSpec {
    /// Nine evenly spaced marks from `min` to `max`
    pub fn marks(&self) -> Vec<Mark> {
        const COUNT: usize = 9;
        let step = (self.max - self.min) / (COUNT - 1) as f64;
        (0..COUNT)
            .map(|i| {
                let value = if i == COUNT - 1 {
                    self.max
                } else {
                    self.min + i as f64 * step
                };
                Mark {
                    value,
                    label: format!("{:.*}", self.decimals, value),
                }
            })
            .collect()
    }

    /// Within `[min, max]`, bounds inclusive
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite()
            && value >= self.min - BOUND_EPSILON
            && value <= self.max + BOUND_EPSILON
    }

    /// `min` plus a whole number of steps
    pub fn on_step(&self, value: f64) -> bool {
        let steps = (value - self.min) / self.step;
        ((steps - steps.round()) * self.step).abs() <= BOUND_EPSILON
    }
}

/// A parameter value the controls would never produce
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ControlError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} = {value} is not a multiple of the slider step {step}")]
    OffStep {
        field: &'static str,
        value: f64,
        step: f64,
    },
}

/// Slider definitions in page order
pub static SLIDERS: [SliderSpec; 5] = [
    SliderSpec {
        id: "s-slider",
        label: "Savings rate",
        parameter: Parameter::S,
        min: 0.1,
        max: 0.9,
        step: 0.1,
        default: 0.3,
        decimals: 1,
    },
    SliderSpec {
        id: "delta-slider",
        label: "Depreciation rate",
        parameter: Parameter::Delta,
        min: 0.1,
        max: 0.9,
        step: 0.1,
        default: 0.1,
        decimals: 1,
    },
    SliderSpec {
        id: "n-slider",
        label: "Population growth rate",
        parameter: Parameter::N,
        min: 0.01,
        max: 0.09,
        step: 0.01,
        default: 0.05,
        decimals: 2,
    },
    SliderSpec {
        id: "alpha-slider",
        label: "Alpha",
        parameter: Parameter::Alpha,
        min: 0.1,
        max: 0.9,
        step: 0.1,
        default: 0.3,
        decimals: 1,
    },
    SliderSpec {
        id: "tec-slider",
        label: "Technology",
        parameter: Parameter::Z,
        min: 1.0,
        max: 9.0,
        step: 1.0,
        default: 2.0,
        decimals: 0,
    },
];

/// The dashboard's control panel
pub struct Controls;

impl Controls {
    pub fn sliders() -> &'static [SliderSpec] {
        &SLIDERS
    }

    pub fn slider(parameter: Parameter) -> Option<&'static SliderSpec> {
        SLIDERS.iter().find(|s| s.parameter == parameter)
    }

    /// Parameters the sliders start at
    pub fn defaults() -> SolowParams {
        let mut params = SolowParams::default();
        for slider in &SLIDERS {
            slider.parameter.set(&mut params, slider.default);
        }
        params
    }

    /// Reject values the sliders could not have produced: non-finite,
    /// outside the range, or between two steps
    pub fn check(params: &SolowParams) -> Result<(), ControlError> {
        for slider in &SLIDERS {
            let field = slider.parameter.field();
            let value = slider.parameter.get(params);
            if !value.is_finite() {
                return Err(ControlError::NonFinite { field });
            }
            if !slider.contains(value) {
                return Err(ControlError::OutOfRange {
                    field,
                    value,
                    min: slider.min,
                    max: slider.max,
                });
            }
            if !slider.on_step(value) {
                return Err(ControlError::OffStep {
                    field,
                    value,
                    step: slider.step,
                });
            }
        }
        Ok(())
    }
}
