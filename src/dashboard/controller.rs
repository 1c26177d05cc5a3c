//! View controller

use super::series::Series;
use crate::chart::{CapitalAxis, Figure, Layout, Trace};
use crate::model::{Solow, SolowParams};

/// Transition hint attached to every updated figure (ms)
pub const TRANSITION_DURATION_MS: u64 = 1000;

const TITLE: &str = "Simulations";
const X_TITLE: &str = "k";
const Y_TITLE: &str = "Value";

/// Holds a frozen benchmark model and the viewer's current model and
/// renders both as one overlaid chart.
///
/// There is exactly one state; every `update` replaces the current
/// parameters and re-renders. The benchmark is set at construction and
/// never changes afterwards.
#[derive(Debug, Clone)]
pub struct ViewController {
    axis: CapitalAxis,
    benchmark: Solow,
    current: Solow,
}

impl ViewController {
    /// Controller whose current model starts at the benchmark parameters
    pub fn new(benchmark: SolowParams) -> Self {
        Self::with_axis(benchmark, CapitalAxis::standard())
    }

    pub fn with_axis(benchmark: SolowParams, axis: CapitalAxis) -> Self {
        let benchmark = Solow::new(benchmark);
        Self {
            axis,
            benchmark,
            current: benchmark,
        }
    }

    pub fn benchmark(&self) -> &Solow {
        &self.benchmark
    }

    pub fn current(&self) -> &Solow {
        &self.current
    }

    pub fn axis(&self) -> &CapitalAxis {
        &self.axis
    }

    /// Chart for the current state, without a transition hint
    pub fn figure(&self) -> Figure {
        let mut figure = Figure::new(Layout::new(TITLE, X_TITLE, Y_TITLE));
        for series in Series::ALL {
            figure.add_trace(self.trace(series));
        }
        figure
    }

    /// Replace all five current parameters and return the redrawn chart
    pub fn update(&mut self, s: f64, delta: f64, n: f64, alpha: f64, z: f64) -> Figure {
        self.apply(SolowParams::new(s, delta, n, alpha, z))
    }

    /// Same as [`update`](Self::update) with a prepared parameter record
    pub fn apply(&mut self, params: SolowParams) -> Figure {
        self.current = Solow::new(params);
        tracing::debug!(
            s = params.s,
            delta = params.delta,
            n = params.n,
            alpha = params.alpha,
            z = params.z,
            "Current model updated"
        );
        self.figure().with_transition(TRANSITION_DURATION_MS)
    }

    /// Compute one series over the axis
    pub fn trace(&self, series: Series) -> Trace {
        let model = if series.is_benchmark() {
            &self.benchmark
        } else {
            &self.current
        };

        let k = self.axis.points();
        let y = match series {
            Series::SavingsBenchmark | Series::Savings => model.savings_curve(k),
            Series::DepreciationBenchmark | Series::Depreciation => {
                model.depreciation_line(k.len())
            }
        };

        Trace::line(series.name(), k.to_vec(), y, series.style())
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(SolowParams::default())
    }
}
