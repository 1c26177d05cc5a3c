//! Solow model evaluation

use super::params::SolowParams;

/// A Solow model instance bound to one parameter set.
///
/// All functions are pure in their inputs and the bound parameters.
/// Capital stock must be positive; `savings(0.0)` divides by zero and
/// yields a non-finite value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solow {
    params: SolowParams,
}

impl Solow {
    pub fn new(params: SolowParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SolowParams {
        &self.params
    }

    /// Output per worker: `z · k^α`
    pub fn production(&self, k: f64) -> f64 {
        self.params.z * k.powf(self.params.alpha)
    }

    /// Savings per unit of capital: `s · f(k) / k`
    pub fn savings(&self, k: f64) -> f64 {
        self.params.s * self.production(k) / k
    }

    /// Depreciation reference level: `δ·s + n`.
    ///
    /// Independent of capital stock, so it plots as a flat line.
    pub fn depreciation(&self) -> f64 {
        self.params.delta * self.params.s + self.params.n
    }

    pub fn production_curve(&self, capital: &[f64]) -> Vec<f64> {
        capital.iter().map(|&k| self.production(k)).collect()
    }

    pub fn savings_curve(&self, capital: &[f64]) -> Vec<f64> {
        capital.iter().map(|&k| self.savings(k)).collect()
    }

    /// `depreciation()` repeated `len` times
    pub fn depreciation_line(&self, len: usize) -> Vec<f64> {
        vec![self.depreciation(); len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_savings_at_one_with_defaults() {
        let model = Solow::default();
        assert!((model.savings(1.0) - 0.6).abs() < EPS);
    }

    #[test]
    fn test_depreciation_with_defaults() {
        let model = Solow::default();
        assert!((model.depreciation() - 0.08).abs() < EPS);
    }

    #[test]
    fn test_savings_closed_form() {
        let model = Solow::new(SolowParams::new(0.5, 0.2, 0.09, 0.7, 9.0));
        let expected = 4.5 * 10f64.powf(-0.3);
        assert!((model.savings(10.0) - expected).abs() < 1e-9);
        assert!((model.savings(10.0) - 2.256).abs() < 1e-3);

        for k in 1..=100 {
            let k = k as f64;
            let p = model.params();
            let closed = p.s * p.z * k.powf(p.alpha - 1.0);
            assert!((model.savings(k) - closed).abs() < 1e-9 * closed.abs().max(1.0));
        }
    }

    #[test]
    fn test_depreciation_ignores_alpha() {
        let low = Solow::new(SolowParams::new(0.4, 0.3, 0.02, 0.1, 3.0));
        let high = Solow::new(SolowParams::new(0.4, 0.3, 0.02, 0.9, 3.0));
        assert_eq!(low.depreciation(), high.depreciation());
        assert_eq!(low.depreciation(), 0.3 * 0.4 + 0.02);
    }

    #[test]
    fn test_production() {
        let model = Solow::default();
        assert_eq!(model.production(1.0), 2.0);
        assert_eq!(model.production(0.0), 0.0);
        assert!((model.production(8.0) - 2.0 * 8f64.powf(0.3)).abs() < EPS);
    }

    #[test]
    fn test_savings_at_zero_is_not_finite() {
        let model = Solow::default();
        assert!(!model.savings(0.0).is_finite());
    }

    #[test]
    fn test_curves_are_elementwise() {
        let model = Solow::default();
        let k = [1.0, 2.0, 50.0];
        let savings = model.savings_curve(&k);
        let production = model.production_curve(&k);
        assert_eq!(savings.len(), 3);
        for (i, &ki) in k.iter().enumerate() {
            assert_eq!(savings[i], model.savings(ki));
            assert_eq!(production[i], model.production(ki));
        }
    }

    #[test]
    fn test_depreciation_line() {
        let model = Solow::default();
        let line = model.depreciation_line(100);
        assert_eq!(line.len(), 100);
        assert!(line.iter().all(|&v| v == model.depreciation()));
    }

    #[test]
    fn test_new_binds_params() {
        let params = SolowParams::new(0.9, 0.9, 0.09, 0.9, 9.0);
        assert_eq!(Solow::new(params).params(), &params);
        assert_eq!(Solow::default().params(), &SolowParams::default());
    }
}
