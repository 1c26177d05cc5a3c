//! Capital stock axis

use serde::Serialize;

/// Evenly spaced capital-stock values used as the x axis of every chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CapitalAxis {
    points: Vec<f64>,
}

impl CapitalAxis {
    /// Number of points on the dashboard axis
    pub const STANDARD_POINTS: usize = 100;

    /// `count` evenly spaced values from `start` to `stop` inclusive.
    ///
    /// The last value is pinned to `stop` so rounding in the step never
    /// moves the end of the axis.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Self {
        let points = match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (count - 1) as f64;
                let mut points: Vec<f64> =
                    (0..count).map(|i| start + i as f64 * step).collect();
                points[count - 1] = stop;
                points
            }
        };
        Self { points }
    }

    /// 100 points from 1 to 100
    pub fn standard() -> Self {
        Self::linspace(1.0, 100.0, Self::STANDARD_POINTS)
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for CapitalAxis {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_axis() {
        let axis = CapitalAxis::standard();
        assert_eq!(axis.len(), 100);
        assert_eq!(axis.points()[0], 1.0);
        assert_eq!(axis.points()[99], 100.0);
        for (i, &k) in axis.points().iter().enumerate() {
            assert_eq!(k, (i + 1) as f64);
        }
    }

    #[test]
    fn test_linspace_pins_stop() {
        let axis = CapitalAxis::linspace(0.1, 0.9, 9);
        assert_eq!(axis.len(), 9);
        assert_eq!(axis.points()[8], 0.9);
        assert!((axis.points()[4] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(CapitalAxis::linspace(1.0, 5.0, 0).is_empty());
        assert_eq!(CapitalAxis::linspace(1.0, 5.0, 1).points(), &[1.0]);
    }

    #[test]
    fn test_serializes_as_array() {
        let axis = CapitalAxis::linspace(1.0, 3.0, 3);
        assert_eq!(serde_json::to_string(&axis).unwrap(), "[1.0,2.0,3.0]");
    }
}
