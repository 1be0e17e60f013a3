//! Scale functions for data-to-screen mappings.
//!
//! Based on the Grammar of Graphics [Wilkinson 2005].

use crate::error::{Error, Result};

/// Fraction of the data span added on each side of a padded axis.
pub const DEFAULT_MARGIN: f64 = 0.05;

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale from `f64` data to `f32` screen coordinates.
///
/// The domain stays in full precision so nearby large values (timestamps,
/// counters) keep distinct positions; only the mapped result is narrowed.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f64,
    domain_max: f64,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain_min equals domain_max or either is not finite.
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Result<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(Error::ScaleDomain("Domain bounds must be finite".to_string()));
        }
        if domain.0 == domain.1 {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Create a scale over a data extent, padded by `margin` of the span on
    /// both sides.
    ///
    /// A degenerate extent (all values equal) is widened around the value so
    /// constant series still get an axis. Padding saturates at the `f64`
    /// limits instead of overflowing.
    pub fn padded(extent: (f64, f64), margin: f64, range: (f32, f32)) -> Result<Self> {
        let (lo, hi) = widen_degenerate(extent);
        let pad = half_span(lo, hi) * (2.0 * margin.max(0.0));
        let lo = (lo - pad).max(f64::MIN);
        let hi = (hi + pad).min(f64::MAX);
        Self::new((lo, hi), range)
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f64 {
        let t = f64::from(value - self.range_min) / f64::from(self.range_max - self.range_min);
        self.domain_min * (1.0 - t) + self.domain_max * t
    }

    /// Round tick positions inside the domain, roughly `target` of them.
    #[must_use]
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        let lo = self.domain_min.min(self.domain_max);
        let hi = self.domain_min.max(self.domain_max);
        let step = nice_step(half_span(lo, hi) / target.max(1) as f64 * 2.0);
        if !step.is_finite() || step <= 0.0 {
            return Vec::new();
        }

        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

impl Scale<f64, f32> for LinearScale {
    fn scale(&self, value: f64) -> f32 {
        // halved operands keep differences finite near the f64 limits
        let t = (value / 2.0 - self.domain_min / 2.0) / half_span(self.domain_min, self.domain_max);
        (f64::from(self.range_min) + t * f64::from(self.range_max - self.range_min)) as f32
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Half of `hi - lo`, finite for any finite inputs.
fn half_span(lo: f64, hi: f64) -> f64 {
    hi / 2.0 - lo / 2.0
}

fn widen_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    let tolerance = f64::EPSILON * lo.abs().max(hi.abs()).max(1.0);
    if half_span(lo, hi).abs() * 2.0 > tolerance {
        return (lo, hi);
    }
    let half = if lo == 0.0 { 0.5 } else { lo.abs() * 0.05 };
    (lo - half, hi + half)
}

/// Smallest of 1, 2, 5 × 10^k that is >= `raw`.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 500.0)).unwrap();
        assert_relative_eq!(scale.scale(0.0), 0.0);
        assert_relative_eq!(scale.scale(50.0), 250.0);
        assert_relative_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).unwrap();
        assert_relative_eq!(scale.scale(10.0), 0.0);
        assert_relative_eq!(scale.invert(50.0), 5.0);
    }

    #[test]
    fn test_linear_scale_rejects_equal_bounds() {
        assert!(LinearScale::new((1.0, 1.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_padded_adds_margin() {
        let scale = LinearScale::padded((0.0, 10.0), 0.05, (0.0, 1.0)).unwrap();
        assert_relative_eq!(scale.domain().0, -0.5);
        assert_relative_eq!(scale.domain().1, 10.5);
    }

    #[test]
    fn test_padded_widens_constant_data() {
        let scale = LinearScale::padded((3.0, 3.0), 0.0, (0.0, 1.0)).unwrap();
        let (lo, hi) = scale.domain();
        assert!(lo < 3.0 && hi > 3.0);
        assert_relative_eq!(scale.scale(3.0), 0.5, epsilon = 1e-4);

        let zero = LinearScale::padded((0.0, 0.0), 0.0, (0.0, 1.0)).unwrap();
        assert_relative_eq!(zero.domain().0, -0.5);
    }

    #[test]
    fn test_ticks_are_round() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 1.0)).unwrap();
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_ticks_inside_domain() {
        let scale = LinearScale::padded((0.0, 4.0), DEFAULT_MARGIN, (0.0, 1.0)).unwrap();
        let (lo, hi) = scale.domain();
        assert!(scale.ticks(5).iter().all(|&t| t >= lo && t <= hi));
    }

    #[test]
    fn test_timestamp_domain_keeps_resolution() {
        let scale = LinearScale::padded((1_700_000_000.0, 1_700_000_100.0), 0.0, (0.0, 100.0))
            .unwrap();
        assert_relative_eq!(scale.scale(1_700_000_000.0), 0.0);
        assert_relative_eq!(scale.scale(1_700_000_050.0), 50.0);
        assert_relative_eq!(scale.scale(1_700_000_100.0), 100.0);
        assert_relative_eq!(scale.invert(25.0), 1_700_000_025.0);
    }

    #[test]
    fn test_padded_saturates_near_f64_limits() {
        let scale = LinearScale::padded((-1.7e308, 1.7e308), DEFAULT_MARGIN, (0.0, 100.0)).unwrap();
        let (lo, hi) = scale.domain();
        assert!(lo.is_finite() && hi.is_finite());
        assert_relative_eq!(scale.scale(0.0), 50.0, epsilon = 1e-3);
        assert!(scale.ticks(5).iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_nice_step() {
        assert_relative_eq!(nice_step(0.3), 0.5);
        assert_relative_eq!(nice_step(1.5), 2.0);
        assert_relative_eq!(nice_step(7.0), 10.0);
        assert_relative_eq!(nice_step(0.0), 0.0);
    }
}
