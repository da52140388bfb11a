//! Pearson correlation between paired numeric columns

use colstat_core::{Error, Result};

/// Pearson correlation coefficient between two equal-length series.
///
/// Computed as covariance over the product of standard deviations, with
/// the means factored out once. Either series having zero variance makes
/// the ratio undefined and is surfaced as [`Error::DegenerateInput`]
/// instead of silently producing NaN. The result is clamped to [-1, 1]
/// to absorb floating-point overshoot on perfectly collinear input.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        covariance += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    if sum_sq_x == 0.0 {
        return Err(Error::zero_variance("x series"));
    }
    if sum_sq_y == 0.0 {
        return Err(Error::zero_variance("y series"));
    }

    let r = covariance / (sum_sq_x * sum_sq_y).sqrt();
    Ok(r.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_positive_correlation() {
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_relative_eq!(r, 1.0);

        // Affine transforms preserve perfect correlation
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
        assert_relative_eq!(r, 1.0);
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let r = pearson_correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert_relative_eq!(r, -1.0);
    }

    #[test]
    fn test_no_correlation() {
        // Symmetric V shape: covariance cancels exactly
        let x = [-2.0, -1.0, 0.0, 1.0, 2.0];
        let y = [4.0, 1.0, 0.0, 1.0, 4.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert_relative_eq!(r, 0.0);
    }

    #[test]
    fn test_known_value() {
        // Anscombe-style small sample with a hand-checked coefficient
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert_relative_eq!(r, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_result_stays_in_unit_interval() {
        let x = [1e-8, 2e-8, 3e-8, 4.0000000001e-8];
        let y = [1e-8, 2e-8, 3e-8, 4e-8];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }

    #[test]
    fn test_length_mismatch() {
        let result = pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_too_short() {
        let result = pearson_correlation(&[1.0], &[1.0]);
        assert!(matches!(result, Err(Error::InsufficientData { .. })));
    }

    #[test]
    fn test_zero_variance_is_degenerate() {
        let constant = [5.0, 5.0, 5.0];
        let varying = [1.0, 2.0, 3.0];
        assert!(matches!(
            pearson_correlation(&constant, &varying),
            Err(Error::DegenerateInput(_))
        ));
        assert!(matches!(
            pearson_correlation(&varying, &constant),
            Err(Error::DegenerateInput(_))
        ));
        assert!(matches!(
            pearson_correlation(&constant, &constant),
            Err(Error::DegenerateInput(_))
        ));
    }
}
