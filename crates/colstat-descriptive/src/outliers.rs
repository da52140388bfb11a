//! Z-score outlier detection

use crate::descriptive::population_moments;
use colstat_core::{Error, Result};

/// Per-value z-scores of a series against its own population moments.
///
/// A constant series scores every value 0; its members sit exactly on the
/// mean of a distribution with no spread.
pub fn z_scores(series: &[f64]) -> Result<Vec<f64>> {
    let (mean, std) = population_moments(series)?;
    if std == 0.0 {
        return Ok(vec![0.0; series.len()]);
    }
    Ok(series.iter().map(|&x| (x - mean) / std).collect())
}

/// Values whose absolute z-score exceeds `threshold`, in input order.
///
/// Zero-variance input reports no outliers: a constant series has no
/// anomalies. That is the one documented silent-default in this crate;
/// an empty series is still an error.
pub fn z_score_outliers(series: &[f64], threshold: f64) -> Result<Vec<f64>> {
    if threshold <= 0.0 {
        return Err(Error::non_positive("threshold", threshold));
    }

    let (mean, std) = population_moments(series)?;
    if std == 0.0 {
        return Ok(Vec::new());
    }

    Ok(series
        .iter()
        .copied()
        .filter(|&x| ((x - mean) / std).abs() > threshold)
        .collect())
}
