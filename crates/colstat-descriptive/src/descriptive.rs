//! Location and spread summaries: mean, median, sample variance

use colstat_core::{Error, Result};

/// Arithmetic mean of a series.
pub fn mean(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(Error::EmptyInput("mean"));
    }
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Median of a series.
///
/// Sorts a copy, so the caller's slice is left untouched. Even-length
/// input returns the average of the two middle elements.
pub fn median(series: &[f64]) -> Result<f64> {
    if series.is_empty() {
        return Err(Error::EmptyInput("median"));
    }

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Sample variance (n − 1 denominator).
///
/// The sample convention is chosen over the population one so the result
/// feeds directly into inferential use downstream; it is undefined for
/// fewer than two observations.
pub fn variance(series: &[f64]) -> Result<f64> {
    if series.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: series.len(),
        });
    }

    let m = mean(series)?;
    let sum_sq = series.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    Ok(sum_sq / (series.len() - 1) as f64)
}

/// Sample standard deviation (square root of [`variance`]).
pub fn standard_deviation(series: &[f64]) -> Result<f64> {
    Ok(variance(series)?.sqrt())
}

/// Running totals of a series, same length as the input.
///
/// An empty series yields an empty result rather than an error; there is
/// nothing to accumulate.
pub fn cumulative_sum(series: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    series
        .iter()
        .map(|&x| {
            total += x;
            total
        })
        .collect()
}

/// Population (n denominator) mean and standard deviation.
///
/// Shared with the outlier detector, which scores against the population
/// moments of the series it inspects.
pub(crate) fn population_moments(series: &[f64]) -> Result<(f64, f64)> {
    if series.is_empty() {
        return Err(Error::EmptyInput("population moments"));
    }

    let m = mean(series)?;
    let sum_sq = series.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    Ok((m, (sum_sq / series.len() as f64).sqrt()))
}
