//! Normal-Normal conjugate inference for continuous measurements with
//! known observation noise

use crate::types::{CredibleInterval, NormalParameters};
use colstat_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Precision-weighted conjugate posterior over a continuous quantity.
///
/// With prior Normal(μ₀, σ₀) and n observations of known noise σ, the
/// posterior precision is 1/σ₀² + n/σ² and the posterior mean is the
/// precision-weighted combination of μ₀ and the sample mean. More data
/// or tighter noise pulls the posterior toward the sample mean.
pub fn bayesian_inference(
    series: &[f64],
    prior: NormalParameters,
    observed_sigma: f64,
) -> Result<NormalParameters> {
    if series.is_empty() {
        return Err(Error::EmptyInput("bayesian inference"));
    }
    if observed_sigma <= 0.0 || !observed_sigma.is_finite() {
        return Err(Error::non_positive("observed_sigma", observed_sigma));
    }

    let n = series.len() as f64;
    let sample_mean = series.iter().sum::<f64>() / n;

    let prior_precision = prior.precision();
    let data_precision = n / (observed_sigma * observed_sigma);
    let posterior_precision = prior_precision + data_precision;

    let posterior_mean =
        (prior.mean() * prior_precision + sample_mean * data_precision) / posterior_precision;
    let posterior_std = 1.0 / posterior_precision.sqrt();

    NormalParameters::new(posterior_mean, posterior_std)
}

/// Central credible region of the Normal-Normal posterior.
///
/// Computes the posterior as in [`bayesian_inference`] and returns
/// mean ± z·std with z the two-tailed standard-normal critical value for
/// the requested confidence (1.959964 at 95%). Call sites conventionally
/// pass 0.95.
pub fn bayesian_credible_region(
    series: &[f64],
    prior: NormalParameters,
    observed_sigma: f64,
    confidence_level: f64,
) -> Result<CredibleInterval> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::invalid_confidence(confidence_level));
    }

    let posterior = bayesian_inference(series, prior, observed_sigma)?;

    let standard_normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Other(anyhow::anyhow!("failed to create normal distribution: {e}")))?;
    let z = standard_normal.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);

    let margin = z * posterior.std_dev();
    Ok(CredibleInterval::new(
        posterior.mean() - margin,
        posterior.mean() + margin,
        confidence_level,
    ))
}
