//! Bayesian odds updating from a likelihood ratio

use colstat_core::{Error, Result};

/// Update prior odds for H1 against H0 by a likelihood ratio.
///
/// Bayes' rule in odds form: posterior odds = prior odds × likelihood
/// ratio. Both factors must be strictly positive; a zero or negative
/// likelihood ratio is a modeling error upstream, not a valid ratio of
/// non-negative sums, and is rejected rather than absorbed.
pub fn bayesian_hypothesis_testing(prior_odds: f64, likelihood_ratio: f64) -> Result<f64> {
    if !(prior_odds > 0.0 && prior_odds.is_finite()) {
        return Err(Error::non_positive("prior_odds", prior_odds));
    }
    if !(likelihood_ratio > 0.0 && likelihood_ratio.is_finite()) {
        return Err(Error::non_positive("likelihood_ratio", likelihood_ratio));
    }
    Ok(prior_odds * likelihood_ratio)
}
