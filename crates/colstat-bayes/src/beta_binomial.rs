//! Beta-Binomial conjugate updating, credible intervals, and the
//! running posterior-predictive sequence

use crate::types::{BetaParameters, CredibleInterval};
use colstat_core::math::{roots, special::regularized_incomplete_beta};
use colstat_core::{Error, Result};
use tracing::debug;

/// Bisection tolerance for quantile inversion
const QUANTILE_TOL: f64 = 1e-6;
/// Iteration cap for the quantile root-finder
const QUANTILE_MAX_ITER: usize = 100;

/// Conjugate Bayesian update of a Beta prior with observed counts.
///
/// Posterior is Beta(α + successes, β + failures). The operation is
/// associative: two sequential updates equal one update with summed
/// counts, so the caller may thread parameters through time freely.
pub fn bayesian_update(prior: BetaParameters, successes: u64, failures: u64) -> BetaParameters {
    prior.with_counts(successes, failures)
}

/// Two-tailed equal-mass credible interval of a Beta posterior.
///
/// No closed form exists for the Beta quantile, so each bound is found
/// by bisecting the CDF (regularized incomplete Beta) over [0, 1] until
/// the bracket width drops below 1e-6. The root-finder's iteration cap
/// makes termination deterministic; exhausting it surfaces as
/// [`Error::Convergence`].
pub fn credible_interval(
    params: BetaParameters,
    confidence_level: f64,
) -> Result<CredibleInterval> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(Error::invalid_confidence(confidence_level));
    }

    let tail = (1.0 - confidence_level) / 2.0;
    let lower = beta_quantile(params, tail)?;
    let upper = beta_quantile(params, 1.0 - tail)?;

    debug!(
        alpha = params.alpha(),
        beta = params.beta(),
        confidence_level,
        lower,
        upper,
        "computed Beta credible interval"
    );

    Ok(CredibleInterval::new(lower, upper, confidence_level))
}

/// Inverse CDF of Beta(α, β) at cumulative probability `p`.
fn beta_quantile(params: BetaParameters, p: f64) -> Result<f64> {
    let (alpha, beta) = (params.alpha(), params.beta());
    roots::bisect(
        |x| regularized_incomplete_beta(alpha, beta, x) - p,
        0.0,
        1.0,
        QUANTILE_TOL,
        QUANTILE_MAX_ITER,
    )
}

/// Running posterior-predictive sequence over binary outcomes.
///
/// For each outcome, the predictive probability of success under the
/// posterior prevailing at that step — α/(α+β) — is emitted first, then
/// the outcome is folded into the posterior before the next step. The
/// result has the same length as the input, empty input included.
pub fn posterior_predictive(prior: BetaParameters, outcomes: &[bool]) -> Vec<f64> {
    let mut posterior = prior;
    outcomes
        .iter()
        .map(|&success| {
            let p = posterior.mean();
            posterior = bayesian_update(posterior, success as u64, !success as u64);
            p
        })
        .collect()
}

/// Encode a numeric series as success/failure outcomes against a threshold.
///
/// A value strictly above the threshold is a success. This is the pure
/// counterpart of the orchestration layer's "spending above X" question;
/// the core never asks for the threshold itself.
pub fn binarize(series: &[f64], threshold: f64) -> Vec<bool> {
    series.iter().map(|&x| x > threshold).collect()
}

/// Success and failure counts of a series against a threshold.
pub fn success_failure_counts(series: &[f64], threshold: f64) -> (u64, u64) {
    let successes = series.iter().filter(|&&x| x > threshold).count() as u64;
    (successes, series.len() as u64 - successes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::beta_cdf;
    use approx::assert_relative_eq;

    #[test]
    fn test_bayesian_update() {
        let posterior = bayesian_update(BetaParameters::uniform(), 5, 5);
        assert_eq!(posterior, BetaParameters::new(6.0, 6.0).unwrap());
    }

    #[test]
    fn test_bayesian_update_is_associative() {
        let prior = BetaParameters::new(2.0, 3.0).unwrap();
        let sequential = bayesian_update(bayesian_update(prior, 3, 2), 2, 3);
        let summed = bayesian_update(prior, 5, 5);
        assert_eq!(sequential, summed);
    }

    #[test]
    fn test_bayesian_update_zero_counts() {
        let prior = BetaParameters::new(2.5, 7.5).unwrap();
        assert_eq!(bayesian_update(prior, 0, 0), prior);
    }

    #[test]
    fn test_credible_interval_symmetric_posterior() {
        let params = BetaParameters::new(6.0, 6.0).unwrap();
        let interval = credible_interval(params, 0.95).unwrap();

        assert!(interval.lower > 0.0);
        assert!(interval.upper < 1.0);
        assert!(interval.lower < 0.5 && 0.5 < interval.upper);
        // Beta(6, 6) is symmetric around 0.5, so the bounds are too
        assert_relative_eq!(
            0.5 - interval.lower,
            interval.upper - 0.5,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_credible_interval_bounds_round_trip_the_cdf() {
        let params = BetaParameters::new(14.0, 3.0).unwrap();
        let interval = credible_interval(params, 0.9).unwrap();
        let cdf_lower = beta_cdf(14.0, 3.0, interval.lower).unwrap();
        let cdf_upper = beta_cdf(14.0, 3.0, interval.upper).unwrap();
        assert_relative_eq!(cdf_lower, 0.05, epsilon = 1e-4);
        assert_relative_eq!(cdf_upper, 0.95, epsilon = 1e-4);
    }

    #[test]
    fn test_credible_interval_narrows_with_evidence() {
        let weak = credible_interval(BetaParameters::new(3.0, 3.0).unwrap(), 0.95).unwrap();
        let strong = credible_interval(BetaParameters::new(60.0, 60.0).unwrap(), 0.95).unwrap();
        assert!(strong.width() < weak.width());
    }

    #[test]
    fn test_credible_interval_invalid_confidence() {
        let params = BetaParameters::uniform();
        assert!(credible_interval(params, 0.0).is_err());
        assert!(credible_interval(params, 1.0).is_err());
        assert!(credible_interval(params, -0.5).is_err());
        assert!(credible_interval(params, 1.5).is_err());
    }

    #[test]
    fn test_posterior_predictive_uniform_prior() {
        let probs = posterior_predictive(BetaParameters::uniform(), &[true, false, true]);
        assert_eq!(probs.len(), 3);
        // Uniform prior predicts 0.5 before any evidence
        assert_relative_eq!(probs[0], 0.5);
        // After one success the posterior is Beta(2, 1)
        assert_relative_eq!(probs[1], 2.0 / 3.0);
        // After a success and a failure, Beta(2, 2)
        assert_relative_eq!(probs[2], 0.5);
    }

    #[test]
    fn test_posterior_predictive_empty_input() {
        assert!(posterior_predictive(BetaParameters::uniform(), &[]).is_empty());
    }

    #[test]
    fn test_posterior_predictive_drifts_toward_evidence() {
        let outcomes = vec![true; 50];
        let probs = posterior_predictive(BetaParameters::uniform(), &outcomes);
        assert!(probs.windows(2).all(|w| w[1] > w[0]));
        assert!(*probs.last().unwrap() > 0.9);
    }

    #[test]
    fn test_binarize_and_counts() {
        let series = [120.0, 85.0, 240.0, 500.0, 501.0];
        assert_eq!(
            binarize(&series, 500.0),
            vec![false, false, false, false, true]
        );
        assert_eq!(success_failure_counts(&series, 500.0), (1, 4));
        assert_eq!(success_failure_counts(&series, 0.0), (5, 0));
        assert_eq!(success_failure_counts(&[], 10.0), (0, 0));
    }
}
