//! Descriptive and Bayesian statistics over numeric columns of tabular data
//!
//! column-stats is the computation core behind a transaction-analysis
//! pipeline: the ingestion layer extracts numeric columns from records,
//! the orchestration layer collects parameters, and the rendering layer
//! draws charts. This workspace owns only the numbers in between. Every
//! operation is a synchronous pure function over borrowed slices; the
//! collaborators thread values in and out.
//!
//! The facade re-exports the member crates:
//!
//! - [`descriptive`]: mean/median/variance summaries, Pearson
//!   correlation, z-score outlier detection.
//! - [`bayes`]: Beta-Binomial and Normal-Normal conjugate updating,
//!   credible intervals, posterior-predictive sequences, odds updates,
//!   and Beta density evaluation.
//! - [`colstat_core`]: the shared [`Error`]/[`Result`] pair and the
//!   special functions underneath the Bayesian engines.
//!
//! # Example
//!
//! ```rust
//! use column_stats::{
//!     bayesian_update, credible_interval, mean, pearson_correlation,
//!     success_failure_counts, BetaParameters,
//! };
//!
//! let spending = vec![120.0, 85.0, 640.0, 95.0, 720.0];
//! let income = vec![3000.0, 2800.0, 5100.0, 2900.0, 5500.0];
//!
//! let avg = mean(&spending)?;
//! let r = pearson_correlation(&income, &spending)?;
//!
//! // Which fraction of transactions clears 500? Update a uniform prior.
//! let (successes, failures) = success_failure_counts(&spending, 500.0);
//! let posterior = bayesian_update(BetaParameters::uniform(), successes, failures);
//! let interval = credible_interval(posterior, 0.95)?;
//!
//! assert!(avg > 0.0 && r > 0.0);
//! assert!(interval.lower < posterior.mean() && posterior.mean() < interval.upper);
//! # Ok::<(), colstat_core::Error>(())
//! ```

pub use colstat_bayes as bayes;
pub use colstat_core;
pub use colstat_descriptive as descriptive;

pub use colstat_core::{Error, Result};

pub use colstat_descriptive::{
    cumulative_sum, mean, median, pearson_correlation, standard_deviation, variance,
    z_score_outliers, z_scores,
};

pub use colstat_bayes::{
    bayesian_credible_region, bayesian_hypothesis_testing, bayesian_inference, bayesian_update,
    beta_cdf, beta_pdf, binarize, credible_interval, density_curve, posterior_predictive,
    success_failure_counts, BetaParameters, CredibleInterval, NormalParameters,
};
