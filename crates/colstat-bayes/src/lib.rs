//! Bayesian inference engines for column statistics
//!
//! Conjugate-prior updating over numeric columns: Beta-Binomial for
//! success/failure processes, Normal-Normal for continuous measurements
//! with known observation noise, and multiplicative odds updating for
//! hypothesis comparison. Every engine is a stateless pure function; a
//! sequential update across time is expressed by the caller threading
//! the returned parameters into the next call.
//!
//! # Example
//!
//! ```rust
//! use colstat_bayes::{bayesian_update, credible_interval, BetaParameters};
//!
//! // Uniform prior, then 5 successes and 5 failures
//! let prior = BetaParameters::uniform();
//! let posterior = bayesian_update(prior, 5, 5);
//! assert_eq!(posterior, BetaParameters::new(6.0, 6.0).unwrap());
//!
//! let interval = credible_interval(posterior, 0.95).unwrap();
//! assert!(interval.lower < 0.5 && 0.5 < interval.upper);
//! ```

pub mod beta_binomial;
pub mod density;
pub mod hypothesis;
pub mod normal_normal;
pub mod types;

pub use beta_binomial::{
    bayesian_update, binarize, credible_interval, posterior_predictive, success_failure_counts,
};
pub use density::{beta_cdf, beta_pdf, density_curve};
pub use hypothesis::bayesian_hypothesis_testing;
pub use normal_normal::{bayesian_credible_region, bayesian_inference};
pub use types::{BetaParameters, CredibleInterval, NormalParameters};
