//! Parameter and interval types shared by the Bayesian engines

use colstat_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of a Beta(α, β) belief over a probability of success.
///
/// Both shape parameters are strictly positive; the constructor enforces
/// the invariant and every update preserves it, so a `BetaParameters`
/// value always names a proper distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaParameters {
    alpha: f64,
    beta: f64,
}

impl BetaParameters {
    /// Create Beta(α, β) parameters, requiring both to be > 0 and finite.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(Error::non_positive("alpha", alpha));
        }
        if !(beta > 0.0 && beta.is_finite()) {
            return Err(Error::non_positive("beta", beta));
        }
        Ok(Self { alpha, beta })
    }

    /// The uniform prior Beta(1, 1): every probability equally plausible.
    pub fn uniform() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    /// Jeffreys' non-informative prior Beta(0.5, 0.5).
    pub fn jeffreys() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
        }
    }

    /// The α shape parameter.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The β shape parameter.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Mean of the distribution, α / (α + β).
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    /// Mode (α − 1) / (α + β − 2), defined only for α > 1 and β > 1;
    /// U-shaped and boundary-peaked distributions have no interior mode.
    pub fn mode(&self) -> Option<f64> {
        if self.alpha > 1.0 && self.beta > 1.0 {
            Some((self.alpha - 1.0) / (self.alpha + self.beta - 2.0))
        } else {
            None
        }
    }

    /// Variance αβ / [(α + β)²(α + β + 1)].
    pub fn variance(&self) -> f64 {
        let sum = self.alpha + self.beta;
        (self.alpha * self.beta) / (sum * sum * (sum + 1.0))
    }

    // Adding non-negative counts to positive shapes keeps both positive.
    pub(crate) fn with_counts(self, successes: u64, failures: u64) -> Self {
        Self {
            alpha: self.alpha + successes as f64,
            beta: self.beta + failures as f64,
        }
    }
}

impl fmt::Display for BetaParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beta(α = {}, β = {})", self.alpha, self.beta)
    }
}

/// Parameters of a Normal(μ, σ) belief over a continuous quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalParameters {
    mean: f64,
    std_dev: f64,
}

impl NormalParameters {
    /// Create Normal(μ, σ) parameters, requiring σ > 0 and both finite.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "mean must be finite, got {mean}"
            )));
        }
        if !(std_dev > 0.0 && std_dev.is_finite()) {
            return Err(Error::non_positive("std_dev", std_dev));
        }
        Ok(Self { mean, std_dev })
    }

    /// The mean μ.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The standard deviation σ.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Precision 1/σ², the weight this belief carries in a conjugate update.
    pub fn precision(&self) -> f64 {
        1.0 / (self.std_dev * self.std_dev)
    }
}

impl fmt::Display for NormalParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Normal(μ = {}, σ = {})", self.mean, self.std_dev)
    }
}

/// A credible interval: the posterior mass `confidence_level` lies
/// between `lower` and `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredibleInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Posterior mass covered (e.g. 0.95)
    pub confidence_level: f64,
}

impl CredibleInterval {
    /// Create a new credible interval
    pub fn new(lower: f64, upper: f64, confidence_level: f64) -> Self {
        debug_assert!(lower <= upper);
        Self {
            lower,
            upper,
            confidence_level,
        }
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for CredibleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% credible interval: [{}, {}]",
            self.confidence_level * 100.0,
            self.lower,
            self.upper
        )
    }
}
