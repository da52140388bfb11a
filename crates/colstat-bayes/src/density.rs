//! Beta density and distribution evaluation
//!
//! The density is computed in log space via the log-Beta function so that
//! large shape parameters neither overflow the gamma function nor lose the
//! tails; a log-density that underflows to −∞ simply exponentiates to 0.

use crate::types::BetaParameters;
use colstat_core::math::special::{ln_beta, regularized_incomplete_beta};
use colstat_core::{Error, Result};

/// Beta(α, β) probability density at `x`.
///
/// Outside [0, 1] the density is 0 by definition. At the endpoints the
/// limiting conventions apply: a shape parameter above 1 pins the density
/// to 0, exactly 1 leaves the finite limit, and below 1 the density
/// diverges to +∞.
pub fn beta_pdf(alpha: f64, beta: f64, x: f64) -> Result<f64> {
    validate_shapes(alpha, beta)?;

    if !(0.0..=1.0).contains(&x) {
        return Ok(0.0);
    }
    if x == 0.0 || x == 1.0 {
        // ln(0) * 0 is NaN; resolve the endpoint limit explicitly
        let shape = if x == 0.0 { alpha } else { beta };
        return Ok(if shape > 1.0 {
            0.0
        } else if shape == 1.0 {
            (-ln_beta(alpha, beta)).exp()
        } else {
            f64::INFINITY
        });
    }

    let ln_pdf = (alpha - 1.0) * x.ln() + (beta - 1.0) * (1.0 - x).ln() - ln_beta(alpha, beta);
    Ok(ln_pdf.exp())
}

/// Beta(α, β) cumulative distribution at `x`.
///
/// The regularized incomplete Beta function; 0 below the support and 1
/// above it.
pub fn beta_cdf(alpha: f64, beta: f64, x: f64) -> Result<f64> {
    validate_shapes(alpha, beta)?;
    Ok(regularized_incomplete_beta(alpha, beta, x))
}

/// Evenly spaced `(x, pdf(x))` sample pairs over [0, 1].
///
/// Intended for the rendering collaborator's density curves; the core
/// hands back plain pairs and draws nothing. Requires at least two
/// points so the grid spacing is defined.
pub fn density_curve(params: BetaParameters, points: usize) -> Result<Vec<(f64, f64)>> {
    if points < 2 {
        return Err(Error::InvalidParameter(format!(
            "density curve needs at least 2 points, got {points}"
        )));
    }

    let step = 1.0 / (points - 1) as f64;
    (0..points)
        .map(|i| {
            let x = (i as f64 * step).min(1.0);
            Ok((x, beta_pdf(params.alpha(), params.beta(), x)?))
        })
        .collect()
}

fn validate_shapes(alpha: f64, beta: f64) -> Result<()> {
    if !(alpha > 0.0 && alpha.is_finite()) {
        return Err(Error::non_positive("alpha", alpha));
    }
    if !(beta > 0.0 && beta.is_finite()) {
        return Err(Error::non_positive("beta", beta));
    }
    Ok(())
}
