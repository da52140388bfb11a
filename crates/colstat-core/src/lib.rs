//! Core error types and numeric utilities for column-stats
//!
//! This crate provides the foundation shared by the column-stats crates:
//!
//! - A unified [`Error`]/[`Result`] pair that every statistical operation
//!   reports failures through.
//! - The [`math`] module with the special functions (log-gamma, log-beta,
//!   regularized incomplete Beta) and the bisection root-finder that the
//!   Bayesian engines build on.
//!
//! Everything here is a pure function over `f64` values; nothing allocates
//! beyond local working memory and nothing retains state between calls.

pub mod error;
pub mod math;

pub use error::{Error, Result};
