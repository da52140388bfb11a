//! Descriptive statistics over numeric columns
//!
//! This crate covers the classical, non-Bayesian half of column-stats:
//! location and spread summaries, Pearson correlation between paired
//! columns, and z-score outlier detection. Every function borrows its
//! input slice, never mutates it, and reports failures through
//! [`colstat_core::Error`].
//!
//! # Example
//!
//! ```rust
//! use colstat_descriptive::{mean, pearson_correlation, z_score_outliers};
//!
//! let spending = vec![120.0, 85.0, 240.0, 95.0, 2200.0];
//! let income = vec![3000.0, 2800.0, 4100.0, 2900.0, 9500.0];
//!
//! let m = mean(&spending).unwrap();
//! let r = pearson_correlation(&income, &spending).unwrap();
//! let flagged = z_score_outliers(&spending, 1.5).unwrap();
//!
//! assert!(m > 0.0);
//! assert!(r > 0.9);
//! assert_eq!(flagged, vec![2200.0]);
//! ```

pub mod correlation;
pub mod descriptive;
pub mod outliers;

pub use correlation::pearson_correlation;
pub use descriptive::{cumulative_sum, mean, median, standard_deviation, variance};
pub use outliers::{z_score_outliers, z_scores};
