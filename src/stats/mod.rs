//! Poisson distribution moments.
//!
//! [`variance`] is the scalar kernel applied element-wise by
//! [`crate::elementwise`]: it returns λ for positive finite λ and NaN for
//! everything else. [`Poisson`] is the validated distribution object.
//!
//! # Example
//!
//! ```
//! use poisson_variance::stats::{variance, Poisson};
//!
//! assert_eq!(variance(4.0_f64), 4.0);
//! assert!(variance(-1.0_f64).is_nan());
//!
//! let p = Poisson::new(3.0_f64).unwrap();
//! assert!((p.variance() - 3.0).abs() < 1e-14);
//! ```

mod poisson;

#[cfg(test)]
mod tests;

pub use poisson::{variance, Poisson};

use thiserror::Error;

/// Errors from distribution construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    /// A parameter is out of its valid range.
    #[error("distribution parameter out of valid range")]
    InvalidParameter,
}
