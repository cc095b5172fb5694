use crate::FloatScalar;

use super::StatsError;

/// Variance of a Poisson distribution with rate `lambda`.
///
/// Var(X) = λ. Returns NaN unless `lambda` is finite and strictly positive.
///
/// ```
/// use poisson_variance::stats::variance;
/// assert_eq!(variance(2.0_f64), 2.0);
/// assert!(variance(0.0_f64).is_nan());
/// assert!(variance(f32::INFINITY).is_nan());
/// ```
#[inline]
pub fn variance<T: FloatScalar>(lambda: T) -> T {
    if is_rate(lambda) {
        lambda
    } else {
        T::nan()
    }
}

#[inline]
fn is_rate<T: FloatScalar>(lambda: T) -> bool {
    lambda.is_finite() && lambda > T::zero()
}

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// # Example
///
/// ```
/// use poisson_variance::stats::Poisson;
///
/// let p = Poisson::new(3.0_f64).unwrap();
/// assert!((p.mean() - 3.0).abs() < 1e-14);
/// assert!((p.variance() - 3.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`. Requires a finite `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, StatsError> {
        if !is_rate(lambda) {
            return Err(StatsError::InvalidParameter);
        }
        Ok(Self { lambda })
    }

    /// Rate parameter λ.
    pub fn lambda(&self) -> T {
        self.lambda
    }

    /// Expected value E\[X\] = λ.
    pub fn mean(&self) -> T {
        self.lambda
    }

    /// Variance Var(X) = λ.
    pub fn variance(&self) -> T {
        self.lambda
    }
}
