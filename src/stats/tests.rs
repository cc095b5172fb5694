use super::*;

// ======================== variance ========================

#[test]
fn variance_of_valid_rates() {
    for lambda in [2.0_f64, 4.0, 8.0, 16.0] {
        assert!((variance(lambda) - lambda).abs() < 1e-14);
    }
    assert_eq!(variance(1e-300_f64), 1e-300);
    assert_eq!(variance(f64::MAX), f64::MAX);
}

#[test]
fn variance_of_invalid_rates() {
    assert!(variance(-1.0_f64).is_nan());
    assert!(variance(0.0_f64).is_nan());
    assert!(variance(-0.0_f64).is_nan());
    assert!(variance(f64::NAN).is_nan());
    assert!(variance(f64::INFINITY).is_nan());
    assert!(variance(f64::NEG_INFINITY).is_nan());
}

#[test]
fn variance_f32() {
    assert_eq!(variance(0.5_f32), 0.5);
    assert!(variance(-0.5_f32).is_nan());
}

// ======================== Poisson ========================

#[test]
fn poisson_mean_variance() {
    let p = Poisson::new(3.5_f64).unwrap();
    assert!((p.mean() - 3.5).abs() < 1e-14);
    assert!((p.variance() - 3.5).abs() < 1e-14);
    assert_eq!(p.lambda(), 3.5);
}

#[test]
fn poisson_matches_scalar_variance() {
    for lambda in [0.1_f64, 1.0, 42.0] {
        assert_eq!(Poisson::new(lambda).unwrap().variance(), variance(lambda));
    }
}

#[test]
fn poisson_invalid() {
    assert_eq!(Poisson::new(0.0_f64).unwrap_err(), StatsError::InvalidParameter);
    assert_eq!(Poisson::new(-1.0_f64).unwrap_err(), StatsError::InvalidParameter);
    assert_eq!(Poisson::new(f64::NAN).unwrap_err(), StatsError::InvalidParameter);
    assert_eq!(Poisson::new(f64::INFINITY).unwrap_err(), StatsError::InvalidParameter);
}

#[test]
fn stats_error_display() {
    assert_eq!(
        StatsError::InvalidParameter.to_string(),
        "distribution parameter out of valid range"
    );
}
