use crate::error::ForecastError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

/// Ordinary least-squares line fit.
///
/// `slope = (n*Σxy - Σx*Σy) / (n*Σx² - (Σx)²)`,
/// `intercept = (Σy - slope*Σx) / n`. Callers must guarantee `n >= 2` and
/// non-constant `x`; violating that is a contract error, not a forecast
/// outcome.
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit, ForecastError> {
    if x.len() != y.len() {
        return Err(ForecastError::Computation(format!(
            "regression input length mismatch: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 2 {
        return Err(ForecastError::Computation(format!(
            "regression needs at least 2 points, got {n}"
        )));
    }

    let n_f = n as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(xi, yi)| xi * yi).sum();
    let sum_xx: f64 = x.iter().map(|xi| xi * xi).sum();

    let denom = n_f * sum_xx - sum_x * sum_x;
    if denom.abs() < f64::EPSILON {
        return Err(ForecastError::Computation(
            "degenerate regression: zero variance in x".to_string(),
        ));
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n_f;
    Ok(LinearFit { slope, intercept })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_on_line() {
        let x: Vec<f64> = (0..6).map(|i| i as f64).collect();
        let y = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0];
        let fit = linear_regression(&x, &y).unwrap();
        assert!((fit.slope - 10.0).abs() < 1e-9);
        assert!((fit.intercept - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_slope() {
        let x = vec![0.0, 1.0, 2.0];
        let y = vec![30.0, 20.0, 10.0];
        let fit = linear_regression(&x, &y).unwrap();
        assert!((fit.slope + 10.0).abs() < 1e-9);
        assert!((fit.intercept - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_too_few_points_is_an_error() {
        assert!(linear_regression(&[1.0], &[2.0]).is_err());
        assert!(linear_regression(&[], &[]).is_err());
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        assert!(linear_regression(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_constant_x_is_an_error() {
        assert!(linear_regression(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
    }
}
