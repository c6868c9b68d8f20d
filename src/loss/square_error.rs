pub struct SquareErrorLoss;

impl SquareErrorLoss {
    /// Scalar loss for one sample: sum((expected - predicted)²)
    ///
    /// Deliberately un-normalised: no ½ factor and no mean over outputs.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).powi(2))
            .sum()
    }

    /// Per-output gradient: -2·(expected - predicted)
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| -2.0 * (y - p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sums_without_normalisation() {
        let loss = SquareErrorLoss::loss(&[0.5, 0.0], &[1.0, 1.0]);
        assert_relative_eq!(loss, 0.25 + 1.0);
    }

    #[test]
    fn derivative_is_twice_the_residual() {
        let grad = SquareErrorLoss::derivative(&[0.75, 0.2], &[0.25, 0.2]);
        assert_relative_eq!(grad[0], 1.0);
        assert_relative_eq!(grad[1], 0.0);
    }
}
