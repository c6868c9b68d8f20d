use crate::error::{NetError, Result};

/// Plain gradient descent. Carries the learning rate shared by every layer
/// of a network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    /// Fails unless `learning_rate` is finite and strictly positive.
    pub fn new(learning_rate: f64) -> Result<Sgd> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(NetError::Configuration(format!(
                "learning rate must be a positive number, got {learning_rate}"
            )));
        }
        Ok(Sgd { learning_rate })
    }

    /// Applies one update `w[i] -= lr · delta · x[i]` to a neuron's weights.
    /// `inputs` includes the trailing bias input, so the bias is updated too.
    pub fn step(&self, weights: &mut [f64], delta: f64, inputs: &[f64]) {
        for (w, x) in weights.iter_mut().zip(inputs.iter()) {
            *w -= self.learning_rate * delta * x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_rates() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(Sgd::new(lr), Err(NetError::Configuration(_))), "lr = {lr}");
        }
    }

    #[test]
    fn step_moves_against_the_gradient() {
        let sgd = Sgd::new(0.5).unwrap();
        let mut weights = vec![1.0, -1.0, 0.0];
        sgd.step(&mut weights, 2.0, &[1.0, 0.5, 1.0]);
        assert_eq!(weights, vec![0.0, -1.5, -1.0]);
    }
}
