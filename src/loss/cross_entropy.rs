/// Per-output binary cross-entropy, meant for logistic output neurons whose
/// targets lie in `[0, 1]`.
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Scalar loss for one sample:
    ///   L = -sum(y·ln(p) + (1-y)·ln(1-p))
    ///
    /// No epsilon is added: a prediction of exactly 0 or 1 against the
    /// opposite target yields an infinite loss.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        -predicted.iter().zip(expected.iter())
            .map(|(p, y)| y * p.ln() + (1.0 - y) * (1.0 - p).ln())
            .sum::<f64>()
    }

    /// Per-output gradient w.r.t. the prediction: -(y/p) + (1-y)/(1-p)
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| -(y / p) + (1.0 - y) / (1.0 - p))
            .collect()
    }
}
