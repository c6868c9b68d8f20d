use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NetError;
use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::square_error::SquareErrorLoss;

/// Selects which loss the network is trained against.
///
/// - `SquareError`  — sum of squared residuals; pair with Identity or Logistic output.
/// - `CrossEntropy` — per-output binary cross-entropy; pair with Logistic output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    SquareError,
    CrossEntropy,
}

impl LossType {
    /// Scalar loss for one sample.
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            LossType::SquareError  => SquareErrorLoss::loss(predicted, expected),
            LossType::CrossEntropy => CrossEntropyLoss::loss(predicted, expected),
        }
    }

    /// Per-output gradient for one sample.
    pub fn derivative(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            LossType::SquareError  => SquareErrorLoss::derivative(predicted, expected),
            LossType::CrossEntropy => CrossEntropyLoss::derivative(predicted, expected),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LossType::SquareError  => "square_error",
            LossType::CrossEntropy => "cross_entropy",
        }
    }
}

impl FromStr for LossType {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square_error" => Ok(LossType::SquareError),
            "cross_entropy" => Ok(LossType::CrossEntropy),
            other => Err(NetError::Configuration(format!(
                "unknown loss function `{other}` (expected `square_error` or `cross_entropy`)"
            ))),
        }
    }
}

impl fmt::Display for LossType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
