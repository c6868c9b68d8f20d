use serde::{Serialize, Deserialize};
use std::f64::consts::E;
use std::fmt;
use std::str::FromStr;

use crate::error::NetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Identity,
    /// The sigmoid `1 / (1 + e^-x)`.
    Logistic,
}

impl ActivationFunction {
    /// Element-wise activation of a neuron's net input.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Identity => x,
            ActivationFunction::Logistic => 1.0 / (1.0 + E.powf(-x)),
        }
    }

    /// Derivative of the activation, expressed in terms of the activation's
    /// **output** `fx = function(x)` rather than its input.
    ///
    /// The backward pass only keeps the neuron output around, and for the
    /// logistic curve `f'(x) = f(x)·(1 - f(x))` needs nothing else.
    pub fn derivative(&self, fx: f64) -> f64 {
        match self {
            ActivationFunction::Identity => 1.0,
            ActivationFunction::Logistic => fx * (1.0 - fx),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFunction::Identity => "identity",
            ActivationFunction::Logistic => "logistic",
        }
    }
}

impl FromStr for ActivationFunction {
    type Err = NetError;

    /// Resolves a configuration name. `sigmoid` is accepted as an alias of
    /// `logistic` and `linear` as an alias of `identity`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "linear" => Ok(ActivationFunction::Identity),
            "logistic" | "sigmoid" => Ok(ActivationFunction::Logistic),
            other => Err(NetError::Configuration(format!(
                "unknown activation function `{other}` (expected `identity` or `logistic`)"
            ))),
        }
    }
}

impl fmt::Display for ActivationFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn logistic_is_centered_at_one_half() {
        let act = ActivationFunction::Logistic;
        assert_relative_eq!(act.function(0.0), 0.5);
        assert_relative_eq!(act.derivative(act.function(0.0)), 0.25);
    }

    #[test]
    fn logistic_derivative_matches_finite_difference() {
        let act = ActivationFunction::Logistic;
        let h = 1e-6;
        for &x in &[-3.0, -0.5, 0.2, 1.7] {
            let numeric = (act.function(x + h) - act.function(x - h)) / (2.0 * h);
            assert_relative_eq!(act.derivative(act.function(x)), numeric, epsilon = 1e-8);
        }
    }

    #[test]
    fn identity_passes_through() {
        let act = ActivationFunction::Identity;
        assert_eq!(act.function(-4.25), -4.25);
        assert_eq!(act.derivative(123.0), 1.0);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("logistic".parse::<ActivationFunction>(), Ok(ActivationFunction::Logistic));
        assert_eq!("Sigmoid".parse::<ActivationFunction>(), Ok(ActivationFunction::Logistic));
        assert_eq!("identity".parse::<ActivationFunction>(), Ok(ActivationFunction::Identity));
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = "relu".parse::<ActivationFunction>().unwrap_err();
        assert!(matches!(err, NetError::Configuration(_)));
    }
}
