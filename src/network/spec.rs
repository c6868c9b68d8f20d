use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::loss::loss_type::LossType;
use crate::math::matrix::Matrix;
use crate::network::network::NeuralNetwork;

/// Describes one layer in a network specification.
///
/// Fields:
/// - `neurons`    — number of neurons in this layer
/// - `activation` — `identity` or `logistic`
/// - `weights`    — optional explicit `neurons × (input_size + 1)` matrix,
///                  bias last; random U[-1, 1) weights when absent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub neurons: usize,
    pub activation: ActivationFunction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<Vec<f64>>>,
}

impl LayerSpec {
    pub fn new(neurons: usize, activation: ActivationFunction) -> LayerSpec {
        LayerSpec { neurons, activation, weights: None }
    }

    pub fn with_weights(neurons: usize, activation: ActivationFunction, weights: Vec<Vec<f64>>) -> LayerSpec {
        LayerSpec { neurons, activation, weights: Some(weights) }
    }
}

/// Topology descriptor handed to the engine: input width, loss, learning
/// rate and the ordered layers. Input layer widths are implied by the
/// previous layer, so only neuron counts are listed.
///
/// This is configuration only; trained weights are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub loss: LossType,
    pub learning_rate: f64,
    /// Ordered list of layer descriptions (input → output).
    pub layers: Vec<LayerSpec>,
    /// Seed for random initialisation; entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    /// Builds the network layer by layer. Fails on the first invalid layer.
    pub fn build(&self) -> Result<NeuralNetwork> {
        let mut network = match self.seed {
            Some(seed) => NeuralNetwork::with_seed(self.input_size, self.loss, self.learning_rate, seed)?,
            None => NeuralNetwork::new(self.input_size, self.loss, self.learning_rate)?,
        };
        for layer in &self.layers {
            let weights = layer.weights.clone().map(Matrix::from_data).transpose()?;
            network.add_layer(layer.neurons, layer.activation, weights)?;
        }
        Ok(network)
    }

    pub fn from_json_str(json: &str) -> Result<NetworkSpec> {
        serde_json::from_str(json)
            .map_err(|e| NetError::Configuration(format!("invalid network spec: {e}")))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| NetError::Configuration(format!("cannot read {}: {e}", path.display())))?;
        NetworkSpec::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| NetError::Configuration(format!("cannot serialize network spec: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS_EXAMPLE: &str = r#"{
        "input_size": 2,
        "loss": "square_error",
        "learning_rate": 0.25,
        "layers": [
            { "neurons": 2, "activation": "logistic",
              "weights": [[0.15, 0.20, 0.35], [0.25, 0.30, 0.35]] },
            { "neurons": 2, "activation": "logistic",
              "weights": [[0.40, 0.45, 0.60], [0.50, 0.55, 0.60]] }
        ]
    }"#;

    #[test]
    fn parses_and_builds_with_explicit_weights() {
        let spec = NetworkSpec::from_json_str(CLASS_EXAMPLE).unwrap();
        assert_eq!(spec.seed, None);
        let net = spec.build().unwrap();
        assert_eq!(net.layers().len(), 2);
        assert_eq!(net.layers()[1].weights().data[0], vec![0.40, 0.45, 0.60]);
        assert_eq!(net.learning_rate(), 0.25);
    }

    #[test]
    fn unknown_activation_is_a_configuration_error() {
        let json = r#"{ "input_size": 1, "loss": "square_error", "learning_rate": 1.0,
                        "layers": [{ "neurons": 1, "activation": "softplus" }] }"#;
        assert!(matches!(NetworkSpec::from_json_str(json), Err(NetError::Configuration(_))));
    }

    #[test]
    fn wrong_weight_shape_fails_the_build() {
        let spec = NetworkSpec {
            input_size: 2,
            loss: LossType::CrossEntropy,
            learning_rate: 0.5,
            layers: vec![LayerSpec::with_weights(1, ActivationFunction::Logistic, vec![vec![0.1, 0.2]])],
            seed: None,
        };
        assert_eq!(spec.build().unwrap_err(), NetError::dimension("weight matrix columns", 3, 2));
    }

    #[test]
    fn seeded_specs_build_identical_networks() {
        let spec = NetworkSpec {
            input_size: 3,
            loss: LossType::SquareError,
            learning_rate: 1.0,
            layers: vec![LayerSpec::new(4, ActivationFunction::Logistic), LayerSpec::new(2, ActivationFunction::Identity)],
            seed: Some(99),
        };
        let a = spec.build().unwrap();
        let b = spec.build().unwrap();
        assert_eq!(a.calculate(&[0.1, 0.2, 0.3]).unwrap(), b.calculate(&[0.1, 0.2, 0.3]).unwrap());
    }

    #[test]
    fn json_round_trip_keeps_names() {
        let spec = NetworkSpec::from_json_str(CLASS_EXAMPLE).unwrap();
        let json = spec.to_json_pretty().unwrap();
        assert!(json.contains("\"logistic\""));
        assert_eq!(NetworkSpec::from_json_str(&json).unwrap(), spec);
    }
}
