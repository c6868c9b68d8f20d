use std::fmt;
use std::str::FromStr;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::loss::loss_type::LossType;
use crate::network::spec::{LayerSpec, NetworkSpec};
use crate::presets::dataset::Dataset;
use crate::train::train_config::TrainConfig;

/// Built-in topologies, named `<first layer>x<last layer>_net`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkPreset {
    /// One logistic neuron, square error, learning rate 5.
    OneByOne,
    /// Two logistic hidden neurons and one logistic output, square error,
    /// learning rate 5.
    TwoByOne,
    /// Two logistic hidden neurons and two logistic outputs, cross-entropy,
    /// learning rate 0.5.
    TwoByTwo,
}

impl NetworkPreset {
    pub fn neurons_per_layer(&self) -> &'static [usize] {
        match self {
            NetworkPreset::OneByOne => &[1],
            NetworkPreset::TwoByOne => &[2, 1],
            NetworkPreset::TwoByTwo => &[2, 2],
        }
    }

    pub fn activation(&self) -> ActivationFunction {
        ActivationFunction::Logistic
    }

    pub fn loss(&self) -> LossType {
        match self {
            NetworkPreset::TwoByTwo => LossType::CrossEntropy,
            _ => LossType::SquareError,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        match self {
            NetworkPreset::TwoByTwo => 0.5,
            _ => 5.0,
        }
    }

    pub fn train_config(&self) -> TrainConfig {
        match self {
            NetworkPreset::TwoByTwo => TrainConfig { epochs: 100, print_every: 100 },
            _ => TrainConfig { epochs: 5000, print_every: 500 },
        }
    }

    /// Topology sized for `dataset`, carrying the dataset's starting weights
    /// when it has them.
    pub fn network_spec(&self, dataset: &Dataset) -> Result<NetworkSpec> {
        let sizes = self.neurons_per_layer();
        let layers: Vec<LayerSpec> = match &dataset.weights {
            None => sizes.iter().map(|&n| LayerSpec::new(n, self.activation())).collect(),
            Some(weights) => {
                NetError::check_len("dataset weight matrices", sizes.len(), weights.len())?;
                sizes.iter().zip(weights)
                    .map(|(&n, w)| LayerSpec::with_weights(n, self.activation(), w.clone()))
                    .collect()
            }
        };

        Ok(NetworkSpec {
            input_size: dataset.input_size(),
            loss: self.loss(),
            learning_rate: self.learning_rate(),
            layers,
            seed: None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            NetworkPreset::OneByOne => "1x1_net",
            NetworkPreset::TwoByOne => "2x1_net",
            NetworkPreset::TwoByTwo => "2x2_net",
        }
    }
}

impl FromStr for NetworkPreset {
    type Err = NetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1x1_net" => Ok(NetworkPreset::OneByOne),
            "2x1_net" => Ok(NetworkPreset::TwoByOne),
            "2x2_net" => Ok(NetworkPreset::TwoByTwo),
            other => Err(NetError::Configuration(format!(
                "network `{other}` not recognized (options: 1x1_net, 2x1_net, 2x2_net)"
            ))),
        }
    }
}

impl fmt::Display for NetworkPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
