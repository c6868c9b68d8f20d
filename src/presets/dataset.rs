use std::fmt;
use std::str::FromStr;

use crate::error::NetError;

/// Built-in datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetPreset {
    And,
    Xor,
    /// The two-input, two-hidden, two-output network worked through by hand
    /// in most backpropagation lectures.
    ClassExample,
}

/// Samples of a dataset, plus the starting weights (one matrix per layer)
/// when the dataset comes with them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub inputs: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
    pub weights: Option<Vec<Vec<Vec<f64>>>>,
}

impl Dataset {
    pub fn input_size(&self) -> usize {
        self.inputs.first().map_or(0, Vec::len)
    }
}

const GATE_INPUTS: [[f64; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]];

impl DatasetPreset {
    pub fn dataset(&self) -> Dataset {
        match self {
            DatasetPreset::And => gate(&[0.0, 0.0, 0.0, 1.0]),
            DatasetPreset::Xor => gate(&[0.0, 1.0, 1.0, 0.0]),
            DatasetPreset::ClassExample => Dataset {
                inputs: vec![vec![0.05, 0.10]],
                targets: vec![vec![0.01, 0.99]],
                weights: Some(vec![
                    vec![vec![0.15, 0.20, 0.35], vec![0.25, 0.30, 0.35]],
                    vec![vec![0.40, 0.45, 0.60], vec![0.50, 0.55, 0.60]],
                ]),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DatasetPreset::And => "and",
            DatasetPreset::Xor => "xor",
            DatasetPreset::ClassExample => "class_example",
        }
    }
}

fn gate(outputs: &[f64; 4]) -> Dataset {
    Dataset {
        inputs: GATE_INPUTS.iter().map(|row| row.to_vec()).collect(),
        targets: outputs.iter().map(|&y| vec![y]).collect(),
        weights: None,
    }
}

impl FromStr for DatasetPreset {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(DatasetPreset::And),
            "xor" => Ok(DatasetPreset::Xor),
            "class_example" => Ok(DatasetPreset::ClassExample),
            other => Err(NetError::Configuration(format!(
                "dataset `{other}` not recognized (options: and, xor, class_example)"
            ))),
        }
    }
}

impl fmt::Display for DatasetPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gates_share_inputs() {
        let and = DatasetPreset::And.dataset();
        let xor = DatasetPreset::Xor.dataset();
        assert_eq!(and.inputs, xor.inputs);
        assert_eq!(xor.targets, vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]]);
        assert_eq!(and.input_size(), 2);
    }

    #[test]
    fn unknown_dataset_is_rejected() {
        assert!(matches!("nand".parse::<DatasetPreset>(), Err(NetError::Configuration(_))));
    }
}
