use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::optim::sgd::Sgd;

/// Value of the implicit input paired with each neuron's bias weight.
pub const BIAS_INPUT: f64 = 1.0;

/// One output unit: `input_size` weights followed by a bias weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    activation: ActivationFunction,
}

/// What a neuron saw and produced for one sample.
///
/// Returned by `Neuron::calculate` and handed back to the backward calls, so
/// the backward pass always works on the same sample the forward pass did.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronTrace {
    inputs: Vec<f64>,
    net: f64,
    output: f64,
    delta: Option<f64>,
}

impl NeuronTrace {
    /// Inputs including the trailing bias input.
    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    /// Pre-activation weighted sum.
    pub fn net(&self) -> f64 {
        self.net
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    /// Local error term; `None` until `calc_partial_derivative` ran.
    pub fn delta(&self) -> Option<f64> {
        self.delta
    }
}

impl Neuron {
    /// `weights` holds one entry per input plus the bias as the last element.
    pub fn new(weights: Vec<f64>, activation: ActivationFunction) -> Result<Neuron> {
        if weights.is_empty() {
            return Err(NetError::Configuration(
                "a neuron needs at least its bias weight".to_string(),
            ));
        }
        Ok(Neuron { weights, activation })
    }

    pub fn input_size(&self) -> usize {
        self.weights.len() - 1
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.weights[self.weights.len() - 1]
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    /// Weighted sum of `inputs` plus bias, passed through the activation.
    pub fn calculate(&self, inputs: &[f64]) -> Result<NeuronTrace> {
        NetError::check_len("neuron input", self.input_size(), inputs.len())?;

        let mut inputs = inputs.to_vec();
        inputs.push(BIAS_INPUT);

        let net: f64 = inputs.iter().zip(self.weights.iter())
            .map(|(x, w)| x * w)
            .sum();
        let output = self.activation.function(net);

        Ok(NeuronTrace { inputs, net, output, delta: None })
    }

    /// Records `delta = error_signal · f'(output)` in `trace` and returns the
    /// contribution `delta · w[i]` for every real input (bias excluded),
    /// computed with the current, not yet updated, weights.
    pub fn calc_partial_derivative(&self, trace: &mut NeuronTrace, error_signal: f64) -> Result<Vec<f64>> {
        NetError::check_len("neuron trace", self.weights.len(), trace.inputs.len())?;

        let delta = error_signal * self.activation.derivative(trace.output);
        trace.delta = Some(delta);

        Ok(self.weights[..self.input_size()].iter()
            .map(|w| delta * w)
            .collect())
    }

    /// Gradient step on every weight, bias included, using the delta stored
    /// in `trace`.
    pub fn update_weights(&mut self, trace: &NeuronTrace, optimizer: &Sgd) -> Result<()> {
        let delta = trace.delta.ok_or_else(|| NetError::Sequencing(
            "update_weights called before calc_partial_derivative".to_string(),
        ))?;
        NetError::check_len("neuron trace", self.weights.len(), trace.inputs.len())?;

        optimizer.step(&mut self.weights, delta, &trace.inputs);
        Ok(())
    }
}
