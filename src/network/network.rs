use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::layers::dense::{FullyConnectedLayer, LayerTrace};
use crate::loss::loss_type::LossType;
use crate::math::matrix::Matrix;
use crate::optim::sgd::Sgd;

/// Lifecycle of a network. Layers may only be added before the first
/// weight update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkState {
    /// No layer yet.
    Unconfigured,
    /// At least one layer, weights never updated.
    Built,
    /// Weights have been updated; counts completed `train` calls.
    Trained(usize),
}

/// Layer traces of one forward pass, input layer first.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    layers: Vec<LayerTrace>,
}

impl ForwardPass {
    /// Outputs of the last layer.
    pub fn output(&self) -> Vec<f64> {
        self.layers.last().map(LayerTrace::outputs).unwrap_or_default()
    }

    pub fn layers(&self) -> &[LayerTrace] {
        &self.layers
    }
}

#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    input_size: usize,
    loss: LossType,
    optimizer: Sgd,
    layers: Vec<FullyConnectedLayer>,
    train_calls: usize,
    updated: bool,
    rng: StdRng,
}

impl NeuralNetwork {
    /// Empty network taking `input_size` inputs; random weights come from
    /// an entropy-seeded generator.
    pub fn new(input_size: usize, loss: LossType, learning_rate: f64) -> Result<NeuralNetwork> {
        NeuralNetwork::with_rng(input_size, loss, learning_rate, StdRng::from_entropy())
    }

    /// Like `new`, but random initialisation is reproducible from `seed`.
    pub fn with_seed(input_size: usize, loss: LossType, learning_rate: f64, seed: u64) -> Result<NeuralNetwork> {
        NeuralNetwork::with_rng(input_size, loss, learning_rate, StdRng::seed_from_u64(seed))
    }

    fn with_rng(input_size: usize, loss: LossType, learning_rate: f64, rng: StdRng) -> Result<NeuralNetwork> {
        if input_size == 0 {
            return Err(NetError::Configuration("input size must be at least 1".to_string()));
        }
        let optimizer = Sgd::new(learning_rate)?;
        Ok(NeuralNetwork {
            input_size,
            loss,
            optimizer,
            layers: Vec::new(),
            train_calls: 0,
            updated: false,
            rng,
        })
    }

    /// Appends a fully-connected layer fed by the previous layer (or by the
    /// network input for the first one).
    ///
    /// Without `weights` every weight is drawn from U[-1, 1). With `weights`
    /// the matrix must be `num_neurons × (input_size + 1)`, bias last, and is
    /// copied as is.
    pub fn add_layer(
        &mut self,
        num_neurons: usize,
        activation: ActivationFunction,
        weights: Option<Matrix>,
    ) -> Result<()> {
        if self.updated {
            return Err(NetError::Sequencing(
                "cannot add a layer once training has started".to_string(),
            ));
        }

        let input_size = self.output_size();
        let layer = match weights {
            Some(weights) => FullyConnectedLayer::with_weights(num_neurons, input_size, activation, &weights, self.optimizer)?,
            None => FullyConnectedLayer::new(num_neurons, input_size, activation, self.optimizer, &mut self.rng)?,
        };

        debug!(
            "added layer {}: {} -> {} ({})",
            self.layers.len(), input_size, num_neurons, activation
        );
        self.layers.push(layer);
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Width of the last layer, or the input size while there is none.
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(self.input_size, FullyConnectedLayer::size)
    }

    pub fn loss(&self) -> LossType {
        self.loss
    }

    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate
    }

    pub fn layers(&self) -> &[FullyConnectedLayer] {
        &self.layers
    }

    pub fn state(&self) -> NetworkState {
        if self.updated {
            NetworkState::Trained(self.train_calls)
        } else if self.layers.is_empty() {
            NetworkState::Unconfigured
        } else {
            NetworkState::Built
        }
    }

    /// Forward pass keeping every layer's trace for a later `backward`.
    pub fn forward(&self, inputs: &[f64]) -> Result<ForwardPass> {
        self.require_layers("forward pass")?;
        NetError::check_len("network input", self.input_size, inputs.len())?;

        let mut traces = Vec::with_capacity(self.layers.len());
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            let trace = layer.calculate(&current)?;
            current = trace.outputs();
            traces.push(trace);
        }
        Ok(ForwardPass { layers: traces })
    }

    /// Forward pass; returns the last layer's outputs.
    pub fn calculate(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward(inputs)?.output())
    }

    /// Mean per-sample loss over the batch. An empty batch has loss 0.
    pub fn calculate_loss(&self, inputs_batch: &[Vec<f64>], targets_batch: &[Vec<f64>]) -> Result<f64> {
        self.require_layers("calculate_loss")?;
        self.check_batch(inputs_batch, targets_batch)?;
        if inputs_batch.is_empty() {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for (input, target) in inputs_batch.iter().zip(targets_batch.iter()) {
            let output = self.calculate(input)?;
            total += self.loss.loss(&output, target);
        }
        let mean = total / inputs_batch.len() as f64;

        if !mean.is_finite() {
            warn!("{} loss is not finite ({mean})", self.loss);
        }
        Ok(mean)
    }

    /// Derivative of the configured loss w.r.t. each network output; the
    /// seed row of the backward pass.
    pub fn loss_derivative(&self, outputs: &[f64], targets: &[f64]) -> Result<Vec<f64>> {
        self.require_layers("loss_derivative")?;
        NetError::check_len("outputs", self.output_size(), outputs.len())?;
        NetError::check_len("targets", self.output_size(), targets.len())?;
        Ok(self.loss.derivative(outputs, targets))
    }

    /// Backpropagates `seed` (one value per output) from the last layer to
    /// the first, updating each layer as it is visited. Returns the wdeltas
    /// for the network input.
    ///
    /// The pass is consumed, and a pass recorded before any later weight
    /// update (a clone of a used pass, or one taken before a `train` call)
    /// is rejected with `Sequencing` before anything changes.
    pub fn backward(&mut self, pass: ForwardPass, seed: Vec<f64>) -> Result<Vec<f64>> {
        self.require_layers("backward pass")?;
        NetError::check_len("forward pass layers", self.layers.len(), pass.layers.len())?;
        NetError::check_len("loss derivative", self.output_size(), seed.len())?;
        for (layer, trace) in self.layers.iter().zip(pass.layers.iter()) {
            layer.check_trace(trace)?;
        }

        let mut wdeltas = seed;
        for (layer, trace) in self.layers.iter_mut().zip(pass.layers).rev() {
            wdeltas = layer.calculate_wdeltas(trace, &[wdeltas])?;
            self.updated = true;
        }
        Ok(wdeltas)
    }

    /// One full-batch step: every sample, in order, gets its own forward
    /// pass, backward pass and weight update. Gradients are not averaged.
    pub fn train(&mut self, inputs_batch: &[Vec<f64>], targets_batch: &[Vec<f64>]) -> Result<()> {
        self.require_layers("train")?;
        self.check_batch(inputs_batch, targets_batch)?;
        if inputs_batch.is_empty() {
            return Ok(());
        }

        for (i, (input, target)) in inputs_batch.iter().zip(targets_batch.iter()).enumerate() {
            let pass = self.forward(input)?;
            let seed = self.loss_derivative(&pass.output(), target)?;
            let input_wdeltas = self.backward(pass, seed)?;
            debug!("sample {i}: input wdeltas {input_wdeltas:?}");
        }

        self.train_calls += 1;
        Ok(())
    }

    fn require_layers(&self, op: &str) -> Result<()> {
        if self.layers.is_empty() {
            return Err(NetError::Sequencing(format!("{op} needs at least one layer")));
        }
        Ok(())
    }

    /// Shape check of a whole batch, done before any sample is processed.
    fn check_batch(&self, inputs_batch: &[Vec<f64>], targets_batch: &[Vec<f64>]) -> Result<()> {
        NetError::check_len("targets batch", inputs_batch.len(), targets_batch.len())?;
        for (input, target) in inputs_batch.iter().zip(targets_batch.iter()) {
            NetError::check_len("network input", self.input_size, input.len())?;
            NetError::check_len("targets", self.output_size(), target.len())?;
        }
        Ok(())
    }
}
