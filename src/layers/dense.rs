use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::layers::neuron::{Neuron, NeuronTrace};
use crate::math::matrix::Matrix;
use crate::optim::sgd::Sgd;

#[derive(Debug, Clone)]
pub struct FullyConnectedLayer {
    neurons: Vec<Neuron>,
    input_size: usize,
    activation: ActivationFunction,
    optimizer: Sgd,
    /// Bumped on every weight update; traces from an older generation are stale.
    generation: u64,
}

/// Per-neuron traces of one layer for one sample, in neuron order, stamped
/// with the weight generation they were computed under.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTrace {
    neurons: Vec<NeuronTrace>,
    generation: u64,
}

impl LayerTrace {
    pub fn outputs(&self) -> Vec<f64> {
        self.neurons.iter().map(NeuronTrace::output).collect()
    }

    pub fn neurons(&self) -> &[NeuronTrace] {
        &self.neurons
    }
}

impl FullyConnectedLayer {
    /// Layer of `size` neurons with weights drawn from U[-1, 1).
    pub fn new<R: Rng>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        optimizer: Sgd,
        rng: &mut R,
    ) -> Result<FullyConnectedLayer> {
        let weights = Matrix::random(size, input_size + 1, rng);
        FullyConnectedLayer::with_weights(size, input_size, activation, &weights, optimizer)
    }

    /// Layer whose weights are copied verbatim from `weights`, which must be
    /// `size × (input_size + 1)` with the bias in the last column.
    pub fn with_weights(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        weights: &Matrix,
        optimizer: Sgd,
    ) -> Result<FullyConnectedLayer> {
        if size == 0 {
            return Err(NetError::Configuration("a layer needs at least one neuron".to_string()));
        }
        NetError::check_len("weight matrix rows", size, weights.rows)?;
        NetError::check_len("weight matrix columns", input_size + 1, weights.cols)?;
        // `rows`/`cols` are public, so the data itself has to agree with them.
        NetError::check_len("weight matrix rows", size, weights.data.len())?;
        for row in &weights.data {
            NetError::check_len("weight matrix columns", input_size + 1, row.len())?;
        }

        let neurons = weights.data.iter()
            .map(|row| Neuron::new(row.clone(), activation))
            .collect::<Result<Vec<_>>>()?;

        Ok(FullyConnectedLayer { neurons, input_size, activation, optimizer, generation: 0 })
    }

    /// Number of neurons, i.e. the width of this layer's output.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn activation(&self) -> ActivationFunction {
        self.activation
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Current weights as a `size × (input_size + 1)` matrix.
    pub fn weights(&self) -> Matrix {
        Matrix {
            rows: self.size(),
            cols: self.input_size + 1,
            data: self.neurons.iter().map(|n| n.weights().to_vec()).collect(),
        }
    }

    /// Feeds the same `inputs` to every neuron.
    pub fn calculate(&self, inputs: &[f64]) -> Result<LayerTrace> {
        NetError::check_len("layer input", self.input_size, inputs.len())?;
        let neurons = self.neurons.iter()
            .map(|neuron| neuron.calculate(inputs))
            .collect::<Result<Vec<_>>>()?;
        Ok(LayerTrace { neurons, generation: self.generation })
    }

    /// Fails with `Sequencing` if `trace` was computed before this layer's
    /// last weight update, and with `Dimension` if it belongs to a layer of
    /// another shape.
    pub fn check_trace(&self, trace: &LayerTrace) -> Result<()> {
        if trace.generation != self.generation {
            return Err(NetError::Sequencing(
                "trace predates the last weight update; run a new forward pass".to_string(),
            ));
        }
        NetError::check_len("layer trace", self.size(), trace.neurons.len())?;
        for t in &trace.neurons {
            NetError::check_len("neuron trace", self.input_size + 1, t.inputs().len())?;
        }
        Ok(())
    }

    /// One backward step through this layer.
    ///
    /// `wdeltas_next` holds rows of downstream contributions, each with one
    /// entry per neuron of this layer; for the output layer it is the single
    /// row of loss derivatives. Neuron `j` receives the column sum of entry
    /// `j`, computes its delta, and has its weights updated right away. The
    /// returned vector (length `input_size`) sums every neuron's per-input
    /// contributions and is the previous layer's `wdeltas_next`.
    ///
    /// The trace is consumed: once the weights move, it no longer describes
    /// this layer.
    pub fn calculate_wdeltas(&mut self, mut trace: LayerTrace, wdeltas_next: &[Vec<f64>]) -> Result<Vec<f64>> {
        self.check_trace(&trace)?;
        for row in wdeltas_next {
            NetError::check_len("wdeltas row", self.size(), row.len())?;
        }

        let mut wdeltas = vec![0.0; self.input_size];
        self.generation += 1;

        for (j, (neuron, neuron_trace)) in self.neurons.iter_mut().zip(trace.neurons.iter_mut()).enumerate() {
            let fwdelta: f64 = wdeltas_next.iter().map(|row| row[j]).sum();
            let contributions = neuron.calc_partial_derivative(neuron_trace, fwdelta)?;
            neuron.update_weights(neuron_trace, &self.optimizer)?;

            for (acc, c) in wdeltas.iter_mut().zip(contributions) {
                *acc += c;
            }
        }

        Ok(wdeltas)
    }
}
