//! A small feed-forward neural network with hand-derived backpropagation.
//!
//! Networks are stacks of fully-connected layers of identity or logistic
//! neurons, trained by per-sample gradient descent against a square-error or
//! cross-entropy loss.
//!
//! ```
//! use backprop_nn::{ActivationFunction, LossType, NeuralNetwork};
//!
//! let mut net = NeuralNetwork::with_seed(2, LossType::SquareError, 5.0, 1)?;
//! net.add_layer(2, ActivationFunction::Logistic, None)?;
//! net.add_layer(1, ActivationFunction::Logistic, None)?;
//!
//! let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
//! let targets = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
//! net.train(&inputs, &targets)?;
//! assert_eq!(net.calculate(&[1.0, 0.0])?.len(), 1);
//! # Ok::<(), backprop_nn::NetError>(())
//! ```

pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod presets;

// Convenience re-exports
pub use error::{NetError, Result};
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use layers::neuron::{Neuron, NeuronTrace};
pub use layers::dense::{FullyConnectedLayer, LayerTrace};
pub use network::network::{NeuralNetwork, NetworkState, ForwardPass};
pub use network::spec::{NetworkSpec, LayerSpec};
pub use loss::loss_type::LossType;
pub use optim::sgd::Sgd;
pub use train::{train_loop, TrainConfig, TrainReport, EpochStats};
