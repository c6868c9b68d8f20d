pub mod neuron;
pub mod dense;

pub use neuron::{Neuron, NeuronTrace};
pub use dense::{FullyConnectedLayer, LayerTrace};
