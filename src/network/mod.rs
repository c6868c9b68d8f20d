pub mod network;
pub mod spec;

pub use network::{NeuralNetwork, NetworkState, ForwardPass};
pub use spec::{NetworkSpec, LayerSpec};
