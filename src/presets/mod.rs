//! Named networks and datasets for the command-line driver and demos.

pub mod dataset;
pub mod network_preset;

pub use dataset::{Dataset, DatasetPreset};
pub use network_preset::NetworkPreset;
