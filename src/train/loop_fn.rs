use log::info;

use crate::error::Result;
use crate::network::network::NeuralNetwork;
use crate::train::epoch_stats::{EpochStats, TrainReport};
use crate::train::train_config::TrainConfig;

/// Trains `network` for `config.epochs` epochs. Each epoch is one
/// full-batch `train` call followed by a `calculate_loss` over the same
/// batch.
///
/// # Errors
/// Anything `train` or `calculate_loss` rejects; the batch is validated
/// before the first update, so a bad batch fails the first epoch with the
/// weights untouched.
pub fn train_loop(
    network: &mut NeuralNetwork,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<TrainReport> {
    let mut history = Vec::new();
    let mut loss = network.calculate_loss(inputs, targets)?;

    for epoch in 1..=config.epochs {
        network.train(inputs, targets)?;
        loss = network.calculate_loss(inputs, targets)?;

        if config.reports(epoch) {
            info!("epoch {epoch}/{}: loss = {loss:.6}", config.epochs);
            history.push(EpochStats {
                epoch,
                total_epochs: config.epochs,
                loss,
            });
        }
    }

    Ok(TrainReport { history, final_loss: loss })
}
