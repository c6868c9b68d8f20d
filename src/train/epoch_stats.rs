use serde::{Serialize, Deserialize};

/// Loss after one completed epoch of `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean loss over the training batch, measured after the epoch's updates.
    pub loss: f64,
}

/// Outcome of a `train_loop` run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainReport {
    /// Recorded epochs, in order.
    pub history: Vec<EpochStats>,
    /// Loss after the last epoch (the initial loss if no epoch ran).
    pub final_loss: f64,
}
