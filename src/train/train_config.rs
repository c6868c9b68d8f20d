use crate::error::{NetError, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`      — number of full-batch `train` calls
/// - `print_every` — an `EpochStats` entry is recorded (and logged) after the
///                   first epoch, every `print_every` epochs, and the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub print_every: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, print_every: usize) -> Result<Self> {
        if print_every == 0 {
            return Err(NetError::Configuration("print_every must be at least 1".to_string()));
        }
        Ok(TrainConfig { epochs, print_every })
    }

    pub(crate) fn reports(&self, epoch: usize) -> bool {
        epoch == 1 || epoch % self.print_every == 0 || epoch == self.epochs
    }
}
