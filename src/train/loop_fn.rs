use tracing::{info, trace};

use crate::activation::activation::Activation;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_epoch;

/// Trains `network` for `config.iterations` epochs.
///
/// An `EpochStats` is recorded (and logged at `info`) every
/// `config.log_interval` epochs and for the last epoch; the returned history
/// is in epoch order. Zero iterations yield an empty history.
pub fn train_loop<A: Activation>(
    network: &mut Network<A>,
    train_inputs: &[Vec<f64>],
    train_labels: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    config.validate()?;

    let mut history = Vec::new();

    for epoch in 1..=config.iterations {
        let train_loss = train_epoch(network, train_inputs, train_labels)?;
        trace!(epoch, train_loss, "epoch finished");

        if epoch % config.log_interval == 0 || epoch == config.iterations {
            info!(
                "Epoch {}/{}: loss = {:.6}",
                epoch, config.iterations, train_loss
            );
            history.push(EpochStats {
                epoch,
                total_epochs: config.iterations,
                train_loss,
            });
        }
    }

    Ok(history)
}
