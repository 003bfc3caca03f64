use crate::{
    activation::activation::Activation,
    error::{Error, Result},
    loss::mse::MseLoss,
    network::network::Network,
};

/// One online pass over the dataset: `fit` is called on every sample in order.
///
/// Returns the mean MSE of the outputs each sample saw *before* its own
/// weight update.
pub fn train_epoch<A: Activation>(
    network: &mut Network<A>,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
) -> Result<f64> {
    if inputs.len() != expected_outputs.len() {
        return Err(Error::shape("training labels", inputs.len(), expected_outputs.len()));
    }
    if inputs.is_empty() {
        return Err(Error::Config("training set is empty".into()));
    }

    let mut total_loss = 0.0;

    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        let output = network.fit(input, expected)?;
        total_loss += MseLoss::loss(&output, expected);
    }

    Ok(total_loss / inputs.len() as f64)
}
