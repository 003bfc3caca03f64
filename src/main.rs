// Trains a 2 -> 4 -> 1 sigmoid network on XOR and prints its predictions.
// Logs go to stderr so stdout only carries the results.
use xornet::{train_loop, ActivationFunction, Network, TrainConfig, XorDataset};

const HIDDEN: usize = 4;
const LEARNING_RATE: f64 = 0.5;

fn main() -> xornet::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let data = XorDataset::default();
    let config = TrainConfig::default();

    let mut network = Network::new(2);
    network
        .add_layer(HIDDEN, ActivationFunction::Sigmoid, LEARNING_RATE)?
        .add_layer(1, ActivationFunction::Sigmoid, LEARNING_RATE)?;
    tracing::info!("{network}");

    train_loop(&mut network, &data.inputs, &data.labels, &config)?;

    for input in &data.inputs {
        let output = network.forward(input)?;
        println!("{}", prediction_line(input, output[0]));
    }

    Ok(())
}

fn prediction_line(input: &[f64], output: f64) -> String {
    format!("input {:?} -> output {:.4}", input, output)
}
