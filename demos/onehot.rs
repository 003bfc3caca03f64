use xornet::{train_loop, ActivationFunction, Network, TrainConfig, XorDataset};

// 2 -> 5 -> 2 with one-hot targets: slot 0 is "true", slot 1 is "false".
// Only 100 passes, so the classes are usually separated but far from saturated.
fn main() -> xornet::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let data = XorDataset::one_hot(1e-3, 1.0);
    let config = TrainConfig::new(100, 10);

    let mut network = Network::new(2);
    network
        .add_layer(5, ActivationFunction::Sigmoid, 0.6)?
        .add_layer(2, ActivationFunction::Sigmoid, 0.6)?;

    train_loop(&mut network, &data.inputs, &data.labels, &config)?;

    for (input, label) in data.inputs.iter().zip(&data.labels) {
        let result = network.forward(input)?;
        let predicted_true = result[0] > result[1];
        let expected_true = label[0] > label[1];
        println!(
            "input {:?} -> result {:.4?} <-- {}",
            input, result, predicted_true == expected_true
        );
    }

    Ok(())
}
