//! End-to-end tests for training networks on XOR

use xornet::{
    train_epoch, train_loop, Activation, ActivationFunction, Network, TrainConfig, XorDataset,
};

const SIGMOID: ActivationFunction = ActivationFunction::Sigmoid;

/// Test that a 2 -> H -> 1 network learns XOR
#[test]
fn test_xor_converges() {
    let data = XorDataset::default();
    let config = TrainConfig::new(20_000, 5_000).with_seed(2024);

    let mut network = Network::with_seed(2, config.seed.unwrap());
    network
        .add_layer(8, SIGMOID, 0.5).unwrap()
        .add_layer(1, SIGMOID, 0.5).unwrap();

    let history = train_loop(&mut network, &data.inputs, &data.labels, &config).unwrap();
    assert_eq!(history.len(), 4);
    assert!(history.last().unwrap().train_loss < history.first().unwrap().train_loss);

    for (input, label) in data.inputs.iter().zip(&data.labels) {
        let output = network.forward(input).unwrap();
        assert!(
            (output[0] - label[0]).abs() < 0.1,
            "input {input:?}: got {}, want {}",
            output[0],
            label[0]
        );
    }
}

/// Test that the two-output variant separates the classes
#[test]
fn test_one_hot_xor_classifies() {
    let data = XorDataset::one_hot(1e-3, 1.0);
    let mut network = Network::with_seed(2, 17);
    network
        .add_layer(5, SIGMOID, 0.6).unwrap()
        .add_layer(2, SIGMOID, 0.6).unwrap();

    train_loop(&mut network, &data.inputs, &data.labels, &TrainConfig::new(10_000, 10_000)).unwrap();

    for (input, label) in data.inputs.iter().zip(&data.labels) {
        let result = network.forward(input).unwrap();
        assert_eq!(result[0] > result[1], label[0] > label[1], "input {input:?}: {result:?}");
    }
}

/// Test that three chained layers of differing sizes compose
#[test]
fn test_three_layer_shapes_compose() {
    let mut network = Network::with_seed(3, 8);
    network
        .add_layer(6, SIGMOID, 0.3).unwrap()
        .add_layer(4, ActivationFunction::Tanh, 0.3).unwrap()
        .add_layer(2, SIGMOID, 0.3).unwrap();

    assert_eq!(network.input_size(), 3);
    assert_eq!(network.output_size(), 2);
    for pair in network.layers().windows(2) {
        assert_eq!(pair[0].output_size(), pair[1].input_size());
    }

    let output = network.forward(&[0.2, -0.4, 0.9]).unwrap();
    assert_eq!(output.len(), 2);

    let inputs = vec![vec![0.2, -0.4, 0.9], vec![-1.0, 0.5, 0.0]];
    let labels = vec![vec![0.9, 0.1], vec![0.1, 0.9]];
    let first = train_epoch(&mut network, &inputs, &labels).unwrap();
    let mut last = first;
    for _ in 0..500 {
        last = train_epoch(&mut network, &inputs, &labels).unwrap();
    }
    assert!(last < first);
}

/// Test that forward alone never changes the network
#[test]
fn test_forward_is_repeatable() {
    let mut network = Network::with_seed(2, 99);
    network
        .add_layer(3, SIGMOID, 0.5).unwrap()
        .add_layer(1, SIGMOID, 0.5).unwrap();

    let first = network.forward(&[0.999, 0.001]).unwrap();
    for _ in 0..10 {
        assert_eq!(network.forward(&[0.999, 0.001]).unwrap(), first);
    }
}

/// x / (1 + |x|), a user-supplied strategy
#[derive(Debug, Clone, Copy)]
struct Softsign;

impl Activation for Softsign {
    fn apply(&self, x: f64) -> f64 {
        x / (1.0 + x.abs())
    }

    fn derivative(&self, preactivation: f64) -> f64 {
        let d = 1.0 + preactivation.abs();
        1.0 / (d * d)
    }
}

/// Test that custom activations plug into the network
#[test]
fn test_custom_activation() {
    let mut network: Network<Softsign> = Network::with_seed(2, 4);
    network
        .add_layer(3, Softsign, 0.1).unwrap()
        .add_layer(1, Softsign, 0.1).unwrap();

    let target = [0.5];
    let before = network.fit(&[1.0, -1.0], &target).unwrap();
    let after = network.forward(&[1.0, -1.0]).unwrap();

    assert!(before[0].abs() < 1.0 && after[0].abs() < 1.0);
    assert_ne!(before, after);
}
