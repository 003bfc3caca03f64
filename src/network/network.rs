use std::fmt;

use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

use crate::{
    activation::activation::{Activation, ActivationFunction},
    error::{Error, Result},
    layers::dense::{check_learning_rate, Layer},
    loss::mse::MseLoss,
};

/// An ordered stack of dense layers trained by online backpropagation.
///
/// Layers are appended with [`Network::add_layer`], which wires each new
/// layer's input to the previous layer's output, so consecutive shapes always
/// agree.
#[derive(Debug)]
pub struct Network<A = ActivationFunction> {
    input_size: usize,
    trailing_size: usize,
    layers: Vec<Layer<A>>,
    rng: StdRng,
}

impl<A: Activation> Network<A> {
    /// Empty network whose weights will be drawn from an entropy-seeded RNG.
    pub fn new(input_size: usize) -> Network<A> {
        Network::with_rng(input_size, StdRng::from_entropy())
    }

    /// Empty network with a deterministic weight initialization.
    pub fn with_seed(input_size: usize, seed: u64) -> Network<A> {
        Network::with_rng(input_size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(input_size: usize, rng: StdRng) -> Network<A> {
        Network {
            input_size,
            trailing_size: input_size,
            layers: Vec::new(),
            rng,
        }
    }

    /// Appends a layer of `size` units fed by the current last layer.
    pub fn add_layer(&mut self, size: usize, activation: A, learning_rate: f64) -> Result<&mut Self> {
        if size == 0 {
            return Err(Error::shape("layer size", 1, 0));
        }
        check_learning_rate(learning_rate)?;

        let layer = Layer::new(self.trailing_size, size, activation, learning_rate, &mut self.rng);
        debug!(
            index = self.layers.len(),
            input_size = self.trailing_size,
            output_size = size,
            learning_rate,
            "added layer"
        );
        self.layers.push(layer);
        self.trailing_size = size;
        Ok(self)
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Size of the last layer, or the input size while the network is empty.
    pub fn output_size(&self) -> usize {
        self.trailing_size
    }

    pub fn layers(&self) -> &[Layer<A>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if self.layers.is_empty() {
            return Err(Error::InvalidState("network has no layers"));
        }

        let mut current = input.to_vec();
        for layer in &mut self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// One training step on a single sample.
    ///
    /// Returns the output computed before the weights were updated.
    pub fn fit(&mut self, input: &[f64], expected: &[f64]) -> Result<Vec<f64>> {
        if self.layers.is_empty() {
            return Err(Error::InvalidState("network has no layers"));
        }
        if expected.len() != self.trailing_size {
            return Err(Error::shape("expected output", self.trailing_size, expected.len()));
        }

        let output = self.forward(input)?;
        let mut error = MseLoss::derivative(&output, expected);

        for layer in self.layers.iter_mut().rev() {
            let mut propagated = layer.backward(&error)?;
            // Drop the bias slot; it has no upstream unit.
            propagated.remove(0);
            error = propagated;
        }

        Ok(output)
    }
}

/// `Network: 2 layers (2 -> 4 -> 1)`
impl<A: Activation> fmt::Display for Network<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Network: {} layers ({}", self.layers.len(), self.input_size)?;
        for layer in &self.layers {
            write!(f, " -> {}", layer.output_size())?;
        }
        write!(f, ")")
    }
}
