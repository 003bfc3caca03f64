use rand::Rng;

use crate::{
    activation::activation::{Activation, ActivationFunction},
    error::{Error, Result},
    math::matrix::Matrix,
};

const BIAS: f64 = 1.0;

/// Learning rates must be finite and positive; anything else is not descent.
pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(Error::Config(format!(
            "learning rate must be finite and positive, got {learning_rate}"
        )));
    }
    Ok(())
}

/// A fully connected layer.
///
/// Weights have shape `(output_size, input_size + 1)`; column 0 holds the bias
/// weight of each unit, matched by a constant `1.0` prepended to every input.
///
/// `forward` caches the augmented input, the pre-activation sums and the
/// outputs. That cache is only meaningful until the next `forward`, and
/// `backward` consumes it: a second `backward` without a new `forward` fails.
#[derive(Debug, Clone)]
pub struct Layer<A = ActivationFunction> {
    input_size: usize,
    output_size: usize,
    learning_rate: f64,
    weights: Matrix,
    activator: A,
    inputs: Vec<f64>,      // input with the bias prepended
    pre_neurons: Vec<f64>, // pre-activation values, needed for the derivative
    neurons: Vec<f64>,
    pending: bool,
}

impl<A: Activation> Layer<A> {
    /// Creates a layer with weights drawn uniformly from [-1, 1).
    pub fn new<R: Rng>(
        input_size: usize,
        output_size: usize,
        activation: A,
        learning_rate: f64,
        rng: &mut R,
    ) -> Layer<A> {
        let weights = Matrix::random(output_size, input_size + 1, rng);
        Layer::with_weights(weights, activation, learning_rate)
    }

    /// Creates a layer from an explicit `(output_size, input_size + 1)` weight matrix.
    pub fn from_weights(weights: Matrix, activation: A, learning_rate: f64) -> Result<Layer<A>> {
        if weights.cols == 0 {
            return Err(Error::shape("layer weight columns (bias included)", 1, 0));
        }
        weights.check_shape()?;
        check_learning_rate(learning_rate)?;
        Ok(Layer::with_weights(weights, activation, learning_rate))
    }

    fn with_weights(weights: Matrix, activation: A, learning_rate: f64) -> Layer<A> {
        Layer {
            input_size: weights.cols - 1,
            output_size: weights.rows,
            learning_rate,
            weights,
            activator: activation,
            inputs: Vec::new(),
            pre_neurons: Vec::new(),
            neurons: Vec::new(),
            pending: false,
        }
    }

    pub fn input_size(&self) -> usize {
        self.input_size
    }

    pub fn output_size(&self) -> usize {
        self.output_size
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn activation(&self) -> &A {
        &self.activator
    }

    /// Outputs of the most recent `forward`, empty before the first one.
    pub fn outputs(&self) -> &[f64] {
        &self.neurons
    }

    pub fn forward(&mut self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size {
            return Err(Error::shape("layer input", self.input_size, input.len()));
        }

        let mut augmented = Vec::with_capacity(input.len() + 1);
        augmented.push(BIAS);
        augmented.extend_from_slice(input);

        let z = self.weights.mul_vec(&augmented)?;
        let a: Vec<f64> = z.iter().map(|&x| self.activator.apply(x)).collect();

        self.inputs = augmented;
        self.pre_neurons = z;
        self.neurons = a.clone();
        self.pending = true;
        Ok(a)
    }

    /// Backpropagates `upstream_error` (∂E/∂output) and applies one gradient
    /// descent step to the weights.
    ///
    /// Returns the error for the previous layer, `input_size + 1` long with
    /// the bias slot first. It is computed from the weights as they were
    /// before this update.
    pub fn backward(&mut self, upstream_error: &[f64]) -> Result<Vec<f64>> {
        if !self.pending {
            return Err(Error::InvalidState("backward called without a pending forward"));
        }
        if upstream_error.len() != self.output_size {
            return Err(Error::shape("layer upstream error", self.output_size, upstream_error.len()));
        }

        // δ = error ⊙ f'(z)
        let delta: Vec<f64> = upstream_error.iter()
            .zip(&self.pre_neurons)
            .map(|(e, &z)| e * self.activator.derivative(z))
            .collect();

        let propagated = self.weights.transpose_mul_vec(&delta)?;
        self.weights.sub_scaled_outer(self.learning_rate, &delta, &self.inputs)?;

        self.pending = false;
        Ok(propagated)
    }
}
