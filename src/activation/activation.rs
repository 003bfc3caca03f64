use serde::{Serialize, Deserialize};

/// A scalar nonlinearity and its derivative, applied element-wise by a layer.
///
/// `derivative` receives the *pre-activation* value `u`, the same value that
/// was passed to `apply`. Implementations whose derivative is naturally
/// written in terms of the output (such as the logistic function) must
/// recompute `apply(u)` internally rather than expect the output.
pub trait Activation {
    fn apply(&self, x: f64) -> f64;

    fn derivative(&self, preactivation: f64) -> f64;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivationFunction {
    #[default]
    Sigmoid,
    Tanh,
    ReLU,
    LeakyReLU { alpha: f64 },
    Identity,
}

impl Activation for ActivationFunction {
    fn apply(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { x } else { alpha * x },
            ActivationFunction::Identity => x,
        }
    }

    fn derivative(&self, preactivation: f64) -> f64 {
        let x = preactivation;
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.apply(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::LeakyReLU { alpha } => if x > 0.0 { 1.0 } else { *alpha },
            ActivationFunction::Identity => 1.0,
        }
    }
}
