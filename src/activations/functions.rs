use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// An enumeration of the activation functions a network can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Activation {
    #[default]
    Sigmoid,
    Tanh,
    Linear,
}

impl Activation {
    /// Apply the activation function to a single weighted sum.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Linear => x,
        }
    }

    /// Derivative of the activation, expressed in terms of its *output* `y`
    /// rather than the pre-activation sum.
    #[inline]
    pub fn derivative(self, y: f64) -> f64 {
        match self {
            Activation::Sigmoid => y * (1.0 - y),
            Activation::Tanh => 1.0 - y * y,
            Activation::Linear => 1.0,
        }
    }

    /// Apply the activation function to an array in-place.
    pub fn apply_in_place(self, input: &mut Array1<f64>) {
        if self != Activation::Linear {
            input.mapv_inplace(|v| self.apply(v));
        }
    }

    /// Compute the derivative for every output in the array.
    pub fn derivative_of(self, outputs: &Array1<f64>) -> Array1<f64> {
        outputs.mapv(|y| self.derivative(y))
    }

    /// Open interval the activation maps into, `None` when unbounded.
    pub fn output_range(self) -> Option<(f64, f64)> {
        match self {
            Activation::Sigmoid => Some((0.0, 1.0)),
            Activation::Tanh => Some((-1.0, 1.0)),
            Activation::Linear => None,
        }
    }
}
