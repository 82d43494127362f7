//! # Activation Functions Module
//!
//! The three activation families a [`NeuralNetwork`](crate::network::NeuralNetwork)
//! can be configured with. Every derivative is evaluated at the neuron's
//! *output*, which is what backpropagation has at hand after a forward pass.
//!
//! - **Sigmoid**: `1 / (1 + e^(-x))`, derivative `y * (1 - y)`, outputs in `(0, 1)`
//! - **Tanh**: hyperbolic tangent, derivative `1 - y²`, outputs in `(-1, 1)`
//! - **Linear**: identity, derivative `1`, unbounded
//!
//! ## Usage Example
//!
//! ```rust
//! use plainnet::activations::Activation;
//!
//! let y = Activation::Sigmoid.apply(0.0);
//! assert_eq!(y, 0.5);
//! assert_eq!(Activation::Sigmoid.derivative(y), 0.25);
//! ```

pub mod functions;

pub use functions::Activation;
