//! # plainnet - A Small Feedforward Network for Interactive Experiments
//!
//! plainnet is a minimal fully-connected feedforward neural network trained
//! online, one sample at a time, with plain backpropagation. The same network
//! serves 2-class and multi-class classification as well as scalar
//! regression. It is built for clarity: every layer is a flat weight matrix
//! with closed-form activation derivatives, and the whole state can be
//! inspected between steps to draw decision boundaries.
//!
//! ## Key Features
//!
//! - **Network**: configurable hidden layers, Sigmoid/Tanh/Linear activations,
//!   linear output for regression
//! - **Online training**: one gradient step per sample, returning the sample loss
//! - **Reproducibility**: every network owns its random stream and can be seeded
//! - **Safe introspection**: weight and bias accessors return `0.0` out of range
//! - **Epoch trainer**: pausable loop with per-epoch error history
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use plainnet::activations::Activation;
//! use plainnet::config::TaskKind;
//! use plainnet::network::NeuralNetwork;
//!
//! let mut network = NeuralNetwork::with_seed(42);
//! network.setup(2, 1, 4, 1, Activation::Sigmoid, TaskKind::Classification);
//!
//! let loss = network.train(array![0.0, 1.0].view(), array![1.0].view(), 0.5);
//! assert!(loss >= 0.0);
//!
//! let output = network.predict(array![0.0, 1.0].view());
//! assert_eq!(output.len(), 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation functions and their derivatives
//! - [`config`] - Task kinds, architecture presets and the network builder
//! - [`dataset`] - Data points, normalization and target encoding
//! - [`error`] - Error types and result handling
//! - [`layers`] - Dense layer record and weight initialization
//! - [`metrics`] - Per-epoch error history
//! - [`network`] - Core forward/backward engine
//! - [`training`] - Epoch loop over a sample set
//! - [`visualization`] - Decision-boundary geometry and text plots

pub mod activations;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layers;
pub mod metrics;
pub mod network;
pub mod training;
pub mod visualization;

pub use activations::Activation;
pub use config::{NetworkBuilder, NetworkConfig, NetworkMode, TaskKind};
pub use error::{NetworkError, Result};
pub use network::NeuralNetwork;

#[cfg(test)]
mod tests;
