//! Epoch-level training on top of the per-sample [`NeuralNetwork::train`](crate::network::NeuralNetwork::train).

pub mod config;
pub mod trainer;

pub use config::TrainerConfig;
pub use trainer::{EpochReport, Trainer, TrainingSummary};
