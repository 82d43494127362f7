use std::ops::ControlFlow;

use tracing::{debug, info};

use super::config::TrainerConfig;
use crate::dataset::Sample;
use crate::error::{NetworkError, Result};
use crate::metrics::ErrorHistory;
use crate::network::NeuralNetwork;

/// What the epoch callback sees after each epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpochReport {
    /// Zero-based epoch number, counted across runs
    pub epoch: usize,
    /// Sum of the per-sample losses of this epoch
    pub error: f64,
}

/// Outcome of one call to [`Trainer::run`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingSummary {
    pub epochs_run: usize,
    pub final_error: Option<f64>,
    pub stopped_early: bool,
}

/// Online training loop: every epoch trains once per sample, in order.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainerConfig,
    history: ErrorHistory,
    epoch: usize,
}

impl Trainer {
    pub fn new(config: TrainerConfig) -> Self {
        Trainer {
            config,
            history: ErrorHistory::new(),
            epoch: 0,
        }
    }

    pub fn with_history(mut self, history: ErrorHistory) -> Self {
        self.history = history;
        self
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn history(&self) -> &ErrorHistory {
        &self.history
    }

    /// Epochs completed so far
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Forget the history and epoch count, e.g. after the network is rebuilt.
    pub fn reset(&mut self) {
        self.history.clear();
        self.epoch = 0;
    }

    /// Train one epoch and return the summed sample loss.
    pub fn train_epoch(&mut self, network: &mut NeuralNetwork, samples: &[Sample]) -> Result<f64> {
        self.config.validate()?;
        check_samples(network, samples)?;
        Ok(self.epoch_unchecked(network, samples))
    }

    /// Train up to `max_epochs` epochs, calling `on_epoch` after each one.
    ///
    /// Returning `ControlFlow::Break(())` from the callback stops before the
    /// next epoch starts. The network keeps its weights, so a later call
    /// resumes where this one stopped.
    pub fn run<F>(&mut self, network: &mut NeuralNetwork, samples: &[Sample], mut on_epoch: F) -> Result<TrainingSummary>
    where
        F: FnMut(&EpochReport) -> ControlFlow<()>,
    {
        self.config.validate()?;
        check_samples(network, samples)?;

        let mut summary = TrainingSummary {
            epochs_run: 0,
            final_error: None,
            stopped_early: false,
        };

        for _ in 0..self.config.max_epochs {
            let report = EpochReport {
                epoch: self.epoch,
                error: self.epoch_unchecked(network, samples),
            };
            summary.epochs_run += 1;
            summary.final_error = Some(report.error);

            if self.config.log_interval > 0 && report.epoch % self.config.log_interval == 0 {
                info!(epoch = report.epoch, error = report.error, "training progress");
            }

            if on_epoch(&report).is_break() {
                summary.stopped_early = true;
                debug!(epoch = report.epoch, "training stopped by caller");
                break;
            }
        }

        debug!(
            epochs_run = summary.epochs_run,
            final_error = ?summary.final_error,
            "training run finished"
        );
        Ok(summary)
    }

    /// [`run`](Self::run) without a callback.
    pub fn fit(&mut self, network: &mut NeuralNetwork, samples: &[Sample]) -> Result<TrainingSummary> {
        self.run(network, samples, |_| ControlFlow::Continue(()))
    }

    fn epoch_unchecked(&mut self, network: &mut NeuralNetwork, samples: &[Sample]) -> f64 {
        let error: f64 = samples
            .iter()
            .map(|sample| network.train(sample.inputs.view(), sample.targets.view(), self.config.learning_rate))
            .sum();
        self.history.record(error);
        self.epoch += 1;
        error
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainerConfig::default())
    }
}

fn check_samples(network: &NeuralNetwork, samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(NetworkError::EmptyDataset("no samples to train on".to_string()));
    }
    let inputs = network.input_size().ok_or(NetworkError::Uninitialized)?;
    let outputs = network.output_size().ok_or(NetworkError::Uninitialized)?;

    for (index, sample) in samples.iter().enumerate() {
        if sample.inputs.len() != inputs {
            return Err(NetworkError::dimension_mismatch(
                format!("{inputs} inputs"),
                format!("{} inputs in sample {index}", sample.inputs.len()),
            ));
        }
        if sample.targets.len() != outputs {
            return Err(NetworkError::dimension_mismatch(
                format!("{outputs} targets"),
                format!("{} targets in sample {index}", sample.targets.len()),
            ));
        }
    }
    Ok(())
}
