//! Network configuration: task kinds, architecture presets and a builder.

use serde::{Deserialize, Serialize};

use crate::activations::Activation;
use crate::error::{NetworkError, Result};
use crate::layers::WeightInit;
use crate::network::NeuralNetwork;

/// What the output layer is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskKind {
    /// Output neurons use the configured activation.
    #[default]
    Classification,
    /// Output neurons are linear regardless of the configured activation.
    Regression,
}

/// The four interactive modes: one or several layers, classifying or regressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkMode {
    SingleLayerClassification,
    SingleLayerRegression,
    MultiLayerClassification,
    MultiLayerRegression,
}

impl NetworkMode {
    pub fn is_multi_layer(self) -> bool {
        matches!(
            self,
            NetworkMode::MultiLayerClassification | NetworkMode::MultiLayerRegression
        )
    }

    pub fn task(self) -> TaskKind {
        match self {
            NetworkMode::SingleLayerRegression | NetworkMode::MultiLayerRegression => TaskKind::Regression,
            _ => TaskKind::Classification,
        }
    }
}

/// Architecture of a network, everything `setup` needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_layers: usize,
    pub neurons_per_layer: usize,
    pub output_size: usize,
    #[serde(default)]
    pub activation: Activation,
    #[serde(default)]
    pub task: TaskKind,
}

impl NetworkConfig {
    pub fn new(input_size: usize, output_size: usize) -> Self {
        NetworkConfig {
            input_size,
            hidden_layers: 0,
            neurons_per_layer: 1,
            output_size,
            activation: Activation::default(),
            task: TaskKind::default(),
        }
    }

    /// Derive the architecture for one of the interactive modes.
    ///
    /// Points are `(x, y)` pairs, so classification reads two inputs and emits
    /// one score per class. Regression maps `x` to `y` through a Tanh network.
    /// Single-layer modes ignore `hidden_layers`.
    pub fn for_mode(
        mode: NetworkMode,
        hidden_layers: usize,
        neurons_per_layer: usize,
        classes: usize,
        activation: Activation,
    ) -> Self {
        let hidden_layers = if mode.is_multi_layer() { hidden_layers } else { 0 };
        match mode.task() {
            TaskKind::Regression => NetworkConfig {
                input_size: 1,
                hidden_layers,
                neurons_per_layer,
                output_size: 1,
                activation: Activation::Tanh,
                task: TaskKind::Regression,
            },
            TaskKind::Classification => NetworkConfig {
                input_size: 2,
                hidden_layers,
                neurons_per_layer,
                output_size: classes.max(1),
                activation,
                task: TaskKind::Classification,
            },
        }
    }

    /// Number of layers `setup` will build.
    pub fn layer_count(&self) -> usize {
        self.hidden_layers + 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 {
            return Err(NetworkError::invalid_parameter("input_size", "must be at least 1"));
        }
        if self.hidden_layers > 0 && self.neurons_per_layer == 0 {
            return Err(NetworkError::invalid_parameter(
                "neurons_per_layer",
                "must be at least 1 when hidden layers are present",
            ));
        }
        if self.output_size == 0 {
            return Err(NetworkError::invalid_parameter("output_size", "must be at least 1"));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for constructing networks with a fluent API
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    config: NetworkConfig,
    seed: Option<u64>,
    init: WeightInit,
}

impl NetworkBuilder {
    /// Start from a network of `input_size` inputs and `output_size` outputs
    pub fn new(input_size: usize, output_size: usize) -> Self {
        NetworkBuilder {
            config: NetworkConfig::new(input_size, output_size),
            seed: None,
            init: WeightInit::default(),
        }
    }

    /// Add `count` hidden layers of `neurons` neurons each
    pub fn hidden_layers(mut self, count: usize, neurons: usize) -> Self {
        self.config.hidden_layers = count;
        self.config.neurons_per_layer = neurons;
        self
    }

    pub fn activation(mut self, activation: Activation) -> Self {
        self.config.activation = activation;
        self
    }

    pub fn task(mut self, task: TaskKind) -> Self {
        self.config.task = task;
        self
    }

    /// Seed the network's random stream for reproducible weights
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn weight_init(mut self, init: WeightInit) -> Self {
        self.init = init;
        self
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Build the configured network
    pub fn build(self) -> Result<NeuralNetwork> {
        let mut network = match self.seed {
            Some(seed) => NeuralNetwork::with_seed(seed),
            None => NeuralNetwork::new(),
        }
        .with_weight_init(self.init);
        network.try_setup(&self.config)?;
        Ok(network)
    }
}
