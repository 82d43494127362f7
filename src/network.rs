use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ndarray::{Array1, ArrayView1};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::activations::Activation;
use crate::config::{NetworkConfig, TaskKind};
use crate::error::{NetworkError, Result};
use crate::layers::{Layer, WeightInit};

/// A fully connected feedforward network trained one sample at a time.
///
/// The network starts with no layers. [`setup`](Self::setup) builds the
/// hidden layers followed by exactly one output layer; [`predict`](Self::predict)
/// runs a forward pass and [`train`](Self::train) performs one gradient step.
/// All calls must be serialized by the owner; every layer's `outputs` and
/// `deltas` are scratch state mutated in place.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    layers: Vec<Layer>,
    activation: Activation,
    task: TaskKind,
    init: WeightInit,
    rng: StdRng,
    seed: u64,
}

impl NeuralNetwork {
    /// Create an empty network whose random stream is seeded from the clock.
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(clock_seed)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    /// Create an empty network with a reproducible random stream.
    pub fn with_seed(seed: u64) -> Self {
        NeuralNetwork {
            layers: Vec::new(),
            activation: Activation::default(),
            task: TaskKind::default(),
            init: WeightInit::default(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Use `init` for every later `setup` and `reset`.
    pub fn with_weight_init(mut self, init: WeightInit) -> Self {
        self.init = init;
        self
    }

    /// Replace the whole architecture with freshly initialized layers.
    ///
    /// Builds `hidden_layers` layers of `neurons_per_layer` neurons and one
    /// output layer of `output_size` neurons. `neurons_per_layer` is ignored
    /// when `hidden_layers` is zero. Sizes must be positive; this is only
    /// checked in debug builds, use [`try_setup`](Self::try_setup) for a
    /// validated variant.
    pub fn setup(
        &mut self,
        input_size: usize,
        hidden_layers: usize,
        neurons_per_layer: usize,
        output_size: usize,
        activation: Activation,
        task: TaskKind,
    ) {
        debug_assert!(input_size > 0, "input size must be positive");
        debug_assert!(hidden_layers == 0 || neurons_per_layer > 0, "hidden layers need neurons");
        debug_assert!(output_size > 0, "output size must be positive");

        self.layers.clear();
        self.activation = activation;
        self.task = task;

        let mut previous = input_size;
        for _ in 0..hidden_layers {
            self.layers.push(Layer::new(
                previous,
                neurons_per_layer,
                activation,
                false,
                self.init,
                &mut self.rng,
            ));
            previous = neurons_per_layer;
        }
        self.layers.push(Layer::new(
            previous,
            output_size,
            activation,
            task == TaskKind::Regression,
            self.init,
            &mut self.rng,
        ));

        debug!(
            input_size,
            hidden_layers,
            neurons_per_layer,
            output_size,
            ?activation,
            ?task,
            seed = self.seed,
            "network set up"
        );
    }

    /// Validate `config` and apply it with [`setup`](Self::setup).
    pub fn try_setup(&mut self, config: &NetworkConfig) -> Result<()> {
        config.validate()?;
        self.setup(
            config.input_size,
            config.hidden_layers,
            config.neurons_per_layer,
            config.output_size,
            config.activation,
            config.task,
        );
        Ok(())
    }

    /// Redraw every weight and bias, keeping the architecture.
    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            layer.reinitialize(self.init, &mut self.rng);
        }
        debug!(layers = self.layers.len(), "network weights reset");
    }

    /// Run a forward pass and return a copy of the output layer's activations.
    ///
    /// `inputs` should be as long as the first layer's input width. Missing
    /// inputs are left out of the weighted sums and extras are ignored; debug
    /// builds assert on the mismatch instead. An empty network returns its
    /// inputs unchanged.
    pub fn predict(&mut self, inputs: ArrayView1<'_, f64>) -> Array1<f64> {
        self.forward(inputs);
        match self.layers.last() {
            Some(output) => output.outputs().to_owned(),
            None => inputs.to_owned(),
        }
    }

    /// Checked variant of [`predict`](Self::predict).
    pub fn try_predict(&mut self, inputs: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        self.check_inputs(inputs.len())?;
        Ok(self.predict(inputs))
    }

    /// One online learning step on a single input/target pair.
    ///
    /// Returns the sample loss `Σ 0.5 * (target - output)²` summed over the
    /// output neurons, measured before the weights move. `targets` should be
    /// as long as the output layer; output neurons without a target receive no
    /// error signal.
    pub fn train(&mut self, inputs: ArrayView1<'_, f64>, targets: ArrayView1<'_, f64>, learning_rate: f64) -> f64 {
        if self.layers.is_empty() {
            return 0.0;
        }

        self.forward(inputs);
        let total_error = self.backward(targets);
        self.update(inputs, learning_rate);

        trace!(loss = total_error, learning_rate, "training step");
        total_error
    }

    /// Checked variant of [`train`](Self::train).
    pub fn try_train(
        &mut self,
        inputs: ArrayView1<'_, f64>,
        targets: ArrayView1<'_, f64>,
        learning_rate: f64,
    ) -> Result<f64> {
        self.check_inputs(inputs.len())?;
        self.check_targets(targets.len())?;
        check_learning_rate(learning_rate)?;
        Ok(self.train(inputs, targets, learning_rate))
    }

    /// Weight of `input` into `neuron` of `layer`, or `0.0` for any index
    /// outside the network, negative ones included.
    pub fn weight(&self, layer: isize, neuron: isize, input: isize) -> f64 {
        self.layer_at(layer)
            .zip(to_index(neuron))
            .zip(to_index(input))
            .and_then(|((layer, neuron), input)| layer.weight(neuron, input))
            .unwrap_or(0.0)
    }

    /// Bias of `neuron` in `layer`, or `0.0` for any index outside the network.
    pub fn bias(&self, layer: isize, neuron: isize) -> f64 {
        self.layer_at(layer)
            .zip(to_index(neuron))
            .and_then(|(layer, neuron)| layer.bias(neuron))
            .unwrap_or(0.0)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Neuron count of layer `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= layer_count()`.
    pub fn layer_size(&self, index: usize) -> usize {
        self.layers[index].neuron_count()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn task(&self) -> TaskKind {
        self.task
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Width of the external input, `None` before `setup`.
    pub fn input_size(&self) -> Option<usize> {
        self.layers.first().map(Layer::input_width)
    }

    /// Number of output neurons, `None` before `setup`.
    pub fn output_size(&self) -> Option<usize> {
        self.layers.last().map(Layer::neuron_count)
    }

    fn forward(&mut self, inputs: ArrayView1<'_, f64>) {
        for index in 0..self.layers.len() {
            let (previous, rest) = self.layers.split_at_mut(index);
            let layer_input = match previous.last() {
                Some(layer) => layer.outputs(),
                None => inputs.view(),
            };
            rest[0].forward(layer_input);
        }
    }

    fn backward(&mut self, targets: ArrayView1<'_, f64>) -> f64 {
        let Some(output) = self.layers.last_mut() else {
            return 0.0;
        };
        let total_error = output.output_deltas(targets);

        for index in (0..self.layers.len() - 1).rev() {
            let (current, next) = self.layers.split_at_mut(index + 1);
            current[index].hidden_deltas(&next[0]);
        }
        total_error
    }

    fn update(&mut self, inputs: ArrayView1<'_, f64>, learning_rate: f64) {
        for index in (0..self.layers.len()).rev() {
            let (previous, rest) = self.layers.split_at_mut(index);
            let layer_input = match previous.last() {
                Some(layer) => layer.outputs(),
                None => inputs.view(),
            };
            rest[0].update(layer_input, learning_rate);
        }
    }

    fn layer_at(&self, index: isize) -> Option<&Layer> {
        to_index(index).and_then(|index| self.layers.get(index))
    }

    fn check_inputs(&self, len: usize) -> Result<()> {
        let expected = self.input_size().ok_or(NetworkError::Uninitialized)?;
        if len != expected {
            return Err(NetworkError::dimension_mismatch(
                format!("{expected} inputs"),
                format!("{len} inputs"),
            ));
        }
        Ok(())
    }

    fn check_targets(&self, len: usize) -> Result<()> {
        let expected = self.output_size().ok_or(NetworkError::Uninitialized)?;
        if len != expected {
            return Err(NetworkError::dimension_mismatch(
                format!("{expected} targets"),
                format!("{len} targets"),
            ));
        }
        Ok(())
    }
}

impl Default for NeuralNetwork {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(NetworkError::invalid_parameter(
            "learning_rate".to_string(),
            format!("must be finite and positive, got {learning_rate}"),
        ));
    }
    Ok(())
}

/// Fold a clock reading into a seed, keeping the bits above 64 by xor.
pub(crate) fn clock_seed(elapsed: Duration) -> u64 {
    let nanos = elapsed.as_nanos();
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

fn to_index(index: isize) -> Option<usize> {
    usize::try_from(index).ok()
}
