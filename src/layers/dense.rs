use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Zip};
use rand::Rng;

use super::initialization::WeightInit;
use crate::activations::Activation;

/// A fully connected layer of the network.
///
/// Weights live in a row-major `(neuron_count, input_width)` matrix, so the
/// weight for neuron `n` and input `w` sits at flat index `n * input_width + w`.
/// `outputs` and `deltas` are scratch buffers overwritten by every forward and
/// backward pass.
#[derive(Debug, Clone)]
pub struct Layer {
    weights: Array2<f64>,
    biases: Array1<f64>,
    outputs: Array1<f64>,
    deltas: Array1<f64>,
    activation: Activation,
    linear_output: bool,
}

impl Layer {
    /// Create a layer of `neuron_count` neurons reading `input_width` inputs.
    ///
    /// `activation` is the configured activation; `linear_output` marks the
    /// output layer of a regression network, whose neurons emit their raw sum.
    pub fn new<R: Rng + ?Sized>(
        input_width: usize,
        neuron_count: usize,
        activation: Activation,
        linear_output: bool,
        init: WeightInit,
        rng: &mut R,
    ) -> Self {
        debug_assert!(input_width > 0, "layer input width must be positive");
        debug_assert!(neuron_count > 0, "layer neuron count must be positive");
        let weights = init.initialize_weights((neuron_count, input_width), rng);
        let biases = init.initialize_biases(neuron_count, rng);
        Layer {
            weights,
            biases,
            outputs: Array1::zeros(neuron_count),
            deltas: Array1::zeros(neuron_count),
            activation,
            linear_output,
        }
    }

    pub fn with_weights(mut self, weights: Array2<f64>) -> Self {
        assert_eq!(weights.dim(), self.weights.dim());
        self.weights = weights;
        self
    }

    pub fn with_biases(mut self, biases: Array1<f64>) -> Self {
        assert_eq!(biases.dim(), self.biases.dim());
        self.biases = biases;
        self
    }

    pub fn neuron_count(&self) -> usize {
        self.biases.len()
    }

    pub fn input_width(&self) -> usize {
        self.weights.ncols()
    }

    /// The configured activation of this layer.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// True when this layer emits raw weighted sums (regression output layer).
    pub fn is_output_linear(&self) -> bool {
        self.linear_output
    }

    /// Activation actually applied to this layer's sums.
    pub fn effective_activation(&self) -> Activation {
        if self.linear_output {
            Activation::Linear
        } else {
            self.activation
        }
    }

    pub fn weights(&self) -> ArrayView2<'_, f64> {
        self.weights.view()
    }

    pub fn biases(&self) -> ArrayView1<'_, f64> {
        self.biases.view()
    }

    /// Activations computed by the most recent forward pass.
    pub fn outputs(&self) -> ArrayView1<'_, f64> {
        self.outputs.view()
    }

    /// Error signals computed by the most recent backward pass.
    pub fn deltas(&self) -> ArrayView1<'_, f64> {
        self.deltas.view()
    }

    /// Incoming weights of one neuron, `None` past the last neuron.
    pub fn row(&self, neuron: usize) -> Option<ArrayView1<'_, f64>> {
        (neuron < self.neuron_count()).then(|| self.weights.row(neuron))
    }

    /// Weight connecting input `input` to neuron `neuron`, if both exist.
    pub fn weight(&self, neuron: usize, input: usize) -> Option<f64> {
        self.weights.get((neuron, input)).copied()
    }

    pub fn bias(&self, neuron: usize) -> Option<f64> {
        self.biases.get(neuron).copied()
    }

    /// Redraw every weight and bias in place, keeping the shape.
    pub fn reinitialize<R: Rng + ?Sized>(&mut self, init: WeightInit, rng: &mut R) {
        self.biases = init.initialize_biases(self.neuron_count(), rng);
        self.weights = init.initialize_weights(self.weights.dim(), rng);
    }

    /// Compute `outputs` from `input`.
    ///
    /// `input` should be exactly `input_width` long. A shorter input leaves the
    /// missing terms out of each sum and extra trailing values are ignored.
    pub(crate) fn forward(&mut self, input: ArrayView1<'_, f64>) {
        debug_assert_eq!(input.len(), self.input_width(), "layer input length mismatch");
        let width = input.len().min(self.input_width());
        let input = input.slice(s![..width]);
        let activation = self.effective_activation();

        Zip::from(&mut self.outputs)
            .and(self.weights.rows())
            .and(&self.biases)
            .for_each(|out, row, &bias| {
                let sum = bias + row.slice(s![..width]).dot(&input);
                *out = activation.apply(sum);
            });
    }

    /// Set output deltas against `targets`, returning `Σ 0.5 * error²`.
    ///
    /// Neurons without a matching target get a zero delta.
    pub(crate) fn output_deltas(&mut self, targets: ArrayView1<'_, f64>) -> f64 {
        debug_assert_eq!(targets.len(), self.neuron_count(), "target length mismatch");
        let count = targets.len().min(self.neuron_count());
        let activation = self.effective_activation();
        let mut total_error = 0.0;

        self.deltas.fill(0.0);
        Zip::from(self.deltas.slice_mut(s![..count]))
            .and(self.outputs.slice(s![..count]))
            .and(targets.slice(s![..count]))
            .for_each(|delta, &output, &target| {
                let error = target - output;
                total_error += 0.5 * error * error;
                *delta = error * activation.derivative(output);
            });
        total_error
    }

    /// Set hidden deltas from the already-processed `next` layer.
    pub(crate) fn hidden_deltas(&mut self, next: &Layer) {
        debug_assert_eq!(next.input_width(), self.neuron_count());
        // Column n of next.weights holds every weight reading this layer's neuron n.
        let propagated = next.weights.t().dot(&next.deltas);
        let activation = self.activation;

        Zip::from(&mut self.deltas)
            .and(&propagated)
            .and(&self.outputs)
            .for_each(|delta, &error, &output| {
                *delta = error * activation.derivative(output);
            });
    }

    /// Gradient step on weights and biases using the current deltas.
    pub(crate) fn update(&mut self, input: ArrayView1<'_, f64>, learning_rate: f64) {
        let width = input.len().min(self.input_width());
        let input = input.slice(s![..width]);

        Zip::from(self.weights.rows_mut())
            .and(&mut self.biases)
            .and(&self.deltas)
            .for_each(|mut row, bias, &delta| {
                let step = learning_rate * delta;
                row.slice_mut(s![..width]).scaled_add(step, &input);
                *bias += step;
            });
    }
}
