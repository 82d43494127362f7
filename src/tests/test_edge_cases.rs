use ndarray::{array, Array1};
use crate::activations::Activation;
use crate::config::TaskKind;
use crate::network::NeuralNetwork;

#[test]
fn test_activation_edge_cases() {
    for activation in [Activation::Sigmoid, Activation::Tanh] {
        // Very large magnitudes saturate instead of overflowing
        for x in [1e10, 1e300, f64::MAX, -1e10, -1e300, f64::MIN] {
            let y = activation.apply(x);
            assert!(y.is_finite(), "{:?} produced non-finite value for {}", activation, x);
            let (low, high) = activation.output_range().unwrap();
            assert!(y >= low && y <= high);
            assert!(activation.derivative(y).is_finite());
        }
    }
}

#[test]
fn test_empty_network_is_inert() {
    let mut network = NeuralNetwork::with_seed(0);

    assert_eq!(network.predict(array![0.1, 0.2].view()), array![0.1, 0.2]);
    assert_eq!(network.train(array![0.1].view(), array![1.0].view(), 0.1), 0.0);
    assert_eq!(network.weight(0, 0, 0), 0.0);
    assert_eq!(network.weight(-1, 0, 0), 0.0);
    assert_eq!(network.weight(99, 0, 0), 0.0);
    assert_eq!(network.bias(0, -1), 0.0);
    assert_eq!(network.bias(0, 0), 0.0);
}

#[test]
fn test_accessors_extreme_indices() {
    let mut network = NeuralNetwork::with_seed(0);
    network.setup(2, 1, 2, 1, Activation::Sigmoid, TaskKind::Classification);
    assert_eq!(network.weight(isize::MIN, 0, 0), 0.0);
    assert_eq!(network.weight(0, isize::MAX, 0), 0.0);
    assert_eq!(network.weight(0, 0, isize::MIN), 0.0);
    assert_eq!(network.bias(isize::MAX, isize::MAX), 0.0);
}

#[test]
fn test_single_neuron_network() {
    let mut network = NeuralNetwork::with_seed(6);
    network.setup(1, 0, 1, 1, Activation::Linear, TaskKind::Classification);

    let output = network.predict(array![2.0].view());
    let expected = network.bias(0, 0) + 2.0 * network.weight(0, 0, 0);
    assert!((output[0] - expected).abs() < 1e-12);
}

#[test]
fn test_deep_network_stays_finite() {
    let mut network = NeuralNetwork::with_seed(13);
    network.setup(2, 8, 6, 2, Activation::Tanh, TaskKind::Classification);
    let input = array![1.0, -1.0];
    let target = array![1.0, -1.0];

    for _ in 0..100 {
        let loss = network.train(input.view(), target.view(), 0.1);
        assert!(loss.is_finite());
    }
    assert!(network.predict(input.view()).iter().all(|y| y.is_finite()));
}

#[test]
fn test_zero_targets_on_regression() {
    let mut network = NeuralNetwork::with_seed(3);
    network.setup(1, 1, 2, 1, Activation::Tanh, TaskKind::Regression);
    let output = network.predict(array![0.0].view())[0];
    let loss = network.train(array![0.0].view(), Array1::zeros(1).view(), 0.1);
    assert!((loss - 0.5 * output * output).abs() < 1e-12);
}

#[test]
fn test_linear_activation_classification_is_linear() {
    let mut network = NeuralNetwork::with_seed(19);
    network.setup(2, 1, 3, 1, Activation::Linear, TaskKind::Classification);

    let a = network.predict(array![0.2, 0.4].view())[0];
    let b = network.predict(array![0.4, 0.8].view())[0];
    let zero = network.predict(array![0.0, 0.0].view())[0];
    // f(2x) - f(0) == 2 * (f(x) - f(0)) for an affine map
    assert!(((b - zero) - 2.0 * (a - zero)).abs() < 1e-12);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "layer input length mismatch")]
fn test_short_input_asserts_in_debug() {
    let mut network = NeuralNetwork::with_seed(4);
    network.setup(3, 1, 2, 2, Activation::Sigmoid, TaskKind::Classification);
    network.predict(array![0.5].view());
}

#[test]
#[cfg(not(debug_assertions))]
fn test_mismatched_lengths_in_release() {
    let mut network = NeuralNetwork::with_seed(4);
    network.setup(3, 1, 2, 2, Activation::Sigmoid, TaskKind::Classification);

    // Missing inputs drop out of the sums, so they act as zeros.
    let short = network.predict(array![0.5].view());
    let padded = network.predict(array![0.5, 0.0, 0.0].view());
    for (s, p) in short.iter().zip(padded.iter()) {
        assert!((s - p).abs() < 1e-12);
    }

    // Extra trailing inputs are ignored.
    let exact = network.predict(array![0.5, -0.25, 0.75].view());
    let long = network.predict(array![0.5, -0.25, 0.75, 9.0, -9.0].view());
    assert_eq!(exact, long);

    // An output neuron without a target gets no error signal.
    let loss = network.train(array![0.5, -0.25, 0.75].view(), array![1.0].view(), 0.1);
    assert!(loss.is_finite());
    let output = &network.layers()[1];
    assert_ne!(output.deltas()[0], 0.0);
    assert_eq!(output.deltas()[1], 0.0);
}
