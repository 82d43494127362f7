use ndarray::{array, Array1};
use plainnet::{
    activations::Activation,
    config::{NetworkBuilder, NetworkConfig, NetworkMode, TaskKind},
    dataset::{DataPoint, Dataset},
    network::NeuralNetwork,
    training::{Trainer, TrainerConfig},
    visualization::{class_map, decision_lines, plot_error_history, regression_curve, winning_class},
};

fn xor_samples() -> Vec<(Array1<f64>, Array1<f64>)> {
    vec![
        (array![0.0, 0.0], array![0.0]),
        (array![0.0, 1.0], array![1.0]),
        (array![1.0, 0.0], array![1.0]),
        (array![1.0, 1.0], array![0.0]),
    ]
}

fn epoch(network: &mut NeuralNetwork, samples: &[(Array1<f64>, Array1<f64>)], learning_rate: f64) -> f64 {
    samples
        .iter()
        .map(|(inputs, targets)| network.train(inputs.view(), targets.view(), learning_rate))
        .sum()
}

#[test]
fn test_linearly_separable_points_converge() {
    let mut network = NeuralNetwork::with_seed(11);
    network.setup(2, 0, 1, 1, Activation::Sigmoid, TaskKind::Classification);
    let samples = vec![
        (array![-1.0, -1.0], array![0.0]),
        (array![1.0, 1.0], array![1.0]),
    ];

    let mut error = f64::INFINITY;
    for _ in 0..1000 {
        error = epoch(&mut network, &samples, 0.5);
    }
    assert!(error < 1e-3, "epoch error {}", error);
    assert!(network.predict(array![-1.0, -1.0].view())[0] < 0.1);
    assert!(network.predict(array![1.0, 1.0].view())[0] > 0.9);
}

#[test]
fn test_xor_needs_a_hidden_layer() {
    let mut single = NeuralNetwork::with_seed(5);
    single.setup(2, 0, 1, 1, Activation::Sigmoid, TaskKind::Classification);
    let mut error = 0.0;
    for _ in 0..1000 {
        error = epoch(&mut single, &xor_samples(), 0.5);
    }
    assert!(error > 0.1, "single layer solved xor with error {}", error);

    let mut hidden = NeuralNetwork::with_seed(5);
    hidden.setup(2, 1, 4, 1, Activation::Sigmoid, TaskKind::Classification);
    let samples = xor_samples();
    for _ in 0..5000 {
        error = epoch(&mut hidden, &samples, 0.5);
    }
    assert!(error < 0.05, "hidden layer failed xor with error {}", error);

    for (inputs, targets) in &samples {
        let output = hidden.predict(inputs.view())[0];
        assert!((output - targets[0]).abs() < 0.5);
    }
}

#[test]
fn test_dataset_trainer_and_views() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut data = Dataset::new();
    data.push(DataPoint::new(-6.0, -5.0, 0));
    data.push(DataPoint::new(-4.0, -7.0, 0));
    data.push(DataPoint::new(5.0, 6.0, 1));
    data.push(DataPoint::new(7.0, 4.0, 1));

    let config = NetworkConfig::for_mode(NetworkMode::SingleLayerClassification, 0, 1, 2, Activation::Sigmoid);
    let samples = data.samples(&config).unwrap();
    let mut network = NetworkBuilder::new(config.input_size, config.output_size)
        .activation(config.activation)
        .task(config.task)
        .seed(21)
        .build()
        .unwrap();

    let mut trainer = Trainer::new(TrainerConfig::new(500, 0.5));
    let summary = trainer.fit(&mut network, &samples).unwrap();
    assert_eq!(summary.epochs_run, 500);

    for point in data.points() {
        let inputs = array![data.normalize(point.x), data.normalize(point.y)];
        let output = network.predict(inputs.view());
        assert_eq!(winning_class(output.view()), Some(point.class_id));
    }

    let map = class_map(&mut network, data.axis_range(), 4);
    assert_eq!(map.dim(), (4, 4));
    // top-right lies beyond the class 1 cluster, bottom-left beyond class 0
    assert_eq!(map[[0, 3]], 1);
    assert_eq!(map[[3, 0]], 0);

    let lines = decision_lines(&network, data.axis_range());
    assert_eq!(lines.len(), 2);

    let plot = plot_error_history(trainer.history(), 40, 8);
    assert!(plot.contains("Loss:"));
}

#[test]
fn test_regression_curve_follows_data() {
    let config = NetworkConfig::for_mode(NetworkMode::MultiLayerRegression, 1, 6, 1, Activation::Sigmoid);
    assert_eq!(config.activation, Activation::Tanh);

    let data = Dataset::from_points(
        (-4..=4).map(|i| DataPoint::new(i as f64, 0.5 * i as f64, 0)).collect(),
        5.0,
    );
    let samples = data.samples(&config).unwrap();
    let mut network = NeuralNetwork::with_seed(8);
    network.try_setup(&config).unwrap();

    let mut trainer = Trainer::new(TrainerConfig::new(2000, 0.05));
    trainer.fit(&mut network, &samples).unwrap();

    let curve = regression_curve(&mut network, data.axis_range(), 9);
    assert_eq!(curve.len(), 9);
    assert_eq!(curve.first().map(|p| p.0), Some(-5.0));
    assert_eq!(curve.last().map(|p| p.0), Some(5.0));
    // the middle seven points sit on the trained range [-4, 4]
    for &(x, y) in &curve[1..8] {
        assert!((y - 0.5 * x).abs() < 0.5, "curve at {} is {}", x, y);
    }
}

#[test]
fn test_reset_then_retrain() {
    let mut network = NeuralNetwork::with_seed(3);
    network.setup(2, 1, 4, 1, Activation::Sigmoid, TaskKind::Classification);
    let samples = xor_samples();
    for _ in 0..100 {
        epoch(&mut network, &samples, 0.5);
    }

    network.reset();
    assert_eq!(network.layer_count(), 2);
    assert_eq!(network.layer_size(0), 4);
    assert_eq!(network.layer_size(1), 1);

    let first = epoch(&mut network, &samples, 0.5);
    assert!(first.is_finite());
}
