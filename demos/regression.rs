//! Fit a noisy sine wave in world coordinates and print the learned curve.
//!
//! Run with `cargo run --example regression`.

use plainnet::config::{NetworkConfig, NetworkMode};
use plainnet::dataset::{DataPoint, Dataset};
use plainnet::training::{Trainer, TrainerConfig};
use plainnet::visualization::{plot_error_history, regression_curve};
use plainnet::{Activation, NeuralNetwork};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() -> plainnet::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Regression on a sine wave ===\n");

    // y = 6 sin(x / 3) with a little noise, on a 10-unit axis
    let mut rng = StdRng::seed_from_u64(1);
    let mut data = Dataset::new();
    for i in -16..=16 {
        let x = i as f64 * 0.5;
        let y = 6.0 * (x / 3.0).sin() + rng.gen_range(-0.3..0.3);
        data.push(DataPoint::new(x, y, 0));
    }

    let config = NetworkConfig::for_mode(NetworkMode::MultiLayerRegression, 1, 8, 1, Activation::Tanh);
    println!("Config: {}\n", config.to_json()?);

    let samples = data.samples(&config)?;
    let mut network = NeuralNetwork::with_seed(3);
    network.try_setup(&config)?;

    let mut trainer = Trainer::new(TrainerConfig {
        max_epochs: 3000,
        learning_rate: 0.05,
        log_interval: 500,
    });
    let summary = trainer.fit(&mut network, &samples)?;
    println!(
        "Trained {} epochs, final error {:.6}, best {:.6}\n",
        summary.epochs_run,
        summary.final_error.unwrap_or_default(),
        trainer.history().best().unwrap_or_default()
    );
    println!("{}", plot_error_history(trainer.history(), 60, 10));

    println!("{:>8} {:>10} {:>10}", "x", "predicted", "expected");
    for (x, y) in regression_curve(&mut network, data.axis_range(), 11) {
        println!("{:>8.2} {:>10.3} {:>10.3}", x, y, 6.0 * (x / 3.0).sin());
    }

    Ok(())
}
