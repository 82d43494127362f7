//! Train a small network on XOR and print its decision map.
//!
//! Run with `cargo run --example xor`. Set `RUST_LOG=plainnet=debug` for
//! per-run details.

use std::ops::ControlFlow;

use ndarray::array;
use plainnet::dataset::Sample;
use plainnet::training::{Trainer, TrainerConfig};
use plainnet::visualization::plot_error_history;
use plainnet::{Activation, NetworkBuilder};
use tracing_subscriber::EnvFilter;

fn main() -> plainnet::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== XOR with one hidden layer ===\n");

    let mut network = NetworkBuilder::new(2, 1)
        .hidden_layers(1, 4)
        .activation(Activation::Sigmoid)
        .seed(7)
        .build()?;

    let samples = vec![
        Sample::new(array![0.0, 0.0], array![0.0]),
        Sample::new(array![0.0, 1.0], array![1.0]),
        Sample::new(array![1.0, 0.0], array![1.0]),
        Sample::new(array![1.0, 1.0], array![0.0]),
    ];

    let mut trainer = Trainer::new(TrainerConfig {
        max_epochs: 5000,
        learning_rate: 0.5,
        log_interval: 1000,
    });
    let summary = trainer.run(&mut network, &samples, |report| {
        if report.error < 1e-3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    println!(
        "Stopped after {} epochs (early: {}), final error {:.6}\n",
        summary.epochs_run,
        summary.stopped_early,
        summary.final_error.unwrap_or_default()
    );
    println!("{}", plot_error_history(trainer.history(), 60, 10));

    println!("Predictions:");
    for sample in &samples {
        let output = network.predict(sample.inputs.view());
        println!("  {} -> {:.4} (target {})", sample.inputs, output[0], sample.targets[0]);
    }

    println!("\nOutput above 0.5 over [-0.5, 1.5]^2:");
    let cells = 16;
    for row in 0..cells {
        let y = 1.5 - (row as f64 + 0.5) * 2.0 / cells as f64;
        let line: String = (0..cells)
            .map(|col| {
                let x = -0.5 + (col as f64 + 0.5) * 2.0 / cells as f64;
                if network.predict(array![x, y].view())[0] > 0.5 {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("  {}", line);
    }

    Ok(())
}
