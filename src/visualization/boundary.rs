//! Geometry behind the decision-boundary views, computed in world coordinates.
//!
//! Inputs are divided by `axis_range` before they reach the network, exactly
//! as the training samples are, so a network trained on a [`Dataset`](crate::dataset::Dataset)
//! can be probed with the same range.

use ndarray::{Array1, Array2, ArrayView1};

use crate::network::NeuralNetwork;

/// Below this magnitude the second input weight is treated as zero and the
/// neuron's line would be vertical.
pub const MIN_SLOPE_WEIGHT: f64 = 1e-4;

/// A segment in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionLine {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Index of the strongest output, first one on ties. `None` when empty.
pub fn winning_class(outputs: ArrayView1<'_, f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &value) in outputs.iter().enumerate() {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// The line `w1*x + w2*y + b = 0` of every neuron in the first layer,
/// spanning the full horizontal range.
///
/// Only meaningful for networks with two inputs; missing weights read as
/// `0.0`. Neurons whose line would be vertical yield `None`.
pub fn decision_lines(network: &NeuralNetwork, axis_range: f64) -> Vec<Option<DecisionLine>> {
    if network.layer_count() == 0 {
        return Vec::new();
    }

    (0..network.layer_size(0) as isize)
        .map(|neuron| {
            let w1 = network.weight(0, neuron, 0);
            let w2 = network.weight(0, neuron, 1);
            let b = network.bias(0, neuron);
            if w2.abs() < MIN_SLOPE_WEIGHT {
                return None;
            }

            let line_y = |x: f64| (-w1 * (x / axis_range) - b) * axis_range / w2;
            Some(DecisionLine {
                start: (-axis_range, line_y(-axis_range)),
                end: (axis_range, line_y(axis_range)),
            })
        })
        .collect()
}

/// Winning class at the centre of each cell of a `cells × cells` grid over
/// `[-axis_range, axis_range]²`. Row 0 is the top of the plane.
pub fn class_map(network: &mut NeuralNetwork, axis_range: f64, cells: usize) -> Array2<usize> {
    let mut map = Array2::zeros((cells, cells));
    if network.layer_count() == 0 {
        return map;
    }

    let step = 2.0 * axis_range / cells as f64;
    for ((row, col), class) in map.indexed_iter_mut() {
        let x = -axis_range + (col as f64 + 0.5) * step;
        let y = axis_range - (row as f64 + 0.5) * step;
        let input = Array1::from_vec(vec![x / axis_range, y / axis_range]);
        let output = network.predict(input.view());
        *class = winning_class(output.view()).unwrap_or(0);
    }
    map
}

/// `steps` evenly spaced `(x, y)` points of a one-input regression network's
/// curve across `[-axis_range, axis_range]`.
pub fn regression_curve(network: &mut NeuralNetwork, axis_range: f64, steps: usize) -> Vec<(f64, f64)> {
    if network.layer_count() == 0 || steps < 2 {
        return Vec::new();
    }

    Array1::linspace(-axis_range, axis_range, steps)
        .iter()
        .map(|&x| {
            let input = Array1::from_vec(vec![x / axis_range]);
            let output = network.predict(input.view());
            (x, output[0] * axis_range)
        })
        .collect()
}
