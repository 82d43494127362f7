//! User-placed points and their conversion into training samples.
//!
//! Points live in world coordinates spanning `[-axis_range, axis_range]` on
//! both axes. Before they reach the network they are divided by the axis
//! range, and classification targets are one-hot vectors whose "off" value
//! matches the activation's lower bound.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::activations::Activation;
use crate::config::{NetworkConfig, TaskKind};
use crate::error::{NetworkError, Result};

pub const DEFAULT_AXIS_RANGE: f64 = 10.0;

/// A point placed in world coordinates, tagged with a class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub class_id: usize,
}

impl DataPoint {
    pub fn new(x: f64, y: f64, class_id: usize) -> Self {
        DataPoint { x, y, class_id }
    }
}

/// One input/target pair ready for [`NeuralNetwork::train`](crate::network::NeuralNetwork::train).
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub inputs: Array1<f64>,
    pub targets: Array1<f64>,
}

impl Sample {
    pub fn new(inputs: Array1<f64>, targets: Array1<f64>) -> Self {
        Sample { inputs, targets }
    }
}

/// Values used for the "on" and "off" slots of a one-hot target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetEncoding {
    pub low: f64,
    pub high: f64,
}

impl TargetEncoding {
    pub fn for_activation(activation: Activation) -> Self {
        let low = match activation {
            Activation::Tanh => -1.0,
            Activation::Sigmoid | Activation::Linear => 0.0,
        };
        TargetEncoding { low, high: 1.0 }
    }

    /// `outputs` lows with `high` at `class_id`; all lows if the class has no slot.
    pub fn one_hot(&self, class_id: usize, outputs: usize) -> Array1<f64> {
        let mut target = Array1::from_elem(outputs, self.low);
        if let Some(slot) = target.get_mut(class_id) {
            *slot = self.high;
        }
        target
    }
}

/// A collection of points plus the axis range used to normalize them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    points: Vec<DataPoint>,
    axis_range: f64,
}

impl Dataset {
    pub fn new() -> Self {
        Self::with_axis_range(DEFAULT_AXIS_RANGE)
    }

    pub fn with_axis_range(axis_range: f64) -> Self {
        Dataset {
            points: Vec::new(),
            axis_range,
        }
    }

    pub fn from_points(points: Vec<DataPoint>, axis_range: f64) -> Self {
        Dataset { points, axis_range }
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn axis_range(&self) -> f64 {
        self.axis_range
    }

    /// World coordinate to network scale.
    pub fn normalize(&self, value: f64) -> f64 {
        value / self.axis_range
    }

    /// Network scale back to world coordinate.
    pub fn denormalize(&self, value: f64) -> f64 {
        value * self.axis_range
    }

    /// Encode every point for a network built from `config`, in insertion order.
    pub fn samples(&self, config: &NetworkConfig) -> Result<Vec<Sample>> {
        if !(self.axis_range.is_finite() && self.axis_range > 0.0) {
            return Err(NetworkError::invalid_parameter(
                "axis_range".to_string(),
                format!("must be finite and positive, got {}", self.axis_range),
            ));
        }
        if self.points.is_empty() {
            return Err(NetworkError::EmptyDataset("no data points".to_string()));
        }

        let encoding = TargetEncoding::for_activation(config.activation);
        let samples = self
            .points
            .iter()
            .map(|p| match config.task {
                TaskKind::Regression => Sample::new(
                    Array1::from_vec(vec![self.normalize(p.x)]),
                    Array1::from_vec(vec![self.normalize(p.y)]),
                ),
                TaskKind::Classification => Sample::new(
                    Array1::from_vec(vec![self.normalize(p.x), self.normalize(p.y)]),
                    encoding.one_hot(p.class_id, config.output_size),
                ),
            })
            .collect();
        Ok(samples)
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_target_encoding_per_activation() {
        let tanh = TargetEncoding::for_activation(Activation::Tanh);
        assert_eq!(tanh.one_hot(1, 3), array![-1.0, 1.0, -1.0]);

        let sigmoid = TargetEncoding::for_activation(Activation::Sigmoid);
        assert_eq!(sigmoid.one_hot(1, 3), array![0.0, 1.0, 0.0]);

        let linear = TargetEncoding::for_activation(Activation::Linear);
        assert_eq!(linear.one_hot(0, 2), array![1.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_class_is_all_low() {
        let tanh = TargetEncoding::for_activation(Activation::Tanh);
        assert_eq!(tanh.one_hot(5, 2), array![-1.0, -1.0]);
    }

    #[test]
    fn test_classification_samples() {
        let mut data = Dataset::with_axis_range(5.0);
        data.push(DataPoint::new(2.5, -5.0, 1));
        let mut config = NetworkConfig::new(2, 2);
        config.activation = Activation::Tanh;

        let samples = data.samples(&config).unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].inputs, array![0.5, -1.0]);
        assert_eq!(samples[0].targets, array![-1.0, 1.0]);
    }

    #[test]
    fn test_regression_samples() {
        let data = Dataset::from_points(vec![DataPoint::new(-4.0, 2.0, 3)], 8.0);
        let mut config = NetworkConfig::new(1, 1);
        config.task = TaskKind::Regression;

        let samples = data.samples(&config).unwrap();
        assert_eq!(samples[0].inputs, array![-0.5]);
        assert_eq!(samples[0].targets, array![0.25]);
    }

    #[test]
    fn test_empty_and_bad_range() {
        let config = NetworkConfig::new(2, 1);
        assert!(matches!(
            Dataset::new().samples(&config),
            Err(NetworkError::EmptyDataset(_))
        ));

        let data = Dataset::from_points(vec![DataPoint::new(0.0, 0.0, 0)], 0.0);
        assert!(matches!(
            data.samples(&config),
            Err(NetworkError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_normalize_roundtrip() {
        let data = Dataset::new();
        assert_eq!(data.normalize(5.0), 0.5);
        assert_eq!(data.denormalize(0.5), 5.0);
        assert_eq!(data.axis_range(), DEFAULT_AXIS_RANGE);
    }
}
