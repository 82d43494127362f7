pub mod boundary;
pub mod text_plots;

pub use boundary::{class_map, decision_lines, regression_curve, winning_class, DecisionLine};
pub use text_plots::{plot_error_history, plot_values};
