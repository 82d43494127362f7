use crate::metrics::ErrorHistory;

/// Plot the per-epoch error as ASCII art, scaled like the live error graph:
/// the vertical axis runs from `0` to [`ErrorHistory::scale_max`].
pub fn plot_error_history(history: &ErrorHistory, width: usize, height: usize) -> String {
    if history.is_empty() {
        return "No error data available".to_string();
    }

    let errors = history.to_vec();
    plot_series(&errors, "Error History", 0.0, history.scale_max(), width, height)
}

/// Plot arbitrary values as ASCII art, scaled to their own range
pub fn plot_values(values: &[f64], title: &str, width: usize, height: usize) -> String {
    let min_val = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !values.is_empty() && (max_val - min_val).abs() < f64::EPSILON {
        return format!("{}: All values are {:.4}", title, min_val);
    }
    plot_series(values, title, min_val, max_val, width, height)
}

/// Generic series plotter
fn plot_series(values: &[f64], title: &str, min_val: f64, max_val: f64, width: usize, height: usize) -> String {
    if values.is_empty() || width < 10 || height < 5 {
        return format!("{}: Invalid data or dimensions", title);
    }

    let mut plot = vec![vec![' '; width]; height];

    // Axes
    for row in plot.iter_mut() {
        row[0] = '|';
    }
    for cell in plot[height - 1].iter_mut() {
        *cell = '-';
    }
    plot[height - 1][0] = '+';

    let columns = (width - 3) as f64;
    let rows = (height - 3) as f64;
    let x_scale = if values.len() > 1 { columns / (values.len() - 1) as f64 } else { 0.0 };
    let y_scale = rows / (max_val - min_val);

    for (i, &value) in values.iter().enumerate() {
        let x = ((i as f64 * x_scale) as usize + 2).min(width - 1);
        let level = ((value - min_val) * y_scale).clamp(0.0, rows) as usize;
        let y = (height - 3 - level).min(height - 2);
        plot[y][x] = '*';
    }

    let mut output = format!("{}\n", title);
    output.push_str(&format!("Max: {:.4}\n", max_val));

    for row in plot.iter() {
        output.push_str(&row.iter().collect::<String>());
        output.push('\n');
    }

    output.push_str(&format!("Min: {:.4}\n", min_val));
    output.push_str(&format!("Points: {}\n", values.len()));
    if let Some(last) = values.last() {
        output.push_str(&format!("Loss: {:.5}\n", last));
    }

    output
}
