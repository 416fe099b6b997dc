//! Small numeric helpers over score lists. Empty input yields 0.0, never NaN.

pub fn mean(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        n => values.iter().sum::<f64>() / n as f64,
    }
}

/// Population standard deviation of `values`.
pub fn stddev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let centre = mean(values);
    let squared: Vec<f64> = values.iter().map(|v| (v - centre).powi(2)).collect();
    mean(&squared).sqrt()
}
