use crate::data_frame::*;
use crate::error::{AdalineError, Result};

/// Plain sum of squared elements, no averaging
pub fn sum_squared_error(errors: &Labels) -> V {
    errors.iter().map(|e| e.powi(2)).sum()
}

/// Fraction of predictions equal to the true label
pub fn accuracy_score(true_y: &Labels, pred_y: &Labels) -> Result<V> {
    if true_y.len() != pred_y.len() {
        return Err(AdalineError::shape(true_y.len(), pred_y.len()));
    }
    if true_y.is_empty() {
        return Err(AdalineError::empty("no samples to score"));
    }
    let hits = true_y
        .iter()
        .zip(pred_y.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(hits as V / true_y.len() as V)
}

/// log10 of every value, non finite results are kept as they are
pub fn log10_series(values: &[V]) -> Vec<V> {
    values.iter().map(|v| v.log10()).collect()
}
