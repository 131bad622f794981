use crate::pipeline::ScoreError;

/// Euclidean distance between two attribute vectors in the same schema order.
pub fn distance(a: &[f64], b: &[f64]) -> Result<f64, ScoreError> {
    if a.len() != b.len() {
        return Err(ScoreError::AttributeMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    let sum_sq = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>();
    let d = if sum_sq.is_finite() {
        sum_sq.sqrt()
    } else {
        scaled_distance(a, b)
    };
    if !d.is_finite() {
        return Err(ScoreError::NonFiniteDistance);
    }
    Ok(d)
}

// Squares overflowed; divide through by the largest difference first.
fn scaled_distance(a: &[f64], b: &[f64]) -> f64 {
    let scale = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0f64, f64::max);
    if !scale.is_finite() || scale == 0.0 {
        return scale;
    }
    let sum_sq = a
        .iter()
        .zip(b)
        .map(|(x, y)| {
            let d = (x - y) / scale;
            d * d
        })
        .sum::<f64>();
    scale * sum_sq.sqrt()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_distance.rs"]
mod tests;
