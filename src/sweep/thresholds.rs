//! Evenly spaced threshold generation.

/// `samples` evenly spaced values from `lower` to `upper`, both inclusive.
///
/// A single sample yields `[lower]`. The last value is pinned to `upper` so
/// accumulated rounding never drops the upper bound.
pub fn threshold_values(lower: f64, upper: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![lower],
        n => {
            let step = (upper - lower) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        upper
                    } else {
                        lower + step * i as f64
                    }
                })
                .collect()
        }
    }
}
