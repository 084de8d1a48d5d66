//! Panel captions.

/// Caption lines for a panel: the threshold rounded to an integer and the count.
pub fn caption_lines(threshold: f64, count: usize) -> [String; 2] {
    [format!("Threshold: {threshold:.0}"), format!("Count: {count}")]
}
