//! ASCII bar chart of the guesses-to-solve distribution

use thiserror::Error;

/// Fills a column up to its bar height
pub const BAR: char = '*';
/// Empty space above a bar
pub const SPACE: char = '.';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistogramError {
    #[error("bucket size must be at least 1")]
    ZeroBucketSize,
}

/// Render `frequency` as a bar chart, one column per entry
///
/// A bar's height is `frequency[i] / bucket_size`, rounded down. Rows are
/// printed from the tallest bar's height down to 1, each ending in a
/// newline; a chart where every bar has height 0 is the empty string.
///
/// # Errors
///
/// Returns `HistogramError::ZeroBucketSize` if `bucket_size` is 0.
///
/// # Examples
/// ```
/// use wordle_analyser::analysis::make_histogram;
///
/// let chart = make_histogram(&[1, 3, 5, 2, 3, 4, 0], 1).unwrap();
/// assert_eq!(
///     chart,
///     "..*....\n..*..*.\n.**.**.\n.*****.\n******.\n"
/// );
/// ```
pub fn make_histogram(frequency: &[usize], bucket_size: usize) -> Result<String, HistogramError> {
    if bucket_size == 0 {
        return Err(HistogramError::ZeroBucketSize);
    }

    let heights: Vec<usize> = frequency.iter().map(|&f| f / bucket_size).collect();
    let max_height = heights.iter().copied().max().unwrap_or(0);

    let mut chart = String::with_capacity(max_height * (heights.len() + 1));
    for level in (1..=max_height).rev() {
        chart.extend(
            heights
                .iter()
                .map(|&height| if height >= level { BAR } else { SPACE }),
        );
        chart.push('\n');
    }

    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_unit_buckets() {
        let chart = make_histogram(&[1, 3, 5, 2, 3, 4, 0], 1).unwrap();
        let expected = "\
..*....
..*..*.
.**.**.
.*****.
******.
";
        assert_eq!(chart, expected);
    }

    #[test]
    fn large_bucket_gives_empty_chart() {
        assert_eq!(make_histogram(&[1, 3, 5, 2, 3, 4, 0], 50).unwrap(), "");
    }

    #[test]
    fn all_zero_gives_empty_chart() {
        assert_eq!(make_histogram(&[0; 7], 1).unwrap(), "");
    }

    #[test]
    fn heights_round_down() {
        // Heights 0, 1, 1, 0, 0, 0, 0
        let chart = make_histogram(&[49, 50, 99, 0, 0, 0, 10], 50).unwrap();
        assert_eq!(chart, ".**....\n");
    }

    #[test]
    fn ends_with_newline() {
        let chart = make_histogram(&[0, 0, 0, 0, 0, 0, 7], 2).unwrap();
        assert_eq!(chart, "......*\n......*\n......*\n");
        assert!(chart.ends_with('\n'));
    }

    #[test]
    fn zero_bucket_size_rejected() {
        assert_eq!(
            make_histogram(&[1, 2, 3, 4, 5, 6, 7], 0),
            Err(HistogramError::ZeroBucketSize)
        );
    }
}
