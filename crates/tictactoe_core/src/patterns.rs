//! Winning pattern generation.

use tracing::instrument;

/// Cell indices that together form a win.
pub type Pattern = Vec<usize>;

/// Returns every winning pattern for an `size`×`size` board.
///
/// Rows and columns are interleaved (row `i`, then column `i`), followed by
/// the main diagonal and then the anti-diagonal. Callers rely on this exact
/// order, so do not sort or deduplicate the result.
///
/// ```
/// use tictactoe_core::winning_patterns;
///
/// assert_eq!(
///     winning_patterns(2),
///     vec![vec![0, 1], vec![0, 2], vec![2, 3], vec![1, 3], vec![0, 3], vec![1, 2]],
/// );
/// ```
#[instrument]
pub fn winning_patterns(size: usize) -> Vec<Pattern> {
    let mut patterns = Vec::with_capacity(2 * size + 2);
    for i in 0..size {
        patterns.push((0..size).map(|j| i * size + j).collect());
        patterns.push((0..size).map(|j| i + j * size).collect());
    }
    patterns.push((0..size).map(|i| i * size + i).collect());
    patterns.push((0..size).map(|i| i * (size - 1) + (size - 1)).collect());
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_three_by_three_literal() {
        assert_eq!(
            winning_patterns(3),
            vec![
                vec![0, 1, 2],
                vec![0, 3, 6],
                vec![3, 4, 5],
                vec![1, 4, 7],
                vec![6, 7, 8],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_six_by_six_literal() {
        assert_eq!(
            winning_patterns(6),
            vec![
                vec![0, 1, 2, 3, 4, 5],
                vec![0, 6, 12, 18, 24, 30],
                vec![6, 7, 8, 9, 10, 11],
                vec![1, 7, 13, 19, 25, 31],
                vec![12, 13, 14, 15, 16, 17],
                vec![2, 8, 14, 20, 26, 32],
                vec![18, 19, 20, 21, 22, 23],
                vec![3, 9, 15, 21, 27, 33],
                vec![24, 25, 26, 27, 28, 29],
                vec![4, 10, 16, 22, 28, 34],
                vec![30, 31, 32, 33, 34, 35],
                vec![5, 11, 17, 23, 29, 35],
                vec![0, 7, 14, 21, 28, 35],
                vec![5, 10, 15, 20, 25, 30],
            ]
        );
    }

    #[test]
    fn test_shape_for_many_sizes() {
        for size in 2..=9 {
            let patterns = winning_patterns(size);
            assert_eq!(patterns.len(), 2 * size + 2, "size {size}");
            for pattern in &patterns {
                assert_eq!(pattern.len(), size);
                let distinct: HashSet<_> = pattern.iter().collect();
                assert_eq!(distinct.len(), size);
                assert!(pattern.iter().all(|&index| index < size * size));
            }
        }
    }
}
