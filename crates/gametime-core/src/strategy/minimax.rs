//! Minimax (maximin): avoid the worst case.

use super::Strategy;
use crate::domain::PayoffMatrix;

/// Pick the action whose worst outcome is best.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose(&self, payoffs: &PayoffMatrix, _history: &[usize]) -> usize {
        maximin(payoffs)
    }
}

/// Index of the row with the largest minimum. Ties go to the first row.
pub fn maximin(payoffs: &PayoffMatrix) -> usize {
    let mut best = 0;
    let mut best_min = f64::NEG_INFINITY;
    for action in 0..payoffs.len() {
        match payoffs.row_min(action) {
            Some(worst) if worst > best_min => {
                best = action;
                best_min = worst;
            }
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matrix(rows: &[&[f64]]) -> PayoffMatrix {
        PayoffMatrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[rstest]
    #[case::cook_meal(vec![vec![-5.0, -2.0], vec![3.0, 5.0]], 1)]
    #[case::first_row_safer(vec![vec![2.0, 2.0], vec![-10.0, 100.0]], 0)]
    #[case::tie_keeps_first(vec![vec![1.0, 4.0], vec![1.0, 9.0]], 0)]
    #[case::single_outcome(vec![vec![3.0], vec![4.0], vec![-1.0]], 1)]
    fn chooses_best_worst_case(#[case] rows: Vec<Vec<f64>>, #[case] expected: usize) {
        let m = PayoffMatrix::new(rows).unwrap();
        assert_eq!(Minimax.choose(&m, &[]), expected);
    }

    #[test]
    fn ignores_history() {
        let m = matrix(&[&[-3.0, -1.0], &[1.0, 2.0]]);
        assert_eq!(Minimax.choose(&m, &[0, 0, 1]), Minimax.choose(&m, &[]));
    }
}
