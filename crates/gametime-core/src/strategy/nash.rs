//! Pure-strategy Nash equilibrium search.
//!
//! The outcome columns are treated as the choices of an opposing player.
//! That is a modelling shortcut for a single decision maker's payoff table,
//! not textbook two-player equilibrium analysis: both "players" are scored
//! by the same number. A consequence is that the cell holding the global
//! maximum always qualifies, so the minimax fallback only matters for
//! callers that feed `select` an empty candidate list.

use super::Strategy;
use super::minimax::maximin;
use crate::domain::PayoffMatrix;

#[derive(Debug, Clone, Copy, Default)]
pub struct NashEquilibrium;

impl Strategy for NashEquilibrium {
    fn name(&self) -> &'static str {
        "nashEquilibrium"
    }

    fn choose(&self, payoffs: &PayoffMatrix, _history: &[usize]) -> usize {
        select(payoffs, &pure_equilibria(payoffs))
    }
}

/// Row index of every equilibrium cell, in row-major order.
///
/// A row appears once per equilibrium cell it contains. Rows shorter than
/// the widest one simply have no cell in the missing columns.
pub fn pure_equilibria(payoffs: &PayoffMatrix) -> Vec<usize> {
    let rows = payoffs.rows();
    let mut found = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            let row_player_stays = rows
                .iter()
                .filter_map(|other| other.get(j))
                .all(|&v| v <= value);
            let column_player_stays = row.iter().all(|&v| v <= value);

            if row_player_stays && column_player_stays {
                found.push(i);
            }
        }
    }
    found
}

/// Candidate with the strictly largest best outcome; first one wins ties.
/// Candidates that name no row are ignored. No candidates → maximin.
pub fn select(payoffs: &PayoffMatrix, candidates: &[usize]) -> usize {
    candidates
        .iter()
        .filter_map(|&row| payoffs.row_max(row).map(|max| (row, max)))
        .reduce(|best, current| if current.1 > best.1 { current } else { best })
        .map_or_else(|| maximin(payoffs), |(row, _)| row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matrix(rows: &[&[f64]]) -> PayoffMatrix {
        PayoffMatrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn dominant_row_is_the_equilibrium() {
        let m = matrix(&[&[-30.0, -10.0], &[50.0, 100.0]]);
        assert_eq!(pure_equilibria(&m), vec![1]);
        assert_eq!(NashEquilibrium.choose(&m, &[]), 1);
    }

    #[test]
    fn equilibrium_rows_repeat_per_cell() {
        let m = matrix(&[&[4.0, 4.0], &[1.0, 2.0]]);
        assert_eq!(pure_equilibria(&m), vec![0, 0]);
    }

    #[rstest]
    #[case::cook_meal(vec![vec![-5.0, -2.0], vec![3.0, 5.0]], 1)]
    #[case::equal_maxima_keep_first(vec![vec![5.0, 1.0], vec![1.0, 5.0]], 0)]
    #[case::ragged(vec![vec![1.0], vec![0.0, 9.0]], 1)]
    fn chooses_equilibrium_row(#[case] rows: Vec<Vec<f64>>, #[case] expected: usize) {
        let m = PayoffMatrix::new(rows).unwrap();
        assert_eq!(NashEquilibrium.choose(&m, &[]), expected);
    }

    #[test]
    fn later_candidate_needs_strictly_better_best_outcome() {
        let m = matrix(&[&[2.0, 8.0], &[8.0, 1.0], &[9.0, 0.0]]);
        assert_eq!(select(&m, &[0, 1]), 0);
        assert_eq!(select(&m, &[0, 2]), 2);
    }

    #[test]
    fn no_candidates_falls_back_to_minimax() {
        let m = matrix(&[&[-10.0, 100.0], &[2.0, 3.0]]);
        assert_eq!(select(&m, &[]), maximin(&m));
        assert_eq!(select(&m, &[]), 1);
    }

    #[test]
    fn candidates_outside_the_matrix_are_ignored() {
        let m = matrix(&[&[-10.0, 100.0], &[2.0, 3.0]]);
        assert_eq!(select(&m, &[7, 0]), 0);
        assert_eq!(select(&m, &[2, 9]), maximin(&m));
    }

    #[test]
    fn global_maximum_always_qualifies() {
        let m = matrix(&[&[0.0, 1.0], &[1.0, 0.0]]);
        let eq = pure_equilibria(&m);
        assert!(eq.contains(&0));
        assert!(eq.contains(&1));
    }
}
