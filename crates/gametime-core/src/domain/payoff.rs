//! Payoff matrix: action-indexed rows of possible outcomes.

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// Rows are actions, columns are the outcomes that action may produce.
///
/// Rows do not need to share a length, but every row holds at least one
/// finite value. Strategies rely on both guarantees, so the only way to build
/// a matrix is through [`PayoffMatrix::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PayoffMatrix {
    rows: Vec<Vec<f64>>,
}

impl PayoffMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, CatalogError> {
        if rows.is_empty() {
            return Err(CatalogError::EmptyMatrix);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(CatalogError::EmptyRow { row: index });
            }
            if let Some(value) = row.iter().find(|v| !v.is_finite()) {
                return Err(CatalogError::NonFinite {
                    row: index,
                    value: *value,
                });
            }
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, action: usize) -> Option<&[f64]> {
        self.rows.get(action).map(Vec::as_slice)
    }

    /// Number of actions (rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row; columns past a shorter row's end simply do not exist for it.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Worst outcome of an action, `None` if there is no such row.
    pub fn row_min(&self, action: usize) -> Option<f64> {
        self.row(action)
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
    }

    /// Best outcome of an action, `None` if there is no such row.
    pub fn row_max(&self, action: usize) -> Option<f64> {
        self.row(action)
            .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }
}

impl TryFrom<Vec<Vec<f64>>> for PayoffMatrix {
    type Error = CatalogError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PayoffMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.rows
    }
}
