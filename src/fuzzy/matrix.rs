// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The dynamic-programming table for weighted edit distance.
//!
//! Rows are positions in the indexed word (trie depth), columns are positions
//! in the query. Row 0 is the empty indexed prefix; column 0 is the empty
//! query prefix. During a trie walk row `d` is rewritten every time the walk
//! arrives at a node of depth `d`, which is fine because a node only reads
//! rows belonging to its ancestors.

use super::ErrorValues;
use crate::text::Letter;

/// A dense `rows x columns` table of accumulated costs.
#[derive(Debug, Clone)]
pub struct ErrorMatrix {
    rows: usize,
    columns: usize,
    cells: Vec<i32>,
}

impl ErrorMatrix {
    /// `rows` must cover depth 0 through the longest indexed word; `columns`
    /// is the query length plus one.
    pub fn new(rows: usize, columns: usize, row_step: i32, column_step: i32) -> Self {
        let mut cells: Vec<i32> = vec![0; rows * columns];
        for i in 1..columns {
            cells[i] = cells[i - 1].saturating_add(row_step);
        }
        for r in 1..rows {
            cells[r * columns] = cells[(r - 1) * columns].saturating_add(column_step);
        }
        ErrorMatrix {
            rows,
            columns,
            cells,
        }
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> i32 {
        debug_assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column]
    }

    #[inline]
    pub fn set(&mut self, row: usize, column: usize, error: i32) {
        debug_assert!(row < self.rows && column < self.columns);
        self.cells[row * self.columns + column] = error;
    }

    /// Cost of matching the whole query against the prefix ending at `row`.
    #[inline]
    pub fn total_error(&self, row: usize) -> i32 {
        self.get(row, self.columns - 1)
    }

    /// Cheapest cell in `row`. If this exceeds the budget, no extension of
    /// the prefix can come back under it.
    pub fn min_error(&self, row: usize) -> i32 {
        let start = row * self.columns;
        self.cells[start..start + self.columns]
            .iter()
            .copied()
            .min()
            .unwrap_or(i32::MAX)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

/// Build a matrix sized for `query` against indexed words up to `max_depth`.
///
/// Moving along row 0 skips query letters, which costs what an insertion
/// costs anywhere else in the table.
pub(crate) fn matrix_for(query: &[Letter], max_depth: usize, e: &ErrorValues) -> ErrorMatrix {
    ErrorMatrix::new(
        max_depth + 1,
        query.len() + 1,
        e.insertion_error(),
        e.start_insertion_error(query.len()),
    )
}

/// Fill row `depth` for indexed letter `letter`, whose predecessor in the
/// indexed word is `previous`.
///
/// Each cell takes the cheapest of: skipping a query letter, skipping an
/// indexed letter (cheaper past the end of the query in substring mode),
/// substituting, or swapping two adjacent letters. Sums saturate at
/// `i32::MAX`, so huge custom costs only ever mean "too far".
#[inline]
pub(crate) fn fill_row(
    em: &mut ErrorMatrix,
    query: &[Letter],
    letter: Letter,
    previous: Option<Letter>,
    depth: usize,
    e: &ErrorValues,
) {
    let last = query.len();
    for i in 1..=last {
        let insert = em.get(depth, i - 1).saturating_add(e.insertion_error());
        let delete_cost = if i >= last {
            e.end_deletion_error()
        } else {
            e.deletion_error()
        };
        let delete = em.get(depth - 1, i).saturating_add(delete_cost);
        let substitute = em
            .get(depth - 1, i - 1)
            .saturating_add(e.substitute_error(query[i - 1], letter));

        let mut best = insert.min(delete).min(substitute);
        if i > 1 && depth > 1 && previous == Some(query[i - 1]) && query[i - 2] == letter {
            best = best.min(em.get(depth - 2, i - 2).saturating_add(e.transpose_error()));
        }
        em.set(depth, i, best);
    }
}
