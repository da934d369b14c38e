//! Minimal edit distance and its edit script.
//!
//! Wagner–Fischer dynamic programming over a `(m + 1) × (n + 1)` cost table,
//! followed by a backtrace from `(m, n)` to `(0, 0)`. Ties are broken in a
//! fixed order (diagonal, then deletion, then insertion) so identical inputs
//! always produce identical scripts.
//!
//! Time and space are `O(m·n)`. That is the capacity limit of the engine:
//! tables larger than [`LARGE_TABLE_CELLS`] are reported with a warning,
//! never refused.

use crate::diff::model::{Edit, EditScript};

/// Cost-table size above which a capacity warning is logged.
pub const LARGE_TABLE_CELLS: usize = 4_000_000;

/// Full cost table, stored row-major.
struct CostTable {
    width: usize,
    cells: Vec<usize>,
}

impl CostTable {
    fn build<T, F>(origin: &[T], destination: &[T], equals: &F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let width = destination.len() + 1;
        let mut cells = vec![0; (origin.len() + 1) * width];

        for (j, cell) in cells.iter_mut().take(width).enumerate() {
            *cell = j;
        }

        for (i, o) in origin.iter().enumerate() {
            let above = i * width;
            let row = above + width;
            cells[row] = i + 1;
            for (j, d) in destination.iter().enumerate() {
                let substitution = cells[above + j] + usize::from(!equals(o, d));
                let deletion = cells[above + j + 1] + 1;
                let insertion = cells[row + j] + 1;
                cells[row + j + 1] = substitution.min(deletion).min(insertion);
            }
        }

        Self { width, cells }
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.width + j]
    }

    fn distance(&self) -> usize {
        self.cells.last().copied().unwrap_or(0)
    }

    fn backtrace<T, F>(&self, origin: &[T], destination: &[T], equals: &F) -> EditScript<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        let mut edits = Vec::with_capacity(self.distance());
        let (mut i, mut j) = (origin.len(), destination.len());

        while i > 0 || j > 0 {
            let here = self.get(i, j);

            if i > 0 && j > 0 {
                let same = equals(&origin[i - 1], &destination[j - 1]);
                if here == self.get(i - 1, j - 1) + usize::from(!same) {
                    if !same {
                        edits.push(Edit::substitution(
                            j - 1,
                            origin[i - 1].clone(),
                            destination[j - 1].clone(),
                        ));
                    }
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }

            if i > 0 && here == self.get(i - 1, j) + 1 {
                edits.push(Edit::deletion(i - 1, origin[i - 1].clone()));
                i -= 1;
            } else {
                edits.push(Edit::insertion(j - 1, destination[j - 1].clone()));
                j -= 1;
            }
        }

        edits.reverse();
        edits
    }
}

/// Compute the raw minimal edit script (deletions, insertions and
/// substitutions only) between `origin` and `destination`.
///
/// Moves are assigned afterwards by [`detect_moves_by`](crate::diff::moves::detect_moves_by).
pub fn edit_script_by<T, F>(origin: &[T], destination: &[T], equals: F) -> EditScript<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let cells = (origin.len() + 1).saturating_mul(destination.len() + 1);
    if cells > LARGE_TABLE_CELLS {
        tracing::warn!(
            origin_len = origin.len(),
            destination_len = destination.len(),
            cells,
            "edit distance table exceeds {} cells",
            LARGE_TABLE_CELLS
        );
    }

    let table = CostTable::build(origin, destination, &equals);
    let edits = table.backtrace(origin, destination, &equals);

    tracing::debug!(
        origin_len = origin.len(),
        destination_len = destination.len(),
        distance = table.distance(),
        edit_count = edits.len(),
        "computed edit script"
    );

    edits
}

/// Minimal number of deletions, insertions and substitutions turning
/// `origin` into `destination`, under a caller-supplied equality.
///
/// Keeps only two rows of the cost table.
pub fn edit_distance_by<T, F>(origin: &[T], destination: &[T], equals: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mut previous: Vec<usize> = (0..=destination.len()).collect();
    let mut current = vec![0; destination.len() + 1];

    for (i, o) in origin.iter().enumerate() {
        current[0] = i + 1;
        for (j, d) in destination.iter().enumerate() {
            let substitution = previous[j] + usize::from(!equals(o, d));
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[destination.len()]
}

/// Minimal edit distance under `PartialEq`.
pub fn edit_distance<T: PartialEq>(origin: &[T], destination: &[T]) -> usize {
    edit_distance_by(origin, destination, |a, b| a == b)
}
