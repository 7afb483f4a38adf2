// Dense edit-distance matrix and backtracking

use crate::alignment::EditOp;

/// Full dynamic-programming table for two sequences.
///
/// Cell `(i, j)` holds the minimum number of insertions, deletions and
/// substitutions turning `reference[..i]` into `candidate[..j]`. Every
/// operation costs 1 and a match costs 0. The whole table is retained
/// because the word-level annotation is reconstructed from it.
///
/// Cells are stored row-major in a single `Vec`; row `i` spans
/// `cells[i * cols..(i + 1) * cols]`.
#[derive(Debug, Clone)]
pub struct EditMatrix<'a, T> {
    reference: &'a [T],
    candidate: &'a [T],
    cells: Vec<usize>,
    cols: usize,
}

impl<'a, T: PartialEq> EditMatrix<'a, T> {
    /// Fill the table for `reference` against `candidate`.
    ///
    /// O(n * m) time and space.
    pub fn build(reference: &'a [T], candidate: &'a [T]) -> Self {
        let rows = reference.len() + 1;
        let cols = candidate.len() + 1;
        let mut cells = vec![0usize; rows * cols];

        // Base cases: deleting i tokens / inserting j tokens.
        for (i, row) in cells.chunks_exact_mut(cols).enumerate() {
            row[0] = i;
        }
        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..rows {
            let (done, rest) = cells.split_at_mut(i * cols);
            let prev = &done[(i - 1) * cols..];
            let curr = &mut rest[..cols];
            let r = &reference[i - 1];
            for j in 1..cols {
                let cost = usize::from(*r != candidate[j - 1]);
                curr[j] = (prev[j] + 1)
                    .min(curr[j - 1] + 1)
                    .min(prev[j - 1] + cost);
            }
        }

        Self {
            reference,
            candidate,
            cells,
            cols,
        }
    }

    /// Number of rows, `reference.len() + 1`.
    pub fn rows(&self) -> usize {
        self.reference.len() + 1
    }

    /// Number of columns, `candidate.len() + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(j < self.cols, "column {j} out of bounds");
        self.cells[i * self.cols + j]
    }

    /// The edit distance: the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.get(self.reference.len(), self.candidate.len())
    }

    /// Recover one optimal edit path, in reading order.
    ///
    /// Walks from `(n, m)` back to `(0, 0)`. When several predecessors
    /// achieve the cell value, the diagonal step (match or substitution)
    /// wins, then deletion, then insertion. This keeps the path as
    /// diagonal as possible and makes it deterministic.
    pub fn backtrack(&self) -> Vec<EditOp> {
        let mut i = self.reference.len();
        let mut j = self.candidate.len();
        let mut ops = Vec::with_capacity(i.max(j));

        while i > 0 || j > 0 {
            let here = self.get(i, j);

            if i > 0 && j > 0 {
                let same = self.reference[i - 1] == self.candidate[j - 1];
                if here == self.get(i - 1, j - 1) + usize::from(!same) {
                    ops.push(if same {
                        EditOp::Match {
                            reference: i - 1,
                            candidate: j - 1,
                        }
                    } else {
                        EditOp::Substitute {
                            reference: i - 1,
                            candidate: j - 1,
                        }
                    });
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }

            if i > 0 && here == self.get(i - 1, j) + 1 {
                ops.push(EditOp::Delete { reference: i - 1 });
                i -= 1;
                continue;
            }

            // Only insertion can remain: the cell is the minimum of its
            // three predecessors and row 0 is all insertions.
            debug_assert!(j > 0 && here == self.get(i, j - 1) + 1);
            ops.push(EditOp::Insert { candidate: j - 1 });
            j -= 1;
        }

        ops.reverse();
        ops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<&str> {
        s.split_whitespace().collect()
    }

    #[test]
    fn base_row_and_column() {
        let r = words("a b c");
        let c = words("x y");
        let m = EditMatrix::build(&r, &c);
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 3);
        for i in 0..m.rows() {
            assert_eq!(m.get(i, 0), i);
        }
        for j in 0..m.cols() {
            assert_eq!(m.get(0, j), j);
        }
    }

    #[test]
    fn classic_character_distance() {
        let r: Vec<char> = "kitten".chars().collect();
        let c: Vec<char> = "sitting".chars().collect();
        assert_eq!(EditMatrix::build(&r, &c).distance(), 3);
    }

    #[test]
    fn cells_respect_bounds() {
        let r = words("the quick brown fox jumps");
        let c = words("a quick fox jumped over");
        let m = EditMatrix::build(&r, &c);
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                let v = m.get(i, j);
                assert!(v >= i.abs_diff(j), "cell ({i},{j}) = {v}");
                assert!(v <= i.max(j), "cell ({i},{j}) = {v}");
            }
        }
    }

    #[test]
    fn empty_inputs() {
        let empty: Vec<&str> = Vec::new();
        let r = words("hello");
        assert_eq!(EditMatrix::build(&empty, &empty).distance(), 0);
        assert_eq!(EditMatrix::build(&r, &empty).distance(), 1);
        assert_eq!(EditMatrix::build(&empty, &r).distance(), 1);
        assert!(EditMatrix::build(&empty, &empty).backtrack().is_empty());
    }

    #[test]
    fn backtrack_substitution() {
        let r = words("good morning");
        let c = words("good evening");
        let ops = EditMatrix::build(&r, &c).backtrack();
        assert_eq!(
            ops,
            vec![
                EditOp::Match {
                    reference: 0,
                    candidate: 0
                },
                EditOp::Substitute {
                    reference: 1,
                    candidate: 1
                },
            ]
        );
    }

    #[test]
    fn backtrack_missing_word() {
        let r = words("this is a test");
        let c = words("this is test");
        let ops = EditMatrix::build(&r, &c).backtrack();
        assert_eq!(
            ops,
            vec![
                EditOp::Match {
                    reference: 0,
                    candidate: 0
                },
                EditOp::Match {
                    reference: 1,
                    candidate: 1
                },
                EditOp::Delete { reference: 2 },
                EditOp::Match {
                    reference: 3,
                    candidate: 2
                },
            ]
        );
    }

    #[test]
    fn backtrack_prefers_deletion_over_insertion() {
        let r = words("a b a");
        let c = words("b a b");
        let ops = EditMatrix::build(&r, &c).backtrack();
        // At (3, 3) deleting the last "a" and inserting the last "b" both
        // cost 2; deletion is taken.
        assert_eq!(
            ops,
            vec![
                EditOp::Insert { candidate: 0 },
                EditOp::Match {
                    reference: 0,
                    candidate: 1
                },
                EditOp::Match {
                    reference: 1,
                    candidate: 2
                },
                EditOp::Delete { reference: 2 },
            ]
        );
    }

    #[test]
    fn backtrack_extra_word() {
        let r = words("good morning");
        let c = words("good good morning");
        let ops = EditMatrix::build(&r, &c).backtrack();
        // Walking back from the end, the diagonal step keeps pairing, so
        // the second "good" is aligned and the first one is extra.
        assert_eq!(
            ops,
            vec![
                EditOp::Insert { candidate: 0 },
                EditOp::Match {
                    reference: 0,
                    candidate: 1
                },
                EditOp::Match {
                    reference: 1,
                    candidate: 2
                },
            ]
        );
    }

    #[test]
    fn backtrack_prefers_diagonal_on_ties() {
        // "a b" -> "b a": distance 2 is reachable by two substitutions or
        // by a delete + insert pair. The diagonal path must be chosen.
        let r = words("a b");
        let c = words("b a");
        let ops = EditMatrix::build(&r, &c).backtrack();
        assert_eq!(
            ops,
            vec![
                EditOp::Substitute {
                    reference: 0,
                    candidate: 0
                },
                EditOp::Substitute {
                    reference: 1,
                    candidate: 1
                },
            ]
        );
    }

    #[test]
    fn backtrack_cost_equals_distance() {
        let r = words("i like to code in rust");
        let c = words("i love coding rust every day");
        let m = EditMatrix::build(&r, &c);
        let cost = m
            .backtrack()
            .iter()
            .filter(|op| !matches!(op, EditOp::Match { .. }))
            .count();
        assert_eq!(cost, m.distance());
    }
}
