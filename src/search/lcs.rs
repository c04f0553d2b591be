//! Similarity Scoring using Longest Common Subsequence
//!
//! Scores a reference text against a query by the length of their longest
//! common subsequence, normalized by the reference length.

use serde::Serialize;

/// Score of one text field against the query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldScore {
    /// LCS length divided by the reference length, in [0, 1]
    pub score: f64,
    /// One concrete longest common subsequence
    pub matched_sequence: String,
    /// Char indices in the reference the subsequence was taken from
    pub matched_positions: Vec<usize>,
}

impl FieldScore {
    /// True when every char of the reference was matched
    pub fn is_perfect(&self) -> bool {
        self.score == 1.0
    }
}

/// Score `reference` against `query`.
///
/// Both strings are expected to be case-folded already. Lengths are counted
/// in chars, not bytes. An empty reference scores 0.
pub fn score(reference: &str, query: &str) -> FieldScore {
    let reference: Vec<char> = reference.chars().collect();
    let query: Vec<char> = query.chars().collect();

    if reference.is_empty() || query.is_empty() {
        return FieldScore::default();
    }

    let matrix = LcsMatrix::build(&reference, &query);
    let matched_positions = matrix.traceback(&reference, &query);
    let matched_sequence: String = matched_positions.iter().map(|&i| reference[i]).collect();

    FieldScore {
        score: matched_positions.len() as f64 / reference.len() as f64,
        matched_sequence,
        matched_positions,
    }
}

/// Length of the longest common subsequence of `a` and `b`.
///
/// Keeps only two rows of the table since no traceback is needed.
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ch_a in &a {
        for (j, &ch_b) in b.iter().enumerate() {
            curr[j + 1] = if ch_a == ch_b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Full (n+1) x (m+1) dynamic programming table, stored row-major
struct LcsMatrix {
    cells: Vec<usize>,
    width: usize,
}

impl LcsMatrix {
    fn build(reference: &[char], query: &[char]) -> Self {
        let height = reference.len() + 1;
        let width = query.len() + 1;
        let mut cells = vec![0usize; height * width];

        for row in 1..height {
            for col in 1..width {
                cells[row * width + col] = if reference[row - 1] == query[col - 1] {
                    cells[(row - 1) * width + col - 1] + 1
                } else {
                    cells[row * width + col - 1].max(cells[(row - 1) * width + col])
                };
            }
        }

        Self { cells, width }
    }

    fn at(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.width + col]
    }

    /// Walk back from the bottom-right corner, returning matched reference
    /// indices in ascending order.
    ///
    /// On a mismatch the reference index steps back only when that keeps a
    /// strictly longer subsequence; ties step the query index.
    fn traceback(&self, reference: &[char], query: &[char]) -> Vec<usize> {
        let mut row = reference.len();
        let mut col = query.len();
        let mut positions = Vec::with_capacity(self.at(row, col));

        while row > 0 && col > 0 {
            if reference[row - 1] == query[col - 1] {
                positions.push(row - 1);
                row -= 1;
                col -= 1;
            } else if self.at(row - 1, col) > self.at(row, col - 1) {
                row -= 1;
            } else {
                col -= 1;
            }
        }

        positions.reverse();
        positions
    }
}
