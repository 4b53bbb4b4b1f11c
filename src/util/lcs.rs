//! Longest common subsequence over token sequences.
//!
//! The engine returns the index pairs that realize one longest common
//! subsequence, not just its length. When the two "skip" branches tie, the
//! branch that drops an element of `x` wins, so the alignment is fully
//! deterministic for a given pair of inputs.
//!
//! Every call owns its table; nothing is cached between calls, so the
//! function is safe to run concurrently on unrelated inputs.

/// A pair of strictly increasing index sequences realizing a common
/// subsequence of `x` (indices in `left`) and `y` (indices in `right`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Indices into the first sequence.
    pub left: Vec<usize>,
    /// Indices into the second sequence, pairwise matched with `left`.
    pub right: Vec<usize>,
}

impl Alignment {
    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Whether nothing was matched.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Iterate over `(left, right)` index pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left.iter().copied().zip(self.right.iter().copied())
    }
}

/// Number of cells the dynamic-programming table needs for inputs of the
/// given lengths.
pub fn alignment_cells(x_len: usize, y_len: usize) -> usize {
    x_len.saturating_add(1).saturating_mul(y_len.saturating_add(1))
}

/// Length table for one invocation, stored row-major as `(l+1) x (k+1)`.
struct LcsTable {
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn fill<T: PartialEq>(x: &[T], y: &[T]) -> Self {
        let cols = y.len() + 1;
        let mut cells = vec![0u32; (x.len() + 1) * cols];

        for i in 1..=x.len() {
            for j in 1..=y.len() {
                let value = if x[i - 1] == y[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
                cells[i * cols + j] = value;
            }
        }

        LcsTable { cols, cells }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }
}

/// Compute one longest common subsequence of `x` and `y`.
///
/// Elements are compared with exact equality. Empty input on either side
/// yields an empty alignment.
///
/// # Examples
///
/// ```
/// use concordance::util::lcs::longest_common_subsequence;
///
/// let x = ["a", "b", "c", "d"];
/// let y = ["b", "x", "d"];
/// let alignment = longest_common_subsequence(&x, &y);
/// assert_eq!(alignment.left, vec![1, 3]);
/// assert_eq!(alignment.right, vec![0, 2]);
/// ```
pub fn longest_common_subsequence<T: PartialEq>(x: &[T], y: &[T]) -> Alignment {
    if x.is_empty() || y.is_empty() {
        return Alignment::default();
    }

    let table = LcsTable::fill(x, y);
    let length = table.get(x.len(), y.len()) as usize;
    let mut left = Vec::with_capacity(length);
    let mut right = Vec::with_capacity(length);

    // Walk back from (l, k) taking the same branch the top-down recurrence
    // would take at every cell.
    let (mut i, mut j) = (x.len(), y.len());
    while i > 0 && j > 0 {
        if x[i - 1] == y[j - 1] {
            left.push(i - 1);
            right.push(j - 1);
            i -= 1;
            j -= 1;
        } else if table.get(i - 1, j) >= table.get(i, j - 1) {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    left.reverse();
    right.reverse();
    Alignment { left, right }
}
