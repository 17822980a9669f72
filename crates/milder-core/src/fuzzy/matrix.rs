//! DP working set shared by the scorer and the position tracer
//!
//! `D[i][j]`: best score of an alignment whose needle byte `i` sits at haystack
//! byte `j`. `M[i][j]`: best score of any alignment of `needle[..=i]` within
//! `haystack[..=j]`, carrying gap penalties forward along the row.
//! Cells with no valid alignment hold negative infinity.

use super::bonus::compute_bonus;
use super::config::{Limits, ScoringConfig};
use super::subsequence::chars_match;
use crate::error::Result;

/// Score of a cell no alignment can reach.
pub(crate) const UNREACHABLE: f64 = f64::NEG_INFINITY;

/// Reusable DP buffers: the bonus row and the flat `D`/`M` matrices.
///
/// Buffers grow on demand with fallible reservation and are never shrunk, so
/// one instance can serve many calls. Keep one per thread.
#[derive(Debug, Default, Clone)]
pub struct MatchBuffers {
    bonus: Vec<f64>,
    d: Vec<f64>,
    m: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl MatchBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocate for the largest input `limits` admits.
    pub fn with_limits(limits: &Limits) -> Result<Self> {
        let mut buffers = Self::new();
        buffers.prepare(limits.max_needle_len, limits.max_haystack_len)?;
        Ok(buffers)
    }

    /// Number of matrix cells currently allocated.
    pub fn capacity(&self) -> usize {
        self.d.len()
    }

    fn prepare(&mut self, rows: usize, cols: usize) -> Result<()> {
        let cells = rows.saturating_mul(cols);
        grow(&mut self.bonus, cols)?;
        grow(&mut self.d, cells)?;
        grow(&mut self.m, cells)?;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        i * self.cols + j
    }

    #[inline]
    pub(crate) fn d(&self, i: usize, j: usize) -> f64 {
        self.d[self.idx(i, j)]
    }

    #[inline]
    pub(crate) fn m(&self, i: usize, j: usize) -> f64 {
        self.m[self.idx(i, j)]
    }

    /// Run the DP for `needle` against `haystack`.
    ///
    /// Callers check emptiness and size caps first; both inputs are non-empty.
    pub(crate) fn fill(
        &mut self,
        needle: &[u8],
        haystack: &[u8],
        scoring: &ScoringConfig,
    ) -> Result<()> {
        let (n, m) = (needle.len(), haystack.len());
        debug_assert!(n > 0 && m > 0);
        self.prepare(n, m)?;

        for j in 0..m {
            self.bonus[j] = compute_bonus(haystack, j, scoring);
        }

        for (i, &nc) in needle.iter().enumerate() {
            let gap = if i == n - 1 {
                scoring.gap_trailing
            } else {
                scoring.gap_inner
            };
            let mut prev_score = UNREACHABLE;

            for (j, &hc) in haystack.iter().enumerate() {
                let cell = i * m + j;
                let carried = prev_score + gap;

                if chars_match(nc, hc) {
                    let score = if i == 0 {
                        j as f64 * scoring.gap_leading + self.bonus[j]
                    } else if j > 0 {
                        let diag = cell - m - 1;
                        let consecutive = self.d[diag] + scoring.match_consecutive;
                        let fresh = self.m[diag] + self.bonus[j];
                        consecutive.max(fresh)
                    } else {
                        UNREACHABLE
                    };
                    self.d[cell] = score;
                    self.m[cell] = score.max(carried);
                } else {
                    self.d[cell] = UNREACHABLE;
                    self.m[cell] = carried;
                }

                prev_score = self.m[cell];
            }
        }
        Ok(())
    }

    /// `M` in the bottom-right cell of the last fill.
    #[inline]
    pub(crate) fn final_score(&self) -> f64 {
        self.m(self.rows - 1, self.cols - 1)
    }
}

fn grow(buf: &mut Vec<f64>, len: usize) -> Result<()> {
    if buf.len() < len {
        buf.try_reserve_exact(len - buf.len())?;
        buf.resize(len, UNREACHABLE);
    }
    Ok(())
}
