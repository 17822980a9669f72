//! Batch ranking: subsequence filter, DP scoring, stable descending sort

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::engine::Matcher;
use super::matrix::MatchBuffers;
use super::subsequence::has_match;
use crate::error::Result;

#[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
use rayon::prelude::*;

/// A surviving candidate: its index in the input list and its score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntry {
    pub index: usize,
    pub score: f64,
}

impl Matcher {
    /// Keep the candidates `needle` is a subsequence of, best score first.
    ///
    /// An empty needle passes every candidate through in input order with
    /// score `0.0`. Equal scores keep their input order. Candidates beyond the
    /// size limits survive with `SCORE_MIN`.
    pub fn filter_sort<S>(
        &self,
        needle: impl AsRef<[u8]>,
        candidates: &[S],
    ) -> Result<Vec<ScoredEntry>>
    where
        S: AsRef<[u8]> + Sync,
    {
        let needle = needle.as_ref();

        let mut entries = Vec::new();
        entries.try_reserve_exact(candidates.len())?;

        if needle.is_empty() {
            entries.extend((0..candidates.len()).map(|index| ScoredEntry { index, score: 0.0 }));
            return Ok(entries);
        }

        self.score_candidates(needle, candidates, &mut entries)?;

        entries.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.index.cmp(&b.index))
        });

        debug!(
            candidates = candidates.len(),
            matched = entries.len(),
            "filtered and ranked candidates"
        );
        Ok(entries)
    }

    /// [`Matcher::filter_sort`] keeping at most `limit` entries.
    pub fn filter_sort_limit<S>(
        &self,
        needle: impl AsRef<[u8]>,
        candidates: &[S],
        limit: usize,
    ) -> Result<Vec<ScoredEntry>>
    where
        S: AsRef<[u8]> + Sync,
    {
        let mut entries = self.filter_sort(needle, candidates)?;
        entries.truncate(limit);
        Ok(entries)
    }

    /// Score candidates - parallel on native, sequential otherwise
    #[cfg(all(not(target_arch = "wasm32"), feature = "parallel"))]
    fn score_candidates<S>(
        &self,
        needle: &[u8],
        candidates: &[S],
        entries: &mut Vec<ScoredEntry>,
    ) -> Result<()>
    where
        S: AsRef<[u8]> + Sync,
    {
        if candidates.len() < self.config().parallel_threshold {
            return self.score_sequential(needle, candidates, entries);
        }

        let scored: Vec<ScoredEntry> = candidates
            .par_iter()
            .enumerate()
            .filter(|(_, candidate)| has_match(needle, candidate.as_ref()))
            .map_init(MatchBuffers::new, |buffers, (index, candidate)| {
                self.score_in(buffers, needle, candidate)
                    .map(|score| ScoredEntry { index, score })
            })
            .collect::<Result<_>>()?;
        entries.extend(scored);
        Ok(())
    }

    /// Sequential scoring (WASM or when parallel feature disabled)
    #[cfg(any(target_arch = "wasm32", not(feature = "parallel")))]
    fn score_candidates<S>(
        &self,
        needle: &[u8],
        candidates: &[S],
        entries: &mut Vec<ScoredEntry>,
    ) -> Result<()>
    where
        S: AsRef<[u8]> + Sync,
    {
        self.score_sequential(needle, candidates, entries)
    }

    fn score_sequential<S>(
        &self,
        needle: &[u8],
        candidates: &[S],
        entries: &mut Vec<ScoredEntry>,
    ) -> Result<()>
    where
        S: AsRef<[u8]>,
    {
        let mut buffers = MatchBuffers::new();
        for (index, candidate) in candidates.iter().enumerate() {
            let haystack = candidate.as_ref();
            if !has_match(needle, haystack) {
                trace!(index, "candidate rejected by subsequence check");
                continue;
            }
            let score = self.score_in(&mut buffers, needle, haystack)?;
            entries.push(ScoredEntry { index, score });
        }
        Ok(())
    }
}
