// src/integer_math/candidate_range.rs

use num::{BigInt, Integer};

pub struct CandidateRange;

impl CandidateRange {
    /// Splits the odd candidates of [from, to] (inclusive, `from` odd) into
    /// at most `parts` contiguous chunks of at least `min_chunk` candidates
    /// each.
    ///
    /// Returns inclusive (low, high) bounds in ascending order. Every low
    /// bound is odd, chunks are disjoint, and together they cover every odd
    /// value in [from, to].
    pub fn partition(
        from: &BigInt,
        to: &BigInt,
        parts: usize,
        min_chunk: u64,
    ) -> Vec<(BigInt, BigInt)> {
        debug_assert!(from.is_odd());
        if from > to {
            return Vec::new();
        }

        let parts = parts.max(1) as u64;
        let candidates: BigInt = (to - from) / 2 + 1;
        let per_chunk = std::cmp::max(
            (&candidates + parts - 1) / parts,
            BigInt::from(min_chunk.max(1)),
        );
        // numeric span covered by one chunk of odd candidates
        let width: BigInt = &per_chunk * 2;

        let mut chunks = Vec::new();
        let mut low = from.clone();
        while &low <= to {
            let mut high = &low + &width - 2;
            if &high > to {
                high = to.clone();
            }
            chunks.push((low.clone(), high.clone()));
            low = high + 2;
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::ToPrimitive;

    fn partition_u64(from: u64, to: u64, parts: usize, min_chunk: u64) -> Vec<(u64, u64)> {
        CandidateRange::partition(&BigInt::from(from), &BigInt::from(to), parts, min_chunk)
            .into_iter()
            .map(|(lo, hi)| (lo.to_u64().unwrap(), hi.to_u64().unwrap()))
            .collect()
    }

    #[test]
    fn test_partition_into_even_chunks() {
        // 10 odd candidates in [3, 21] split 3 ways: 4 + 4 + 2
        let chunks = partition_u64(3, 21, 3, 1);
        assert_eq!(chunks, vec![(3, 9), (11, 17), (19, 21)]);
    }

    #[test]
    fn test_partition_respects_min_chunk() {
        let chunks = partition_u64(3, 21, 3, 100);
        assert_eq!(chunks, vec![(3, 21)]);
    }

    #[test]
    fn test_partition_covers_all_candidates() {
        let chunks = partition_u64(3, 999, 7, 8);
        let mut covered = Vec::new();
        for (lo, hi) in &chunks {
            assert!(lo % 2 == 1, "chunk low bound {} must be odd", lo);
            let mut candidate = *lo;
            while candidate <= *hi {
                covered.push(candidate);
                candidate += 2;
            }
        }
        let expected: Vec<u64> = (3..=999).step_by(2).collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_partition_single_candidate() {
        let chunks = partition_u64(3, 3, 4, 16);
        assert_eq!(chunks, vec![(3, 3)]);
    }

    #[test]
    fn test_partition_empty_range() {
        let chunks = CandidateRange::partition(&BigInt::from(5), &BigInt::from(4), 4, 16);
        assert!(chunks.is_empty());
    }
}
