use std::cmp;
use std::num::NonZeroUsize;

use crate::counter::is_white;
use crate::shared_types::ChunkRange;

/// Splits `input` into at most `jobs` contiguous ranges.
///
/// Every range ends on a whitespace byte or at the end of the buffer, so no
/// word straddles two ranges. Empty ranges are dropped.
pub(crate) fn make_chunks(input: &[u8], jobs: NonZeroUsize) -> Vec<ChunkRange> {
    let jobs = jobs.get();
    let len = input.len();
    let size = len / jobs;
    if len == 0 {
        return Vec::new();
    }
    if size == 0 {
        return vec![ChunkRange { start: 0, end: len }];
    }

    let mut chunks = Vec::with_capacity(cmp::min(jobs, len));
    let mut last = 0;
    for i in 0..jobs {
        if last == len {
            break;
        }
        let start = last;
        let mut end = if i + 1 == jobs {
            len
        } else {
            cmp::min(start + size, len)
        };

        while end < len && !is_white(input[end - 1]) {
            end += 1;
        }

        let chunk = ChunkRange { start, end };
        if !chunk.is_empty() {
            chunks.push(chunk);
        }
        last = end;
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn jobs(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn assert_covers(input: &[u8], chunks: &[ChunkRange]) {
        let mut next = 0;
        for chunk in chunks {
            assert_eq!(chunk.start, next, "gap or overlap at {next}");
            assert!(chunk.start < chunk.end);
            next = chunk.end;
        }
        assert_eq!(next, input.len());
    }

    #[test]
    fn empty_input_has_no_chunks() {
        for n in 1..=8 {
            assert!(make_chunks(b"", jobs(n)).is_empty());
        }
    }

    #[test]
    fn single_job_is_whole_buffer() {
        let input = b"one two three";
        assert_eq!(
            make_chunks(input, jobs(1)),
            vec![ChunkRange { start: 0, end: input.len() }]
        );
    }

    #[test]
    fn pangram_in_three_chunks() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let chunks = make_chunks(input, jobs(3));
        assert_eq!(
            chunks,
            vec![
                ChunkRange { start: 0, end: 16 },
                ChunkRange { start: 16, end: 31 },
                ChunkRange { start: 31, end: 43 },
            ]
        );
        let rebuilt: Vec<u8> = chunks
            .iter()
            .flat_map(|c| input[c.start..c.end].iter().copied())
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn boundaries_never_split_words() {
        let input = format!("{} {}", "a".repeat(37), "b".repeat(53));
        let chunks = make_chunks(input.as_bytes(), jobs(4));
        assert_covers(input.as_bytes(), &chunks);
        for chunk in &chunks[..chunks.len() - 1] {
            assert!(is_white(input.as_bytes()[chunk.end - 1]));
        }
    }

    #[test]
    fn trailing_word_after_aligned_boundaries_is_covered() {
        // every interior target lands right after a space
        let input = b"ab ab ab c";
        let chunks = make_chunks(input, jobs(3));
        assert_covers(input, &chunks);
        assert_eq!(chunks.last().map(|c| c.end), Some(input.len()));
    }

    #[test]
    fn more_jobs_than_bytes() {
        let input = b"a b c";
        let chunks = make_chunks(input, jobs(16));
        assert_covers(input, &chunks);
        assert!(chunks.len() <= 16);
    }

    #[test]
    fn huge_job_count_on_short_buffer() {
        let input = b"hello world";
        assert_eq!(
            make_chunks(input, NonZeroUsize::MAX),
            vec![ChunkRange { start: 0, end: input.len() }]
        );
        assert_eq!(
            make_chunks(input, jobs(1 << 30)),
            vec![ChunkRange { start: 0, end: input.len() }]
        );
    }

    #[test]
    fn job_count_equal_to_length() {
        let input = b"a b c d";
        let chunks = make_chunks(input, jobs(input.len()));
        assert_covers(input, &chunks);
        assert_eq!(
            chunks,
            vec![
                ChunkRange { start: 0, end: 2 },
                ChunkRange { start: 2, end: 4 },
                ChunkRange { start: 4, end: 6 },
                ChunkRange { start: 6, end: 7 },
            ]
        );
    }

    proptest! {
        #[test]
        fn chunks_cover_buffer_exactly(input in proptest::collection::vec(
            prop_oneof![Just(b' '), Just(b'\n'), Just(b'\t'), Just(b'\r'), any::<u8>()],
            0..512,
        ), n in prop_oneof![1usize..=64, 64usize..=1 << 20]) {
            let chunks = make_chunks(&input, jobs(n));
            prop_assert!(chunks.len() <= n);
            let mut next = 0;
            for chunk in &chunks {
                prop_assert!(chunk.start < chunk.end);
                prop_assert_eq!(chunk.start, next);
                next = chunk.end;
            }
            prop_assert_eq!(next, input.len());
        }
    }

    proptest! {
        #[test]
        fn interior_boundaries_follow_whitespace(input in "[a-z \t\r\n]{0,300}", n in 1usize..=64) {
            let bytes = input.as_bytes();
            let chunks = make_chunks(bytes, jobs(n));
            for chunk in chunks.iter().filter(|c| c.end < bytes.len()) {
                prop_assert!(is_white(bytes[chunk.end - 1]),
                    "boundary {} splits a word", chunk.end);
            }
        }
    }
}
