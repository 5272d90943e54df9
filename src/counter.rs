use crate::shared_types::WordCount;

/// ASCII separators only: space, tab, carriage return, line feed.
#[inline]
pub(crate) fn is_white(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Counts maximal runs of non-whitespace bytes in `input`.
///
/// Empty and all-whitespace input both count as zero words.
pub(crate) fn word_count(input: &[u8]) -> WordCount {
    let Some(start) = input.iter().position(|&b| !is_white(b)) else {
        return 0;
    };
    let end = input.iter().rposition(|&b| !is_white(b)).unwrap_or(start);

    let mut wc = 0;
    let mut last_white = true;
    for &b in &input[start..=end] {
        let white = is_white(b);
        if !white && last_white {
            wc += 1;
        }
        last_white = white;
    }
    wc
}
