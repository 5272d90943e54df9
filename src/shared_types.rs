/// Half-open byte range `[start, end)` into an input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ChunkRange {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl ChunkRange {
    pub(crate) fn len(&self) -> usize {
        self.end - self.start
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub(crate) type WordCount = u64;
