//! Provides the `ReferenceSet` structure, the membership lookup built from
//! the contents of the second file operand.
use fxhash::FxHashSet;
use memchr::memchr;

/// A `ReferenceSet` is a set of lines, each line a slice borrowed from the
/// contents of the file the set was built from. Duplicate lines in the source
/// collapse to a single entry; membership is binary, and insertion order is
/// irrelevant because output order comes from the streamed operand.
pub(crate) struct ReferenceSet<'data> {
    lines: FxHashSet<&'data [u8]>,
}

/// Builds a `ReferenceSet` from `slice`, the full contents of a file. Each
/// line is entered with its trailing `\n` stripped, and a `\r` before that
/// `\n` stripped as well, so CRLF files compare equal to LF files. A final
/// line with no terminator still counts.
pub(crate) fn reference_set(mut slice: &[u8]) -> ReferenceSet {
    let mut lines = FxHashSet::default();
    while let Some(end) = memchr(b'\n', slice) {
        let (mut line, rest) = slice.split_at(end);
        slice = &rest[1..];
        if let Some(&maybe_cr) = line.last() {
            if maybe_cr == b'\r' {
                line = &line[..line.len() - 1];
            }
        }
        lines.insert(line);
    }
    if !slice.is_empty() {
        lines.insert(slice);
    }
    ReferenceSet { lines }
}

impl ReferenceSet<'_> {
    /// Is `line` one of the distinct lines of the source file?
    pub(crate) fn contains(&self, line: &[u8]) -> bool {
        self.lines.contains(line)
    }

    /// The number of distinct lines in the source file.
    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }
}
