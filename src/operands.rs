//! File access for the two operand roles. The reference operand (file2) is
//! read whole into memory so the membership lookup can borrow its line
//! slices; the streamed operand (file1) is read a line at a time, so the
//! streamed side uses constant memory no matter how large the file is.
use anyhow::{Context, Result};
use bstr::io::BufReadExt;
use std::{
    fs,
    fs::File,
    io,
    io::BufReader,
    path::{Path, PathBuf},
};

/// Returns the entire contents of the reference operand.
pub(crate) fn contents_of(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Can't read file: {}", path.display()))
}

/// A `StreamedOperand` is a one-shot, forward-only line reader. We keep the
/// `path` field around to improve error messages.
pub(crate) struct StreamedOperand {
    path: PathBuf,
    reader: BufReader<File>,
}

/// Opens `path` for line-by-line reading.
pub(crate) fn streamed_operand(path: &Path) -> Result<StreamedOperand> {
    let f = File::open(path).with_context(|| format!("Can't open file: {}", path.display()))?;
    Ok(StreamedOperand { path: path.to_owned(), reader: BufReader::with_capacity(32 * 1024, f) })
}

impl StreamedOperand {
    /// A convenience wrapper around `bstr::for_byte_line`. Calls the given
    /// closure once per line, with the line terminator already stripped. The
    /// first error — a read error, or an output error returned by the
    /// closure — aborts the pass; the lines after it are never visited.
    pub(crate) fn for_byte_line<F>(mut self, mut for_each_line: F) -> Result<()>
    where
        F: FnMut(&[u8]) -> io::Result<()>,
    {
        let complaint = format!("Error streaming file: {}", self.path.display());
        self.reader
            .for_byte_line(|line| {
                for_each_line(line)?;
                Ok(true)
            })
            .context(complaint)?;
        Ok(())
    }
}
