//! Houses the `calculate` function
//!
use anyhow::Result;
use std::io;
use std::path::Path;

use crate::args::OpName;
use crate::operands::{contents_of, streamed_operand};
use crate::set::reference_set;

/// Calculates and prints the set operation named by `operation`. Each file is
/// treated as a set of lines:
///
/// * `OpName::Intersect` prints the lines of `first` that also occur in `second`,
/// * `OpName::Diff` prints the lines of `first` that occur nowhere in `second`.
///
/// Lines print in the order they appear in `first`, once per occurrence, so a
/// line `first` repeats is printed (or withheld) each time it appears. Each
/// selected line goes to `out` as soon as it is read; only the membership
/// lookup for `second` is held in memory.
pub fn calculate(
    operation: OpName,
    first: &Path,
    second: &Path,
    mut out: impl io::Write,
) -> Result<()> {
    let reference_contents = contents_of(second)?;
    let set = reference_set(&reference_contents);
    let wanted = operation == OpName::Intersect;

    streamed_operand(first)?.for_byte_line(|line| {
        if set.contains(line) == wanted {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
        Ok(())
    })?;
    out.flush()?;
    Ok(())
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};
    use std::path::PathBuf;

    fn calc(operation: OpName, first: &[u8], second: &[u8]) -> String {
        let temp_dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for (name, contents) in [("first", first), ("second", second)] {
            let op = temp_dir.child(name);
            op.write_binary(contents).unwrap();
            paths.push(PathBuf::from(op.path()));
        }

        let mut answer = Vec::new();
        calculate(operation, &paths[0], &paths[1], &mut answer).unwrap();
        String::from_utf8(answer).unwrap()
    }

    use self::OpName::*;

    #[test]
    fn intersect_keeps_lines_of_the_first_file_present_in_the_second() {
        assert_eq!(calc(Intersect, b"a\nb\nc\n", b"b\nc\nd\n"), "b\nc\n");
    }

    #[test]
    fn diff_keeps_lines_of_the_first_file_absent_from_the_second() {
        assert_eq!(calc(Diff, b"a\nb\nc\n", b"b\nc\nd\n"), "a\n");
    }

    #[test]
    fn every_line_of_the_first_file_goes_to_exactly_one_operation() {
        let first = b"pear\nplum\npear\nquince\nfig\n";
        let second = b"plum\nfig\nfig\nmedlar\n";
        assert_eq!(calc(Intersect, first, second), "plum\nfig\n");
        assert_eq!(calc(Diff, first, second), "pear\npear\nquince\n");
    }

    #[test]
    fn output_order_follows_the_first_file_not_the_second() {
        assert_eq!(calc(Intersect, b"c\na\nb\n", b"a\nb\nc\n"), "c\na\nb\n");
        assert_eq!(calc(Diff, b"c\na\nb\n", b"z\n"), "c\na\nb\n");
    }

    #[test]
    fn repeated_lines_in_the_first_file_print_once_per_occurrence() {
        assert_eq!(calc(Intersect, b"x\ny\nx\nx\n", b"x\n"), "x\nx\nx\n");
        assert_eq!(calc(Diff, b"x\ny\nx\nx\n", b"x\n"), "y\n");
    }

    #[test]
    fn repeated_lines_in_the_second_file_change_nothing() {
        assert_eq!(calc(Intersect, b"a\nb\n", b"b\nb\nb\n"), "b\n");
        assert_eq!(calc(Diff, b"a\nb\n", b"b\nb\nb\n"), "a\n");
    }

    #[test]
    fn an_empty_first_file_produces_no_output() {
        assert_eq!(calc(Intersect, b"", b"a\nb\n"), "");
        assert_eq!(calc(Diff, b"", b"a\nb\n"), "");
    }

    #[test]
    fn an_empty_second_file_keeps_nothing_or_everything() {
        assert_eq!(calc(Intersect, b"a\nb\n", b""), "");
        assert_eq!(calc(Diff, b"a\nb\n", b""), "a\nb\n");
    }

    #[test]
    fn crlf_lines_match_lf_lines_in_either_file() {
        assert_eq!(calc(Intersect, b"a\r\nb\r\n", b"a\n"), "a\n");
        assert_eq!(calc(Intersect, b"a\nb\n", b"a\r\n"), "a\n");
    }

    #[test]
    fn a_final_line_without_a_terminator_still_counts() {
        assert_eq!(calc(Intersect, b"a\nb", b"b\n"), "b\n");
        assert_eq!(calc(Diff, b"a\nb", b"a\n"), "b\n");
    }

    #[test]
    fn a_missing_first_file_is_an_error_and_prints_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let second = temp_dir.child("second");
        second.write_binary(b"a\n").unwrap();
        let missing = temp_dir.child("missing");

        let mut answer = Vec::new();
        let result = calculate(Intersect, missing.path(), second.path(), &mut answer);
        assert!(result.is_err());
        assert!(answer.is_empty());
    }

    #[test]
    fn an_unreadable_second_file_fails_even_when_the_first_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.child("first");
        first.write_binary(b"").unwrap();
        let missing = temp_dir.child("missing");

        let mut answer = Vec::new();
        let result = calculate(Diff, first.path(), missing.path(), &mut answer);
        assert!(result.is_err());
        assert!(answer.is_empty());
    }
}
