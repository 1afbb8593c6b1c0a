//! Code to parse the command line using `clap`, validate the two file
//! operands, and name the requested relation.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

/// Returns the parsed and validated command line: the `Args` return value's
/// `op` field is the set operation desired, and `first` and `second` are the
/// two file operands, each checked to exist and not to be a directory. Any
/// validation failure is reported before a single byte of file content is
/// read.
pub fn parsed() -> Result<Args> {
    let parsed = CliArgs::parse();
    let (op, files) = match parsed.op {
        CliName::Intersection { files } => (OpName::Intersect, files),
        CliName::Difference { files } => (OpName::Diff, files),
    };
    let (first, second) = two_file_operands(files)?;
    Ok(Args { op, first, second })
}

/// The parsed and validated command line.
pub struct Args {
    /// `op` is the set operation requested
    pub op: OpName,
    /// `first` is the file whose lines are streamed through the membership test
    pub first: PathBuf,
    /// `second` is the file the membership lookup is built from
    pub second: PathBuf,
}

/// Name of the requested operation
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpName {
    /// Print the lines of the first file that also occur in the second
    Intersect,
    /// Print the lines of the first file that occur nowhere in the second
    Diff,
}

#[derive(Debug, Parser)]
#[command(name = "setop", about = "Perform set operations on files.")]
struct CliArgs {
    #[command(subcommand)]
    op: CliName,
}

#[derive(Debug, Subcommand)]
enum CliName {
    /// (A & B) - Output lines in both file1 and file2
    #[command(visible_alias = "intersect")]
    Intersection {
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },
    /// (A - B) - Output lines in file1 but not file2
    #[command(visible_alias = "diff")]
    Difference {
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

/// Both subcommands need exactly two operands; operands past the second are
/// ignored. Each of the two must name an existing regular file.
fn two_file_operands(files: Vec<PathBuf>) -> Result<(PathBuf, PathBuf)> {
    let mut files = files.into_iter();
    let (Some(first), Some(second)) = (files.next(), files.next()) else {
        bail!("<file1> <file2> not provided");
    };
    must_be_regular_file(&first)?;
    must_be_regular_file(&second)?;
    Ok((first, second))
}

fn must_be_regular_file(path: &Path) -> Result<()> {
    let metadata = match std::fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            bail!("{} does not exist", path.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Can't examine file: {}", path.display()))
        }
    };
    if metadata.is_dir() {
        bail!("{} is a directory", path.display());
    }
    Ok(())
}
