//! `setop` treats each of its two file arguments as a set of text lines and
//! prints the lines of the first file selected by the requested relation:
//! `intersection` keeps the lines that also occur in the second file, and
//! `difference` keeps the lines that don't.
//!
//! The `calculate` function in `operations` is the kernel of the application.
//! The `args` module parses and validates the command line, the `operands`
//! module hides file-access details, and the `set` module holds the membership
//! lookup built from the second file.
//!
//! Lines are compared as raw bytes, with the trailing `\n` (and a `\r` before
//! it, if any) stripped. No other normalization is done, so files need not be
//! valid UTF-8.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod operations;

mod operands;
mod set;
