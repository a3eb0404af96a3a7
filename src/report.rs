//! Writing populations to text files or the console, and reading reference
//! fronts back.
//!
//! # File format
//!
//! One line per solution. Every value is followed by a single space and the
//! line ends with `\n`:
//!
//! ```text
//! 0.5 0.75
//! 0.25 0.9375
//! ```
//!
//! Values use Rust's shortest round-trip formatting (`1.0`, `0.1`), so a file
//! written by [`write_objectives`] reads back through
//! [`read_reference_front`] to bit-identical objective vectors.
//!
//! # Example
//!
//! ```
//! use cmop::FloatSolution;
//! use cmop::report::{write_objectives_to, print_objectives_to};
//!
//! let mut a = FloatSolution::new(1, 2, 0);
//! a.objectives_mut().copy_from_slice(&[1.0, 2.5]);
//!
//! let mut buf = Vec::new();
//! write_objectives_to(&mut buf, core::slice::from_ref(&a)).unwrap();
//! assert_eq!(String::from_utf8(buf).unwrap(), "1.0 2.5 \n");
//!
//! let mut buf = Vec::new();
//! print_objectives_to(&mut buf, &[a]).unwrap();
//! assert_eq!(String::from_utf8(buf).unwrap(), "0: [1.0, 2.5]\n");
//! ```

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::solution::FloatSolution;

/// Write one line of space-terminated values per vector.
fn write_rows<'a>(
    mut writer: impl Write,
    rows: impl Iterator<Item = &'a [f64]>,
) -> std::io::Result<()> {
    for row in rows {
        for value in row {
            write!(writer, "{value:?} ")?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// Create the parent directory of `path` (and its ancestors) if missing.
///
/// Succeeds when the directory already exists or `path` has no parent
/// component.
///
/// # Errors
///
/// Returns `Io` if the directory cannot be created, e.g. because a
/// regular file is in the way or permissions are missing.
pub fn ensure_parent_dir(path: impl AsRef<Path>) -> Result<()> {
    match path.as_ref().parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Write the variable vector of each solution to `writer`.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_variables_to(writer: impl Write, solutions: &[FloatSolution]) -> std::io::Result<()> {
    write_rows(writer, solutions.iter().map(FloatSolution::variables))
}

/// Write the objective vector of each solution to `writer`.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_objectives_to(
    writer: impl Write,
    solutions: &[FloatSolution],
) -> std::io::Result<()> {
    write_rows(writer, solutions.iter().map(FloatSolution::objectives))
}

/// Write the variables of every solution to the file at `path`.
///
/// Parent directories are created as needed and an existing file is
/// overwritten.
///
/// # Errors
///
/// Returns `Io` if the directory or file cannot be created or written.
pub fn write_variables(solutions: &[FloatSolution], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    trace_info!(path = %path.display(), "output file (variables)");
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_variables_to(BufWriter::new(file), solutions)?;
    Ok(())
}

/// Write the objectives of every solution to the file at `path`.
///
/// Same file contract as [`write_variables`].
///
/// # Errors
///
/// Returns `Io` if the directory or file cannot be created or written.
pub fn write_objectives(solutions: &[FloatSolution], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    trace_info!(path = %path.display(), "output file (objectives)");
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    write_objectives_to(BufWriter::new(file), solutions)?;
    Ok(())
}

/// Write the first variable of each solution, one per line.
///
/// Solutions without variables produce no line.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn print_variables_to(
    mut writer: impl Write,
    solutions: &[FloatSolution],
) -> std::io::Result<()> {
    for first in solutions.iter().filter_map(|s| s.variables().first()) {
        writeln!(writer, "{first:?}")?;
    }
    writer.flush()
}

/// Write `"<index>: [o0, o1, ...]"` for each solution, one per line.
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn print_objectives_to(
    mut writer: impl Write,
    solutions: &[FloatSolution],
) -> std::io::Result<()> {
    for (index, solution) in solutions.iter().enumerate() {
        writeln!(writer, "{index}: {:?}", solution.objectives())?;
    }
    writer.flush()
}

/// Print the first variable of each solution to stdout.
///
/// # Errors
///
/// Returns `Io` if stdout cannot be written.
pub fn print_variables_to_console(solutions: &[FloatSolution]) -> Result<()> {
    print_variables_to(std::io::stdout().lock(), solutions)?;
    Ok(())
}

/// Print the index and objective vector of each solution to stdout.
///
/// # Errors
///
/// Returns `Io` if stdout cannot be written.
pub fn print_objectives_to_console(solutions: &[FloatSolution]) -> Result<()> {
    print_objectives_to(std::io::stdout().lock(), solutions)?;
    Ok(())
}

/// Read a reference front: one point per line, whitespace-separated floats.
///
/// Each line becomes a [`FloatSolution::reference_point`] carrying the
/// parsed values as objectives. Blank lines are skipped. A missing file is
/// not an error: a warning is logged and an empty front is returned.
///
/// # Errors
///
/// Returns `ParseFloat` for a token that is not a number and `Io` if the
/// file exists but cannot be read.
pub fn read_reference_front(path: impl AsRef<Path>) -> Result<Vec<FloatSolution>> {
    let path = path.as_ref();
    if !path.is_file() {
        trace_warn!(path = %path.display(), "reference front file was not found");
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut front = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let objectives = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|source| Error::ParseFloat {
                    line: index + 1,
                    token: token.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        front.push(FloatSolution::reference_point(objectives));
    }

    trace_debug!(path = %path.display(), points = front.len(), "reference front loaded");
    Ok(front)
}
