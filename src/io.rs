//! Textual `.mat` persistence.
//!
//! The format is line-oriented: a matrix count on the first line, then
//! one block per matrix separated by a blank line. Each block is a
//! `height width` header followed by `height` rows of space-separated
//! values. Values are written with `f64`'s shortest round-trip
//! formatting, so a save/load cycle reproduces every matrix bit-exactly.
//!
//! ```text
//! 2
//!
//! 2 2
//! 1 2
//! 3 4
//!
//! 1 3
//! 0.5 -1 2.25
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::matrix::Matrix;

/// Required file extension.
const EXTENSION: &str = "mat";

/// Errors from `.mat` reading and writing.
#[derive(Debug)]
pub enum FileError {
    /// The file does not exist.
    NotFound(PathBuf),
    /// The path does not carry the `.mat` extension.
    Extension(PathBuf),
    /// A count, header, or value failed to parse. Carries the 1-based
    /// line number.
    Format { line: usize, message: String },
    /// A matrix block ended before all its rows were read.
    IncompleteData { matrix: usize, row: usize },
    /// Underlying I/O failure.
    Io(std::io::Error),
}

impl core::fmt::Display for FileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FileError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            FileError::Extension(path) => {
                write!(f, "expected a .{} file: {}", EXTENSION, path.display())
            }
            FileError::Format { line, message } => {
                write!(f, "malformed data on line {}: {}", line, message)
            }
            FileError::IncompleteData { matrix, row } => {
                write!(f, "matrix {} ends before row {}", matrix, row)
            }
            FileError::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FileError {
    fn from(err: std::io::Error) -> Self {
        FileError::Io(err)
    }
}

fn check_extension(path: &Path) -> Result<(), FileError> {
    match path.extension() {
        Some(ext) if ext == EXTENSION => Ok(()),
        _ => Err(FileError::Extension(path.to_path_buf())),
    }
}

/// Write `matrices` to `path` in `.mat` format, replacing any existing
/// file.
pub fn save(path: impl AsRef<Path>, matrices: &[Matrix]) -> Result<(), FileError> {
    let path = path.as_ref();
    check_extension(path)?;

    let mut text = format!("{}\n", matrices.len());
    for m in matrices {
        text.push('\n');
        text.push_str(&format!("{} {}\n", m.nrows(), m.ncols()));
        text.push_str(&m.to_string());
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}

/// Read all matrices from a `.mat` file.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Matrix>, FileError> {
    let path = path.as_ref();
    check_extension(path)?;

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(FileError::NotFound(path.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };

    parse(&text)
}

fn parse(text: &str) -> Result<Vec<Matrix>, FileError> {
    let total_lines = text.lines().count();
    // (1-based line number, content) pairs; blank separator lines are
    // tolerated anywhere between blocks.
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .peekable();

    let (line_no, first) = lines
        .next()
        .ok_or_else(|| FileError::Format {
            line: 1,
            message: "missing matrix count".into(),
        })?;
    let count: usize = first.trim().parse().map_err(|_| FileError::Format {
        line: line_no,
        message: format!("invalid matrix count {:?}", first.trim()),
    })?;

    let mut matrices = Vec::with_capacity(count);
    for index in 1..=count {
        while matches!(lines.peek(), Some((_, l)) if l.trim().is_empty()) {
            lines.next();
        }

        // A block without its dimension header is a format problem;
        // incomplete-data is reserved for rows that come up short.
        let (line_no, header) = lines.next().ok_or_else(|| FileError::Format {
            line: total_lines + 1,
            message: format!("missing header for matrix {}", index),
        })?;
        let mut dims = header.split_whitespace();
        let nrows = parse_dim(dims.next(), line_no, header)?;
        let ncols = parse_dim(dims.next(), line_no, header)?;

        let mut m = Matrix::zeros(nrows, ncols);
        for r in 1..=nrows {
            let (line_no, row) = lines
                .next()
                .ok_or(FileError::IncompleteData { matrix: index, row: r })?;
            let mut values = row.split_whitespace();
            for c in 1..=ncols {
                let token = values
                    .next()
                    .ok_or(FileError::IncompleteData { matrix: index, row: r })?;
                let value: f64 = token.parse().map_err(|_| FileError::Format {
                    line: line_no,
                    message: format!("invalid value {:?}", token),
                })?;
                m[(r, c)] = value;
            }
        }
        matrices.push(m);
    }

    Ok(matrices)
}

fn parse_dim(token: Option<&str>, line: usize, header: &str) -> Result<usize, FileError> {
    let token = token.ok_or_else(|| FileError::Format {
        line,
        message: format!("invalid matrix header {:?}", header),
    })?;
    let dim: usize = token.parse().map_err(|_| FileError::Format {
        line,
        message: format!("invalid matrix header {:?}", header),
    })?;
    if dim == 0 {
        return Err(FileError::Format {
            line,
            message: format!("invalid matrix header {:?}", header),
        });
    }
    Ok(dim)
}
