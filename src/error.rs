use std::io;
use thiserror::Error;

/// Failures while decoding a document or reading it from a stream.
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum Error {
  /// A `}` line with no open section left to close.
  #[error("line {line}: `}}` does not close any section")]
  UnmatchedSectionEnd { line: usize },

  /// A `{` line that no section name precedes.
  #[error("line {line}: `{{` is not preceded by a section name")]
  UnnamedSection { line: usize },

  /// A section path walked through a name that is missing or bound to a
  /// plain value. Indicates mismatched `{`/`}` nesting.
  #[error("line {line}: `{name}` is not an open section")]
  MissingSection { name: String, line: usize },

  #[error(transparent)]
  Io(#[from] io::Error),
}
