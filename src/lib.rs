//! Codec for the Valve KeyValues text format used by Steam ACF/VDF
//! metadata files: parse text into an ordered tree of sections and string
//! values, and serialize such a tree back to text.
//!
//! ```
//! let node = acfsrt::parse("\"app\"\n{\n\t\"name\"\t\t\"Half-Life\"\n}\n").unwrap();
//! assert_eq!(node.to_string(), "\"app\"\n{\n\t\"name\"\t\t\"Half-Life\"\n}\n");
//! ```
//!
//! Decoding preserves key order and the duplicate-key last-write-wins rule
//! of the format; encoding always quotes keys and values and indents with
//! one tab per nesting level.

mod error;
mod format;
mod node;
mod parse;
mod sort;

pub use error::Error;
pub use format::to_writer;
pub use node::{Node, Value};
pub use parse::{from_reader, parse};
