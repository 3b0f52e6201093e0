use crate::error::Error;
use crate::node::{Node, Value};
use nom::{
  bytes::complete::take_while1, character::complete::multispace1, combinator::rest,
  sequence::separated_pair, IResult,
};
use std::io::Read;

/// One classified input line, after quote-stripping and trimming.
enum Line<'a> {
  /// Key plus everything after the first whitespace run.
  Pair(&'a str, &'a str),
  SectionStart,
  SectionEnd,
  SectionName(&'a str),
}

/// Parses KeyValues text into a [`Node`] tree.
///
/// Quote characters are stripped per line before splitting, so embedded
/// quotes inside a value read the same as structural quoting. A key with no
/// value on its line reads as a section name; if no `{` follows it is
/// silently discarded. A `}` closes a section for nesting purposes but leaf
/// lines keep landing in the section opened by the last `{`, so writers put
/// leaves before sibling sections. All of these are format ambiguities, kept
/// for compatibility with existing documents.
pub fn parse(input: &str) -> Result<Node, Error> {
  let mut root = Node::new();
  // Key path of the section leaf lines land in. Replayed against the root
  // on every use instead of holding a `&mut` into the tree across lines.
  let mut current: Vec<String> = Vec::new();
  // Section names seen but not yet opened with `{`.
  let mut pending: Vec<String> = Vec::new();

  for (index, raw) in input.lines().enumerate() {
    let stripped = raw.replace('"', "");
    let line = stripped.trim();
    if line.is_empty() {
      continue;
    }
    let number = index + 1;

    match classify(line) {
      Line::Pair(key, value) => {
        section_mut(&mut root, &current, number)?.insert(key, value);
      }
      Line::SectionStart => {
        let (name, parents) = pending
          .split_last()
          .ok_or(Error::UnnamedSection { line: number })?;
        section_mut(&mut root, parents, number)?.insert(name.clone(), Node::new());
        // Snapshot, not a cursor: `}` only pops `pending`, and the next
        // `{` re-walks from the root, so siblings after a close still
        // materialize under the right parent.
        current = pending.clone();
      }
      Line::SectionEnd => {
        pending
          .pop()
          .ok_or(Error::UnmatchedSectionEnd { line: number })?;
      }
      Line::SectionName(name) => pending.push(name.to_owned()),
    }
  }

  Ok(root)
}

/// Reads a stream to the end and parses it.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Node, Error> {
  let mut input = String::new();
  reader.read_to_string(&mut input)?;
  parse(&input)
}

fn classify(line: &str) -> Line {
  match pair(line) {
    Ok((_, (key, value))) => Line::Pair(key, value),
    Err(_) => match line {
      "{" => Line::SectionStart,
      "}" => Line::SectionEnd,
      name => Line::SectionName(name),
    },
  }
}

fn pair(input: &str) -> IResult<&str, (&str, &str)> {
  separated_pair(
    take_while1(|c: char| !c.is_whitespace()),
    multispace1,
    rest,
  )(input)
}

fn section_mut<'a>(root: &'a mut Node, path: &[String], line: usize) -> Result<&'a mut Node, Error> {
  let mut node = root;
  for name in path {
    node = match node.get_mut(name) {
      Some(Value::Section(child)) => child,
      _ => {
        return Err(Error::MissingSection {
          name: name.clone(),
          line,
        })
      }
    };
  }
  Ok(node)
}
