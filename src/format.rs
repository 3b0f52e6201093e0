use crate::node::{Node, Value};
use std::io::{self, Write};

impl ToString for Node {
  fn to_string(&self) -> String {
    let mut lines = Vec::new();
    self.format(&mut lines, 0);
    lines.join("\n") + "\n"
  }
}

impl Node {
  fn format(&self, lines: &mut Vec<String>, level: usize) {
    let indent = "\t".repeat(level);
    for (key, value) in self.iter() {
      match value {
        // "KEY"
        // {
        //   ...
        // }
        Value::Section(node) => {
          lines.push(format!("{}\"{}\"\n{}{{", indent, key, indent));
          node.format(lines, level + 1);
          lines.push(format!("{}}}", indent));
        }
        // "KEY"		"VALUE"
        Value::Leaf(value) => lines.push(format!("{}\"{}\"\t\t\"{}\"", indent, key, value)),
      }
    }
  }
}

/// Serializes `node` and writes it to a stream.
pub fn to_writer<W: Write>(mut writer: W, node: &Node) -> io::Result<()> {
  writer.write_all(node.to_string().as_bytes())
}
