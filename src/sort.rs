use crate::node::{Node, Value};

impl Node {
  /// Sorts every section's entries by key name, recursively. Stable, so
  /// duplicate-free insertion order only matters between equal keys (which
  /// cannot occur).
  pub fn sort_by_name(&mut self) {
    for (_, value) in self.entries.iter_mut() {
      if let Value::Section(node) = value {
        node.sort_by_name();
      }
    }
    self.entries.sort_by(|a, b| a.0.cmp(&b.0));
  }
}

#[cfg(test)]
mod tests {
  use crate::node::{Node, Value};

  #[test]
  fn sort_by_name() {
    let tests = vec![
      (Node::new(), Node::new()),
      (
        Node::from_iter([("1", "a")]),
        Node::from_iter([("1", "a")]),
      ),
      (
        Node::from_iter([("1", "a"), ("2", "b")]),
        Node::from_iter([("1", "a"), ("2", "b")]),
      ),
      (
        Node::from_iter([("2", "b"), ("1", "a")]),
        Node::from_iter([("1", "a"), ("2", "b")]),
      ),
      (
        Node::from_iter([("a ", "x"), ("a", "x")]),
        Node::from_iter([("a", "x"), ("a ", "x")]),
      ),
      (
        Node::from_iter([
          ("2", Value::from("b")),
          ("1", Value::from("a")),
          (
            "3",
            Value::from(Node::from_iter([("1", "one"), ("0", "zero")])),
          ),
        ]),
        Node::from_iter([
          ("1", Value::from("a")),
          ("2", Value::from("b")),
          (
            "3",
            Value::from(Node::from_iter([("0", "zero"), ("1", "one")])),
          ),
        ]),
      ),
    ];

    for (mut actual, expected) in tests {
      actual.sort_by_name();
      assert_eq!(actual, expected);
    }
  }
}
