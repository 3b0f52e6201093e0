/// An ordered key-value mapping: the document root or a nested section.
///
/// Keys are unique; entries iterate in insertion order.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Node {
  pub(crate) entries: Vec<(String, Value)>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
  Leaf(String),
  Section(Node),
}

impl Node {
  pub fn new() -> Node {
    Node {
      entries: Vec::new(),
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self
      .entries
      .iter()
      .find_map(|(k, v)| if k == key { Some(v) } else { None })
  }

  pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
    self
      .entries
      .iter_mut()
      .find_map(|(k, v)| if k == key { Some(v) } else { None })
  }

  /// Inserts `value` under `key`. An existing key keeps its position and
  /// only has its value replaced.
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
    let key = key.into();
    match self.entries.iter_mut().find(|(k, _)| *k == key) {
      Some(entry) => entry.1 = value.into(),
      None => self.entries.push((key, value.into())),
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|(k, _)| k.as_str())
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Value {
    Value::Leaf(value.to_owned())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Value {
    Value::Leaf(value)
  }
}

impl From<Node> for Value {
  fn from(node: Node) -> Value {
    Value::Section(node)
  }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Node {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Node {
    let mut node = Node::new();
    for (key, value) in iter {
      node.insert(key, value);
    }
    node
  }
}

#[cfg(test)]
mod tests {
  use super::{Node, Value};

  #[test]
  fn keeps_insertion_order() {
    let mut node = Node::new();
    node.insert("c", "3");
    node.insert("a", "1");
    node.insert("b", "2");
    assert_eq!(node.keys().collect::<Vec<_>>(), vec!["c", "a", "b"]);
  }

  #[test]
  fn overwrite_keeps_position() {
    let mut node = Node::new();
    node.insert("a", "1");
    node.insert("b", "2");
    node.insert("a", "3");
    assert_eq!(node.len(), 2);
    assert_eq!(node.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(node.get("a"), Some(&Value::Leaf("3".to_owned())));
  }

  #[test]
  fn section_values() {
    let mut node = Node::new();
    node.insert("s", Node::new());
    assert_eq!(node.get("s"), Some(&Value::Section(Node::new())));
    assert_eq!(node.get("missing"), None);
  }

  #[test]
  fn from_iter_preserves_order_and_overwrites() {
    let node = Node::from_iter([("b", "1"), ("a", "2"), ("b", "3")]);
    assert_eq!(node.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(node.get("b"), Some(&Value::Leaf("3".to_owned())));
  }
}
