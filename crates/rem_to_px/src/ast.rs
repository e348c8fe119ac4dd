//! Stylesheet access used by the transform.
//!
//! The transform never parses or prints CSS. A host exposes its own tree
//! through [`StyleTree`], [`DeclarationBlock`] and [`AtRuleParams`]; the
//! in-memory [`Root`] model below implements them for hosts without a tree of
//! their own and for tests.

/// A node that directly contains declarations: a rule, an at-rule block or
/// the root.
pub trait DeclarationBlock {
  /// Selector of the owning rule, `None` for the root and at-rule blocks.
  fn selector(&self) -> Option<&str>;

  /// Number of children, declarations or not.
  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Property and value of the child at `index`, `None` when that child is
  /// not a declaration.
  fn declaration(&self, index: usize) -> Option<(&str, &str)>;

  fn set_value(&mut self, index: usize, value: String);

  /// Insert a new declaration directly after the child at `index`.
  fn insert_after(&mut self, index: usize, prop: String, value: String);

  fn has_declaration(&self, prop: &str, value: &str) -> bool {
    (0..self.len()).any(|index| self.declaration(index) == Some((prop, value)))
  }
}

pub trait AtRuleParams {
  fn name(&self) -> &str;
  fn params(&self) -> &str;
  fn set_params(&mut self, params: String);
}

/// Visitation over a whole stylesheet, in document order.
pub trait StyleTree {
  fn walk_blocks(&mut self, callback: &mut dyn FnMut(&mut dyn DeclarationBlock));
  fn walk_at_rules(&mut self, callback: &mut dyn FnMut(&mut dyn AtRuleParams));
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
  Declaration(Declaration),
  Rule(Rule),
  AtRule(AtRule),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
  pub prop: String,
  pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
  pub selector: String,
  pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
  pub name: String,
  pub params: String,
  pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Root {
  pub nodes: Vec<Node>,
}

impl Root {
  pub fn new(nodes: Vec<Node>) -> Self {
    Self { nodes }
  }
}

pub fn decl(prop: impl Into<String>, value: impl Into<String>) -> Node {
  Node::Declaration(Declaration {
    prop: prop.into(),
    value: value.into(),
  })
}

pub fn rule(selector: impl Into<String>, nodes: Vec<Node>) -> Node {
  Node::Rule(Rule {
    selector: selector.into(),
    nodes,
  })
}

pub fn at_rule(name: impl Into<String>, params: impl Into<String>, nodes: Vec<Node>) -> Node {
  Node::AtRule(AtRule {
    name: name.into(),
    params: params.into(),
    nodes,
  })
}

fn node_declaration(nodes: &[Node], index: usize) -> Option<(&str, &str)> {
  match nodes.get(index) {
    Some(Node::Declaration(decl)) => Some((decl.prop.as_str(), decl.value.as_str())),
    _ => None,
  }
}

fn set_node_value(nodes: &mut [Node], index: usize, value: String) {
  if let Some(Node::Declaration(decl)) = nodes.get_mut(index) {
    decl.value = value;
  }
}

fn insert_node_after(nodes: &mut Vec<Node>, index: usize, prop: String, value: String) {
  let at = (index + 1).min(nodes.len());
  nodes.insert(at, Node::Declaration(Declaration { prop, value }));
}

macro_rules! impl_declaration_block {
  ($ty:ty, |$this:ident| $selector:expr) => {
    impl DeclarationBlock for $ty {
      fn selector(&self) -> Option<&str> {
        let $this = self;
        $selector
      }

      fn len(&self) -> usize {
        self.nodes.len()
      }

      fn declaration(&self, index: usize) -> Option<(&str, &str)> {
        node_declaration(&self.nodes, index)
      }

      fn set_value(&mut self, index: usize, value: String) {
        set_node_value(&mut self.nodes, index, value);
      }

      fn insert_after(&mut self, index: usize, prop: String, value: String) {
        insert_node_after(&mut self.nodes, index, prop, value);
      }
    }
  };
}

impl_declaration_block!(Root, |_root| None);
impl_declaration_block!(Rule, |rule| Some(rule.selector.as_str()));
impl_declaration_block!(AtRule, |_at_rule| None);

impl AtRuleParams for AtRule {
  fn name(&self) -> &str {
    &self.name
  }

  fn params(&self) -> &str {
    &self.params
  }

  fn set_params(&mut self, params: String) {
    self.params = params;
  }
}

fn walk_node_blocks(nodes: &mut [Node], callback: &mut dyn FnMut(&mut dyn DeclarationBlock)) {
  for node in nodes {
    match node {
      Node::Rule(rule) => {
        callback(rule);
        walk_node_blocks(&mut rule.nodes, callback);
      }
      Node::AtRule(at_rule) => {
        callback(at_rule);
        walk_node_blocks(&mut at_rule.nodes, callback);
      }
      Node::Declaration(_) => {}
    }
  }
}

fn walk_node_at_rules(nodes: &mut [Node], callback: &mut dyn FnMut(&mut dyn AtRuleParams)) {
  for node in nodes {
    match node {
      Node::Rule(rule) => walk_node_at_rules(&mut rule.nodes, callback),
      Node::AtRule(at_rule) => {
        callback(at_rule);
        walk_node_at_rules(&mut at_rule.nodes, callback);
      }
      Node::Declaration(_) => {}
    }
  }
}

impl StyleTree for Root {
  fn walk_blocks(&mut self, callback: &mut dyn FnMut(&mut dyn DeclarationBlock)) {
    callback(self);
    walk_node_blocks(&mut self.nodes, callback);
  }

  fn walk_at_rules(&mut self, callback: &mut dyn FnMut(&mut dyn AtRuleParams)) {
    walk_node_at_rules(&mut self.nodes, callback);
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn sample() -> Root {
    Root::new(vec![
      decl("font-size", "1rem"),
      rule(
        ".a",
        vec![
          decl("margin", "0"),
          rule("&:hover", vec![decl("color", "red")]),
        ],
      ),
      at_rule(
        "media",
        "(min-width: 30rem)",
        vec![rule(".b", vec![decl("padding", "1rem")])],
      ),
    ])
  }

  #[test]
  fn walks_blocks_in_document_order() {
    let mut root = sample();
    let mut selectors = Vec::new();

    root.walk_blocks(&mut |block| {
      selectors.push(block.selector().map(str::to_string));
    });

    assert_eq!(
      selectors,
      vec![
        None,
        Some(".a".to_string()),
        Some("&:hover".to_string()),
        None,
        Some(".b".to_string()),
      ]
    );
  }

  #[test]
  fn walks_nested_at_rules() {
    let mut root = Root::new(vec![
      at_rule("media", "print", vec![at_rule("supports", "(display: grid)", vec![])]),
      rule(".a", vec![at_rule("media", "screen", vec![])]),
    ]);
    let mut names = Vec::new();

    root.walk_at_rules(&mut |at_rule| {
      names.push(format!("{} {}", at_rule.name(), at_rule.params()));
    });

    assert_eq!(names, vec!["media print", "supports (display: grid)", "media screen"]);
  }

  #[test]
  fn reads_only_declarations() {
    let root = sample();
    let Node::Rule(rule) = &root.nodes[1] else {
      panic!("expected a rule");
    };

    assert_eq!(rule.len(), 2);
    assert_eq!(rule.declaration(0), Some(("margin", "0")));
    assert_eq!(rule.declaration(1), None);
    assert_eq!(rule.declaration(2), None);
    assert!(rule.has_declaration("margin", "0"));
    assert!(!rule.has_declaration("margin", "1px"));
  }

  #[test]
  fn inserts_after_index() {
    let mut root = Root::new(vec![decl("a", "1"), decl("c", "3")]);

    root.insert_after(0, "b".to_string(), "2".to_string());
    root.set_value(2, "4".to_string());

    assert_eq!(
      root,
      Root::new(vec![decl("a", "1"), decl("b", "2"), decl("c", "4")])
    );
  }
}
