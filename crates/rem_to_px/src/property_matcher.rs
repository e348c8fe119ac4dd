//! Decides which declaration properties are converted.
//!
//! Each `propList` entry is classified once, when the matcher is built:
//!
//! | entry     | meaning            |
//! |-----------|--------------------|
//! | `*`       | every property     |
//! | `foo`     | exactly `foo`      |
//! | `*foo*`   | contains `foo`     |
//! | `foo*`    | starts with `foo`  |
//! | `*foo`    | ends with `foo`    |
//! | `!<entry>`| exclusion of any of the above |
//!
//! Exclusions always win over inclusions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropPattern {
  Wildcard,
  Exact(String),
  Contain(String),
  StartWith(String),
  EndWith(String),
}

impl PropPattern {
  /// Classify one undecorated entry (the `!` already removed).
  ///
  /// Entries that name nothing, like `**` or an empty string, yield `None`.
  fn parse(entry: &str) -> Option<Self> {
    if entry == "*" {
      return Some(PropPattern::Wildcard);
    }

    let leading = entry.strip_prefix('*');
    let trailing = entry.strip_suffix('*');

    let pattern = match (leading, trailing) {
      (Some(_), Some(_)) => {
        let inner = &entry[1..entry.len() - 1];
        PropPattern::Contain(inner.to_string())
      }
      (Some(rest), None) => PropPattern::EndWith(rest.to_string()),
      (None, Some(rest)) => PropPattern::StartWith(rest.to_string()),
      (None, None) => PropPattern::Exact(entry.to_string()),
    };

    match &pattern {
      PropPattern::Exact(text)
      | PropPattern::Contain(text)
      | PropPattern::StartWith(text)
      | PropPattern::EndWith(text) => {
        if text.is_empty() || text.contains(|c: char| c == '*' || c == '!') {
          return None;
        }
      }
      PropPattern::Wildcard => {}
    }

    Some(pattern)
  }
}

#[derive(Debug, Clone, Default)]
struct PatternSet {
  exact: Vec<String>,
  contain: Vec<String>,
  start_with: Vec<String>,
  end_with: Vec<String>,
}

impl PatternSet {
  fn push(&mut self, pattern: PropPattern) {
    match pattern {
      PropPattern::Exact(text) => self.exact.push(text),
      PropPattern::Contain(text) => self.contain.push(text),
      PropPattern::StartWith(text) => self.start_with.push(text),
      PropPattern::EndWith(text) => self.end_with.push(text),
      PropPattern::Wildcard => {}
    }
  }

  fn matches(&self, prop: &str) -> bool {
    self.exact.iter().any(|text| text == prop)
      || self.contain.iter().any(|text| prop.contains(text.as_str()))
      || self.start_with.iter().any(|text| prop.starts_with(text.as_str()))
      || self.end_with.iter().any(|text| prop.ends_with(text.as_str()))
  }
}

/// Property predicate built from a `propList`.
#[derive(Debug, Clone, Default)]
pub struct PropMatcher {
  match_all: bool,
  has_wildcard: bool,
  include: PatternSet,
  exclude: PatternSet,
}

impl PropMatcher {
  pub fn new<S: AsRef<str>>(prop_list: &[S]) -> Self {
    let mut matcher = PropMatcher::default();

    for entry in prop_list {
      let entry = entry.as_ref();
      match entry.strip_prefix('!') {
        Some(negated) => match PropPattern::parse(negated) {
          // `!*` is not an exclusion of everything, it is ignored
          Some(PropPattern::Wildcard) | None => {}
          Some(pattern) => matcher.exclude.push(pattern),
        },
        None => match PropPattern::parse(entry) {
          Some(PropPattern::Wildcard) => matcher.has_wildcard = true,
          Some(pattern) => matcher.include.push(pattern),
          None => {}
        },
      }
    }

    matcher.match_all = matcher.has_wildcard && prop_list.len() == 1;
    matcher
  }

  pub fn matches(&self, prop: &str) -> bool {
    if self.match_all {
      return true;
    }

    let included = self.has_wildcard || self.include.matches(prop);
    included && !self.exclude.matches(prop)
  }
}
