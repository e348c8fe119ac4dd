use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// The unit being rewritten.
pub const SOURCE_UNIT: &str = "rem";

// Quoted strings and url() are matched first so the rem alternative never
// fires inside them. The trailing group catches identifiers like `1remx`.
static REM_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r#""[^"]+"|'[^']+'|url\([^)]+\)|([-+]?[0-9]*\.?[0-9]+)rem([A-Za-z0-9_-]*)"#)
    .expect("failed to compile rem token regex")
});

/// Finds `<number>rem` tokens inside a declaration value or at-rule params.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitPattern;

impl UnitPattern {
  /// Cheap textual check used before running the regex.
  pub fn might_contain(text: &str) -> bool {
    text.contains(SOURCE_UNIT)
  }

  /// Replace every rem token in `text`.
  ///
  /// `replacer` receives the numeric literal including its sign (`"-1.5"`)
  /// and returns the replacement for the whole token, or `None` to keep the
  /// token as written.
  pub fn replace_all<'t, F>(&self, text: &'t str, mut replacer: F) -> Cow<'t, str>
  where
    F: FnMut(&str) -> Option<String>,
  {
    REM_TOKEN_RE.replace_all(text, |caps: &Captures<'_>| {
      let whole = &caps[0];
      let Some(literal) = caps.get(1) else {
        return whole.to_string();
      };
      let followed_by_ident = caps.get(2).is_some_and(|rest| !rest.as_str().is_empty());
      if followed_by_ident {
        return whole.to_string();
      }
      replacer(literal.as_str()).unwrap_or_else(|| whole.to_string())
    })
  }
}
