//! Options accepted by the rem-to-px transform.
//!
//! The field names mirror the option object of `postcss-rem-to-pixel`, so a
//! JSON configuration written for the postcss plugin deserializes unchanged:
//!
//! ```json
//! { "rootValue": 10, "propList": ["*", "!border*"], "selectorBlackList": [".icon", { "regex": "^body$" }] }
//! ```

use regex::Regex;
use serde::Deserialize;

use crate::error::ConfigError;

/// Entry of the selector blacklist.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawSelectorPattern")]
pub enum SelectorPattern {
  /// Blacklists every selector containing this text.
  Literal(String),
  /// Blacklists every selector the expression finds a match in.
  Pattern(Regex),
}

impl SelectorPattern {
  pub fn literal(text: impl Into<String>) -> Self {
    SelectorPattern::Literal(text.into())
  }

  pub fn pattern(source: &str) -> Result<Self, ConfigError> {
    Regex::new(source)
      .map(SelectorPattern::Pattern)
      .map_err(|err| ConfigError::invalid_selector_pattern(source, err))
  }

  pub fn is_match(&self, selector: &str) -> bool {
    match self {
      SelectorPattern::Literal(text) => selector.contains(text.as_str()),
      SelectorPattern::Pattern(regex) => regex.is_match(selector),
    }
  }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelectorPattern {
  Literal(String),
  Regex { regex: String },
}

impl TryFrom<RawSelectorPattern> for SelectorPattern {
  type Error = ConfigError;

  fn try_from(raw: RawSelectorPattern) -> Result<Self, Self::Error> {
    match raw {
      RawSelectorPattern::Literal(text) => Ok(SelectorPattern::Literal(text)),
      RawSelectorPattern::Regex { regex } => SelectorPattern::pattern(&regex),
    }
  }
}

/// Configuration for a single run of [`crate::RemToPx`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RemToPxOptions {
  /// Pixels per rem
  pub root_value: f64,

  /// Decimal digits kept after conversion
  pub unit_precision: i32,

  pub selector_black_list: Vec<SelectorPattern>,

  /// Property names eligible for conversion
  ///
  /// Entries may be decorated: `*` alone matches everything, a leading `*`
  /// matches suffixes, a trailing `*` matches prefixes, both match substrings
  /// and a leading `!` turns the entry into an exclusion.
  pub prop_list: Vec<String>,

  /// Overwrite the declaration in place instead of adding a px fallback after it
  pub replace: bool,

  /// Also convert the params of `@media` rules
  pub media_query: bool,

  /// Rem values below this threshold are left untouched
  pub min_rem_value: f64,
}

impl Default for RemToPxOptions {
  fn default() -> Self {
    Self {
      root_value: 16.0,
      unit_precision: 5,
      selector_black_list: Vec::new(),
      prop_list: vec![
        "font".to_string(),
        "font-size".to_string(),
        "line-height".to_string(),
        "letter-spacing".to_string(),
      ],
      replace: true,
      media_query: false,
      min_rem_value: 0.0,
    }
  }
}

impl RemToPxOptions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse options from a JSON object with camelCase keys.
  pub fn from_json(source: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(source)?)
  }

  pub fn with_root_value(mut self, root_value: f64) -> Self {
    self.root_value = root_value;
    self
  }

  pub fn with_unit_precision(mut self, unit_precision: i32) -> Self {
    self.unit_precision = unit_precision;
    self
  }

  pub fn with_prop_list<I, S>(mut self, prop_list: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.prop_list = prop_list.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_replace(mut self, replace: bool) -> Self {
    self.replace = replace;
    self
  }

  pub fn with_media_query(mut self, media_query: bool) -> Self {
    self.media_query = media_query;
    self
  }

  pub fn with_min_rem_value(mut self, min_rem_value: f64) -> Self {
    self.min_rem_value = min_rem_value;
    self
  }

  /// Skip every rule whose selector contains `text`.
  pub fn blacklist_selector(mut self, text: impl Into<String>) -> Self {
    self
      .selector_black_list
      .push(SelectorPattern::literal(text));
    self
  }

  /// Skip every rule whose selector matches the regular expression `source`.
  pub fn blacklist_selector_pattern(mut self, source: &str) -> Result<Self, ConfigError> {
    self
      .selector_black_list
      .push(SelectorPattern::pattern(source)?);
    Ok(self)
  }
}
