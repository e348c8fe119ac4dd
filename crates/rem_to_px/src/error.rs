use thiserror::Error;

/// Errors raised while building [`crate::RemToPxOptions`].
///
/// Rewriting a stylesheet never fails; only turning user supplied options into
/// a usable configuration can.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Invalid selector blacklist pattern `{pattern}`: {source}")]
  InvalidSelectorPattern {
    pattern: String,
    #[source]
    source: regex::Error,
  },

  #[error("Failed to read rem-to-px options: {0}")]
  Json(#[from] serde_json::Error),
}

impl ConfigError {
  pub fn invalid_selector_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
    Self::InvalidSelectorPattern {
      pattern: pattern.into(),
      source,
    }
  }
}
