use crate::config::SelectorPattern;

/// Whether the rule owning a declaration is exempt from conversion.
///
/// Declarations without a selector (the root, at-rule blocks) are never
/// blacklisted.
pub fn is_blacklisted(selector: Option<&str>, blacklist: &[SelectorPattern]) -> bool {
  let Some(selector) = selector else {
    return false;
  };

  blacklist.iter().any(|pattern| pattern.is_match(selector))
}
