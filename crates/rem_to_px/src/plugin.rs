use std::borrow::Cow;

use crate::ast::{AtRuleParams, DeclarationBlock, StyleTree};
use crate::config::RemToPxOptions;
use crate::property_matcher::PropMatcher;
use crate::selector_filter::is_blacklisted;
use crate::unit_pattern::UnitPattern;
use crate::value_converter::ValueConverter;

const PLUGIN_NAME: &str = "postcss-rem-to-pixel";

/// What happened to a single declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationOutcome {
  Skipped,
  /// The value was overwritten with its px form.
  Replaced,
  /// A px copy of the declaration was inserted right after it.
  Inserted,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
  pub replaced: usize,
  pub inserted: usize,
  pub at_rules: usize,
}

/// Rewrites rem lengths into px.
///
/// The property matcher and value converter are derived from the options once,
/// when the plugin is created; build a new plugin when the options change.
#[derive(Debug, Clone)]
pub struct RemToPx {
  options: RemToPxOptions,
  prop_matcher: PropMatcher,
  converter: ValueConverter,
}

pub fn rem_to_px(options: RemToPxOptions) -> RemToPx {
  RemToPx::new(options)
}

impl RemToPx {
  pub fn new(options: RemToPxOptions) -> Self {
    let prop_matcher = PropMatcher::new(options.prop_list.as_slice());
    let converter = ValueConverter::new(
      options.root_value,
      options.unit_precision,
      options.min_rem_value,
    );

    Self {
      options,
      prop_matcher,
      converter,
    }
  }

  pub fn name(&self) -> &'static str {
    PLUGIN_NAME
  }

  /// Replace every convertible rem token in `text`.
  pub fn convert_text<'t>(&self, text: &'t str) -> Cow<'t, str> {
    UnitPattern.replace_all(text, |literal| self.converter.convert(literal))
  }

  /// Convert the declaration at `index` of `block`, if it is eligible.
  pub fn rewrite_declaration(
    &self,
    block: &mut dyn DeclarationBlock,
    index: usize,
  ) -> DeclarationOutcome {
    let Some((prop, value)) = block.declaration(index) else {
      return DeclarationOutcome::Skipped;
    };

    // Cheapest test first, it rejects most declarations
    if !UnitPattern::might_contain(value) {
      return DeclarationOutcome::Skipped;
    }

    if !self.prop_matcher.matches(prop) {
      return DeclarationOutcome::Skipped;
    }

    if is_blacklisted(block.selector(), &self.options.selector_black_list) {
      return DeclarationOutcome::Skipped;
    }

    let new_value = self.convert_text(value).into_owned();

    // A px declaration with this value is already there
    if block.has_declaration(prop, &new_value) {
      return DeclarationOutcome::Skipped;
    }

    if self.options.replace {
      block.set_value(index, new_value);
      DeclarationOutcome::Replaced
    } else {
      let prop = prop.to_string();
      block.insert_after(index, prop, new_value);
      DeclarationOutcome::Inserted
    }
  }

  /// Convert the params of a `@media` rule when `media_query` is enabled.
  ///
  /// Returns whether the params changed.
  pub fn rewrite_at_rule(&self, at_rule: &mut dyn AtRuleParams) -> bool {
    if !self.options.media_query || !at_rule.name().eq_ignore_ascii_case("media") {
      return false;
    }

    if !UnitPattern::might_contain(at_rule.params()) {
      return false;
    }

    let params = self.convert_text(at_rule.params()).into_owned();
    if params == at_rule.params() {
      return false;
    }

    at_rule.set_params(params);
    true
  }

  fn rewrite_block(&self, block: &mut dyn DeclarationBlock, summary: &mut RunSummary) {
    let mut index = 0;
    while index < block.len() {
      match self.rewrite_declaration(block, index) {
        DeclarationOutcome::Skipped => index += 1,
        DeclarationOutcome::Replaced => {
          summary.replaced += 1;
          index += 1;
        }
        // The inserted copy holds px values only
        DeclarationOutcome::Inserted => {
          summary.inserted += 1;
          index += 2;
        }
      }
    }
  }

  #[tracing::instrument(level = "debug", skip_all, fields(plugin = PLUGIN_NAME))]
  pub fn run(&self, tree: &mut dyn StyleTree) -> RunSummary {
    let mut summary = RunSummary::default();

    tree.walk_blocks(&mut |block| self.rewrite_block(block, &mut summary));

    if self.options.media_query {
      tree.walk_at_rules(&mut |at_rule| {
        if self.rewrite_at_rule(at_rule) {
          summary.at_rules += 1;
        }
      });
    }

    tracing::debug!(
      replaced = summary.replaced,
      inserted = summary.inserted,
      at_rules = summary.at_rules,
      "Converted rem values"
    );

    summary
  }
}
