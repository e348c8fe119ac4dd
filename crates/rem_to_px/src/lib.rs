//! Rewrites `rem` lengths in a stylesheet into `px`.
//!
//! Accepts the options of `postcss-rem-to-pixel`. The crate works on an
//! already parsed stylesheet exposed through the traits in [`ast`]; parsing and
//! printing CSS are left to the host.
//!
//! ```
//! use rem_to_px::ast::{decl, rule, Root};
//! use rem_to_px::{rem_to_px, RemToPxOptions};
//!
//! let mut root = Root::new(vec![rule(".title", vec![decl("font-size", "1.5rem")])]);
//! rem_to_px(RemToPxOptions::default()).run(&mut root);
//!
//! assert_eq!(root, Root::new(vec![rule(".title", vec![decl("font-size", "24px")])]));
//! ```

pub mod ast;
mod config;
mod error;
mod plugin;
mod property_matcher;
mod selector_filter;
mod unit_pattern;
mod value_converter;

pub use config::{RemToPxOptions, SelectorPattern};
pub use error::ConfigError;
pub use plugin::{rem_to_px, DeclarationOutcome, RemToPx, RunSummary};
pub use property_matcher::{PropMatcher, PropPattern};
pub use selector_filter::is_blacklisted;
pub use unit_pattern::{UnitPattern, SOURCE_UNIT};
pub use value_converter::{to_fixed, ValueConverter};
