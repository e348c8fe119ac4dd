/// Turns a rem literal into its px replacement.
#[derive(Debug, Clone, Copy)]
pub struct ValueConverter {
  root_value: f64,
  unit_precision: i32,
  min_rem_value: f64,
}

impl ValueConverter {
  pub fn new(root_value: f64, unit_precision: i32, min_rem_value: f64) -> Self {
    Self {
      root_value,
      unit_precision,
      min_rem_value,
    }
  }

  /// Convert the numeric part of a rem token.
  ///
  /// Returns `None` when the token must stay as written: the literal is not a
  /// number, its magnitude is below the minimum rem value, or the px value
  /// overflows.
  pub fn convert(&self, literal: &str) -> Option<String> {
    let rems = literal.parse::<f64>().ok()?;
    let magnitude = rems.abs();

    if magnitude < self.min_rem_value {
      return None;
    }

    let pixels = to_fixed(magnitude * self.root_value, self.unit_precision);
    if !pixels.is_finite() {
      return None;
    }
    if pixels == 0.0 {
      return Some("0".to_string());
    }

    // The sign is written back as it was, `+` included
    let sign = match literal.as_bytes().first() {
      Some(b'-') => "-",
      Some(b'+') => "+",
      _ => "",
    };
    Some(format!("{}{}px", sign, pixels))
  }
}

/// Round `number` to `precision` decimal digits.
///
/// Floors at one extra digit, then rounds that integer to the nearest ten.
/// This must stay two staged; a plain `round` differs on float noise such as
/// `0.1 + 0.2`.
pub fn to_fixed(number: f64, precision: i32) -> f64 {
  let multiplier = 10f64.powi(precision + 1);
  let whole_number = (number * multiplier).floor();
  (whole_number / 10.0).round() * 10.0 / multiplier
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn converter() -> ValueConverter {
    ValueConverter::new(16.0, 5, 0.0)
  }

  #[test]
  fn converts_with_root_value() {
    assert_eq!(converter().convert("1.5"), Some("24px".to_string()));
    assert_eq!(converter().convert(".5"), Some("8px".to_string()));
    assert_eq!(
      ValueConverter::new(10.0, 5, 0.0).convert("0.5"),
      Some("5px".to_string())
    );
  }

  #[test]
  fn keeps_fractional_pixels() {
    assert_eq!(converter().convert("1.23456"), Some("19.75296px".to_string()));
    assert_eq!(converter().convert("0.0625"), Some("1px".to_string()));
    assert_eq!(converter().convert("0.03125"), Some("0.5px".to_string()));
  }

  #[test]
  fn zero_has_no_unit() {
    assert_eq!(converter().convert("0"), Some("0".to_string()));
    assert_eq!(converter().convert("-0"), Some("0".to_string()));
    assert_eq!(converter().convert("0.0000001"), Some("0".to_string()));
  }

  #[test]
  fn sign_is_kept_on_the_result() {
    assert_eq!(converter().convert("-0.5"), Some("-8px".to_string()));
    assert_eq!(converter().convert("+2"), Some("+32px".to_string()));
    assert_eq!(converter().convert("+0"), Some("0".to_string()));
  }

  #[test]
  fn values_below_minimum_are_kept() {
    let converter = ValueConverter::new(16.0, 5, 2.0);

    assert_eq!(converter.convert("1"), None);
    assert_eq!(converter.convert("1.99"), None);
    assert_eq!(converter.convert("-1"), None);
    assert_eq!(converter.convert("2"), Some("32px".to_string()));
  }

  #[test]
  fn unparseable_literal_is_kept() {
    assert_eq!(converter().convert("."), None);
    assert_eq!(converter().convert(""), None);
  }

  #[test]
  fn overflowing_literal_is_kept() {
    assert_eq!(converter().convert(&"9".repeat(400)), None);
    assert_eq!(converter().convert(&format!("-{}", "9".repeat(400))), None);
  }

  #[test]
  fn rounds_at_precision() {
    assert_eq!(to_fixed(1.23456789, 2), 1.23);
    assert_eq!(to_fixed(1.235, 2), 1.24);
    assert_eq!(to_fixed(2.5, 0), 3.0);
    assert_eq!(to_fixed(24.0, 5), 24.0);
  }

  #[test]
  fn floors_before_rounding() {
    // 0.1 + 0.2 is 0.30000000000000004; flooring at the extra digit drops the noise.
    assert_eq!(to_fixed(0.1 + 0.2, 1), 0.3);
    // floor(1009.9) = 1009, round(100.9) * 10 = 1010
    assert_eq!(to_fixed(1.0099, 2), 1.01);
  }

  #[test]
  fn converted_value_round_trips_within_precision() {
    let converter = ValueConverter::new(16.0, 5, 0.0);
    for rems in [0.1, 0.333, 1.0, 1.23456, 2.71828, 7.5, 12.345678] {
      let converted = converter.convert(&rems.to_string()).unwrap();
      let pixels = converted.trim_end_matches("px").parse::<f64>().unwrap();
      assert!(
        (pixels / 16.0 - rems).abs() <= 1e-5,
        "{rems}rem became {converted}"
      );
    }
  }
}
