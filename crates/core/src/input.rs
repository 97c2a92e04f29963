//! Lenient text-to-number coercion for form fields
//!
//! The sizing form never rejects input. Whatever the user types, the
//! longest leading numeric prefix is taken and anything unusable becomes
//! zero, which then flows through the math as a degenerate (but harmless)
//! value. "12.5e3" is 12500, "12abc" is 12, "abc" and "" are 0.

use serde::{Deserialize, Serialize};

use crate::pack::PackConfiguration;

/// Coerce free text to a finite float. Unparseable or non-finite input
/// becomes 0.0.
pub fn lenient_f64(raw: &str) -> f64 {
    let prefix = numeric_prefix(raw.trim());
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Coerce free text to a count. Fractions truncate toward zero, negatives
/// clamp to 0, absurdly large values saturate.
pub fn lenient_u32(raw: &str) -> u32 {
    let value = lenient_f64(raw);
    if value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

/// Longest leading slice of `s` that reads as a decimal number: optional
/// sign, digits with at most one dot, optional exponent. The exponent is
/// only kept when it carries digits of its own, so "12e" yields "12".
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start || has_digits {
            has_digits = has_digits || j > frac_start;
            i = j;
        }
    }

    if !has_digits {
        return "";
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    &s[..i]
}

// ----------------------------------------------------------------------------
// Field updates
// ----------------------------------------------------------------------------

/// The numeric fields of the sizing form. Each text box maps to exactly
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigField {
    CellVoltage,
    CellCapacity,
    SeriesCount,
    ParallelCount,
    EnclosureHeight,
    EnclosureLength,
    EnclosureWidth,
}

impl PackConfiguration {
    /// Replace one field with the coerced value of `raw`, leaving every
    /// other field untouched.
    pub fn apply(&mut self, field: ConfigField, raw: &str) {
        match field {
            ConfigField::CellVoltage => self.cell_voltage = lenient_f64(raw),
            ConfigField::CellCapacity => self.cell_capacity_ah = lenient_f64(raw),
            ConfigField::SeriesCount => self.series_count = lenient_u32(raw),
            ConfigField::ParallelCount => self.parallel_count = lenient_u32(raw),
            ConfigField::EnclosureHeight => self.enclosure_height_cm = lenient_f64(raw),
            ConfigField::EnclosureLength => self.enclosure_length_cm = lenient_f64(raw),
            ConfigField::EnclosureWidth => self.enclosure_width_cm = lenient_f64(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_f64_plain() {
        assert_eq!(lenient_f64("3.7"), 3.7);
        assert_eq!(lenient_f64("  2.8  "), 2.8);
        assert_eq!(lenient_f64("-4"), -4.0);
        assert_eq!(lenient_f64("+.5"), 0.5);
        assert_eq!(lenient_f64("30.5"), 30.5);
    }

    #[test]
    fn test_lenient_f64_prefix() {
        assert_eq!(lenient_f64("12abc"), 12.0);
        assert_eq!(lenient_f64("1.2.3"), 1.2);
        assert_eq!(lenient_f64("12.5e3"), 12500.0);
        assert_eq!(lenient_f64("12e"), 12.0);
        assert_eq!(lenient_f64("7.5 cm"), 7.5);
    }

    #[test]
    fn test_lenient_f64_garbage_is_zero() {
        assert_eq!(lenient_f64(""), 0.0);
        assert_eq!(lenient_f64("abc"), 0.0);
        assert_eq!(lenient_f64("."), 0.0);
        assert_eq!(lenient_f64("-"), 0.0);
        assert_eq!(lenient_f64("e5"), 0.0);
    }

    #[test]
    fn test_lenient_f64_never_non_finite() {
        assert_eq!(lenient_f64("1e999"), 0.0);
        assert_eq!(lenient_f64("Infinity"), 0.0);
        assert_eq!(lenient_f64("NaN"), 0.0);
    }

    #[test]
    fn test_lenient_u32() {
        assert_eq!(lenient_u32("8"), 8);
        assert_eq!(lenient_u32("8.9"), 8);
        assert_eq!(lenient_u32("-3"), 0);
        assert_eq!(lenient_u32("abc"), 0);
        assert_eq!(lenient_u32("99999999999"), u32::MAX);
    }

    #[test]
    fn test_apply_replaces_single_field() {
        let mut config = PackConfiguration::default();
        config.apply(ConfigField::SeriesCount, "10");

        let expected = PackConfiguration {
            series_count: 10,
            ..PackConfiguration::default()
        };
        assert_eq!(config, expected);

        config.apply(ConfigField::CellVoltage, "3.2");
        assert_eq!(config.cell_voltage, 3.2);
        assert_eq!(config.series_count, 10);
    }

    #[test]
    fn test_apply_garbage_degrades_to_zero() {
        let mut config = PackConfiguration::default();
        config.apply(ConfigField::ParallelCount, "lots");
        config.apply(ConfigField::EnclosureWidth, "");
        assert_eq!(config.parallel_count, 0);
        assert_eq!(config.enclosure_width_cm, 0.0);
    }
}
