//! Per-field cell parsers
//!
//! Every parser is total: text that does not hold a usable number yields a
//! zero value with `used_default` set, never an error.

/// A parsed cell value and whether the zero default was substituted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedField<T> {
    pub value: T,
    pub used_default: bool,
}

impl<T> ParsedField<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            used_default: false,
        }
    }
}

impl<T: Default> ParsedField<T> {
    fn defaulted() -> Self {
        Self {
            value: T::default(),
            used_default: true,
        }
    }
}

/// Drop `%` and thousands separators, then trim
///
/// Trimming last also strips whitespace that sat between the number and a
/// unit, as in `"5.33 %"`.
fn clean(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !matches!(c, '%' | ',')).collect();
    stripped.trim().to_string()
}

/// Parse a plain number such as `"5,012.34"`
///
/// Non-finite results (`NaN`, `inf`) count as unparsable.
pub fn parse_number(text: &str) -> ParsedField<f64> {
    let cleaned = clean(text);
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => ParsedField::parsed(value),
        _ => ParsedField::defaulted(),
    }
}

/// Parse a percentage such as `"5.33%"` into a fraction (`0.0533`)
pub fn parse_percent(text: &str) -> ParsedField<f64> {
    let field = parse_number(text);
    ParsedField {
        value: field.value / 100.0,
        used_default: field.used_default,
    }
}

/// Parse a day count made only of ASCII digits
///
/// Signs, decimal points and out-of-range counts give the default.
pub fn parse_day_count(text: &str) -> ParsedField<u32> {
    let cleaned = clean(text);
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return ParsedField::defaulted();
    }

    match cleaned.parse::<u32>() {
        Ok(days) => ParsedField::parsed(days),
        Err(_) => ParsedField::defaulted(),
    }
}
