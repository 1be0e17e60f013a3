//! Textual formatting of scalars and arrays for the scene markup.
//!
//! Floats always carry a decimal point (`1.0`, never `1`) so the renderer
//! reads them as floats. Arrays use the `[ a, b, c ]` layout.

use std::fmt::Write as _;

/// How floating-point values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatFormat {
    /// Shortest decimal that round-trips to the same `f64`.
    #[default]
    Shortest,
    /// Fixed number of digits after the decimal point (minimum 1).
    Fixed(usize),
}

impl FloatFormat {
    /// Build from an optional precision, `None` meaning [`FloatFormat::Shortest`].
    #[must_use]
    pub fn from_precision(precision: Option<usize>) -> Self {
        precision.map_or(Self::Shortest, Self::Fixed)
    }

    /// Format a single float.
    #[must_use]
    pub fn float(self, value: f64) -> String {
        if value.is_nan() {
            return "nan".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "inf" } else { "-inf" }.to_string();
        }

        match self {
            // Debug keeps the trailing ".0" that Display drops
            Self::Shortest => with_decimal_point(format!("{value:?}")),
            Self::Fixed(digits) => format!("{:.*}", digits.max(1), value),
        }
    }

    /// Format a slice of floats as `[ a, b, c ]`.
    #[must_use]
    pub fn array(self, values: &[f64]) -> String {
        let mut out = String::from("[ ");
        for (i, &v) in values.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&self.float(v));
        }
        out.push_str(" ]");
        out
    }
}

/// Debug switches to exponent form (`1e-7`) for very small and large values;
/// give the mantissa a decimal point there too (`1.0e-7`).
fn with_decimal_point(text: String) -> String {
    match text.find('e') {
        Some(e) if !text[..e].contains('.') => format!("{}.0{}", &text[..e], &text[e..]),
        _ => text,
    }
}

/// Quote a string as a basic TOML string.
#[must_use]
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_floats_keep_decimal_point() {
        assert_eq!(FloatFormat::Shortest.float(1.0), "1.0");
        assert_eq!(FloatFormat::Shortest.float(0.0), "0.0");
        assert_eq!(FloatFormat::Shortest.float(-100.0), "-100.0");
    }

    #[test]
    fn test_shortest_round_trips() {
        let v = 2.2 * 3.0;
        let text = FloatFormat::Shortest.float(v);
        assert_eq!(text, "6.6000000000000005");
        assert_eq!(text.parse::<f64>().unwrap(), v);
    }

    #[test]
    fn test_exponent_form_keeps_decimal_point() {
        assert_eq!(FloatFormat::Shortest.float(1e-7), "1.0e-7");
        assert_eq!(FloatFormat::Shortest.float(-3e20), "-3.0e20");
        assert_eq!(FloatFormat::Shortest.float(1.5e-7), "1.5e-7");
        assert_eq!(FloatFormat::Shortest.float(1e-7).parse::<f64>().unwrap(), 1e-7);
    }

    #[test]
    fn test_fixed_precision() {
        assert_eq!(FloatFormat::Fixed(3).float(2.5), "2.500");
        assert_eq!(FloatFormat::Fixed(2).float(2.2 * 3.0), "6.60");
        // zero digits would drop the decimal point
        assert_eq!(FloatFormat::Fixed(0).float(4.0), "4.0");
    }

    #[test]
    fn test_non_finite_uses_toml_spelling() {
        assert_eq!(FloatFormat::Shortest.float(f64::NAN), "nan");
        assert_eq!(FloatFormat::Shortest.float(f64::INFINITY), "inf");
        assert_eq!(FloatFormat::Fixed(2).float(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_array_layout() {
        assert_eq!(FloatFormat::Shortest.array(&[1.0, 0.2, 0.0]), "[ 1.0, 0.2, 0.0 ]");
        assert_eq!(FloatFormat::Shortest.array(&[]), "[  ]");
    }

    #[test]
    fn test_from_precision() {
        assert_eq!(FloatFormat::from_precision(None), FloatFormat::Shortest);
        assert_eq!(FloatFormat::from_precision(Some(4)), FloatFormat::Fixed(4));
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a/b.obj"), "\"a/b.obj\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("C:\\mesh"), "\"C:\\\\mesh\"");
    }
}
