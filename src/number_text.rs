use std::fmt::{Display, Formatter};
use std::ops::Range;

/// Magnitudes rendered in plain decimal notation; everything else gets `E` notation.
const PLAIN_RANGE: Range<f64> = 1e-3..1e7;

/// Text form of an `f64` that always carries a fractional part.
///
/// Digits are the shortest string that round-trips to the same value, so
/// `20.00` renders as `20.0` and `10.99 / 20.00` as `0.5495`. Values outside
/// `[1e-3, 1e7)` use a `d.dddE<exp>` form, e.g. `1.0E7` or `1.234E-5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatText(pub f64);

impl Display for FloatText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&render(self.0))
    }
}

fn render(x: f64) -> String {
    if x.is_nan() {
        return "NaN".into();
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x.is_infinite() {
        return format!("{sign}Infinity");
    }
    if x == 0.0 {
        return format!("{sign}0.0");
    }

    let abs = x.abs();
    // LowerExp already yields the shortest round-trip digits, e.g. "5.495e-1"
    let sci = format!("{abs:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !PLAIN_RANGE.contains(&abs) {
        let (head, tail) = digits.split_at(1);
        let tail = if tail.is_empty() { "0" } else { tail };
        return format!("{sign}{head}.{tail}E{exp}");
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() > int_len {
        let (int, frac) = digits.split_at(int_len);
        format!("{sign}{int}.{frac}")
    } else {
        let pad = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{pad}.0")
    }
}
