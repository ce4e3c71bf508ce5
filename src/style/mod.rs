//! Conversion of abstract fill/shadow descriptions into renderer-consumable style values.

pub(crate) mod color;
pub(crate) mod fill;
pub(crate) mod shadow;

/// Format a number for CSS/SVG output: at most three decimals, no trailing zeros, no `-0`.
pub(crate) fn fmt_num(v: f64) -> String {
    let r = (v * 1000.0).round() / 1000.0;
    if r == 0.0 {
        return "0".to_owned();
    }
    format!("{r}")
}
