//! Float Rendering
//!
//! Nice-float and fixed-six rendering. Callers handle non-finite input
//! before reaching the finite paths; `spell_non_finite` gives the textual
//! form when the policy allows it.

use super::policy::FloatPolicy;

/// Render a float under `policy`. Non-finite values are spelled out.
pub fn render(value: f64, policy: FloatPolicy) -> String {
    if let Some(word) = spell_non_finite(value) {
        return word.to_string();
    }

    match policy {
        FloatPolicy::Nice => nice(value),
        FloatPolicy::FixedSix => fixed_six(value),
    }
}

/// Textual form of NaN and the infinities, `None` for finite values
pub fn spell_non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn nice(value: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };

    if value % 1.0 == 0.0 {
        format!("{value:.0}")
    } else if (value * 10.0) % 1.0 == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

fn fixed_six(value: f64) -> String {
    format!("{value:.6}")
}
