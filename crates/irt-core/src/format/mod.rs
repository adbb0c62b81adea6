pub mod float;
pub mod formatter;
pub mod policy;

pub use formatter::{format_with, FormattedText, ValueFormatter};
pub use policy::{FloatPolicy, NonFinitePolicy};

use crate::value::Value;

/// Format a value with the default policies (nice floats, spelled
/// non-finite values). Never fails.
pub fn format<'a>(value: &Value<'a>) -> FormattedText<'a> {
    format_with(value, FloatPolicy::default())
}
