//! Value Formatter
//!
//! Maps one `Value` to its canonical text. Dispatch is a single exhaustive
//! match on the value kind.

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use tracing::{trace, warn};

use crate::config::IrtConfig;
use crate::error::{IrtError, IrtResult};
use crate::value::Value;

use super::float;
use super::policy::{FloatPolicy, NonFinitePolicy};

/// Text produced by formatting a single value.
///
/// Text values and boolean tokens are borrowed; numbers own their digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText<'a>(Cow<'a, str>);

impl FormattedText<'_> {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_owned(self) -> String {
        self.0.into_owned()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for FormattedText<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for FormattedText<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for FormattedText<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Type-directed value formatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueFormatter {
    float_policy: FloatPolicy,
    non_finite: NonFinitePolicy,
}

impl ValueFormatter {
    pub fn new(float_policy: FloatPolicy, non_finite: NonFinitePolicy) -> Self {
        ValueFormatter {
            float_policy,
            non_finite,
        }
    }

    pub fn from_config(config: &IrtConfig) -> Self {
        Self::new(config.float_policy, config.non_finite)
    }

    pub fn float_policy(&self) -> FloatPolicy {
        self.float_policy
    }

    pub fn non_finite(&self) -> NonFinitePolicy {
        self.non_finite
    }

    /// Format a value. Fails only when a non-finite float meets the
    /// `Reject` policy.
    pub fn format<'a>(&self, value: &Value<'a>) -> IrtResult<FormattedText<'a>> {
        if let Value::Float(v) = value {
            if !v.is_finite() && self.non_finite == NonFinitePolicy::Reject {
                warn!(value = %v, "rejecting non-finite float");
                return Err(IrtError::UndefinedNumericInput(*v));
            }
        }

        let text = format_with(value, self.float_policy);
        trace!(kind = value.kind_name(), len = text.len(), "formatted value");
        Ok(text)
    }
}

/// Format a value under `float_policy`, spelling out non-finite floats.
pub fn format_with<'a>(value: &Value<'a>, float_policy: FloatPolicy) -> FormattedText<'a> {
    let text = match *value {
        Value::Bool(b) => Cow::Borrowed(if b { "true" } else { "false" }),
        Value::Int(n) => Cow::Owned(n.to_string()),
        Value::Text(s) => Cow::Borrowed(s),
        Value::Float(v) => Cow::Owned(float::render(v, float_policy)),
    };
    FormattedText(text)
}
