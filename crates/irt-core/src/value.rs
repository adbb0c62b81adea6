//! Runtime Value Representation
//!
//! Defines the value kinds a generated program can interpolate into text.
//! The kind is fixed at construction; formatting only reads the tag.

/// Interpolated value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Signed whole number
    Int(i64),

    /// IEEE 754 double
    Float(f64),

    /// Boolean value
    Bool(bool),

    /// Already-textual data, borrowed and never reformatted
    Text(&'a str),
}

impl Value<'_> {
    /// Name of the value kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
        }
    }
}

macro_rules! from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value<'_> {
                fn from(value: $int) -> Self {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Text(value.as_str())
    }
}
