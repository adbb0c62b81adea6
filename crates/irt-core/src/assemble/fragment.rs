//! Interpolation Fragments
//!
//! A fragment sequence is the left-to-right composition of one
//! interpolation expression: literal text interleaved with values.

use crate::value::Value;

/// One unit of an interpolation expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fragment<'a> {
    /// Static text, copied verbatim
    Literal(&'a str),

    /// Value to be formatted
    Computed(Value<'a>),
}

impl<'a> From<Value<'a>> for Fragment<'a> {
    fn from(value: Value<'a>) -> Self {
        Fragment::Computed(value)
    }
}

/// Ordered fragments. Order is concatenation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentSequence<'a> {
    fragments: Vec<Fragment<'a>>,
}

impl<'a> FragmentSequence<'a> {
    pub fn new() -> Self {
        FragmentSequence {
            fragments: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FragmentSequence {
            fragments: Vec::with_capacity(capacity),
        }
    }

    /// Append a fragment
    pub fn push(&mut self, fragment: Fragment<'a>) {
        self.fragments.push(fragment);
    }

    /// Builder: append literal text
    pub fn literal(mut self, text: &'a str) -> Self {
        self.push(Fragment::Literal(text));
        self
    }

    /// Builder: append a value to be formatted
    pub fn value(mut self, value: impl Into<Value<'a>>) -> Self {
        self.push(Fragment::Computed(value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fragment<'a>> {
        self.fragments.iter()
    }

    pub fn as_slice(&self) -> &[Fragment<'a>] {
        &self.fragments
    }
}

impl<'a> From<Vec<Fragment<'a>>> for FragmentSequence<'a> {
    fn from(fragments: Vec<Fragment<'a>>) -> Self {
        FragmentSequence { fragments }
    }
}

impl<'a> FromIterator<Fragment<'a>> for FragmentSequence<'a> {
    fn from_iter<I: IntoIterator<Item = Fragment<'a>>>(iter: I) -> Self {
        FragmentSequence {
            fragments: iter.into_iter().collect(),
        }
    }
}

impl<'s, 'a> IntoIterator for &'s FragmentSequence<'a> {
    type Item = &'s Fragment<'a>;
    type IntoIter = std::slice::Iter<'s, Fragment<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let seq = FragmentSequence::new()
            .literal("Count: ")
            .value(42)
            .literal(" and ")
            .value(true);

        assert_eq!(
            seq.as_slice(),
            &[
                Fragment::Literal("Count: "),
                Fragment::Computed(Value::Int(42)),
                Fragment::Literal(" and "),
                Fragment::Computed(Value::Bool(true)),
            ]
        );
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn duplicates_are_kept() {
        let seq: FragmentSequence<'_> = vec![
            Fragment::Literal("x"),
            Fragment::Literal("x"),
        ]
        .into();
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn empty_sequence() {
        let seq = FragmentSequence::with_capacity(8);
        assert!(seq.is_empty());
        assert_eq!(seq.iter().count(), 0);
    }
}
