//! Assembly Buffer
//!
//! Growable text buffer used while assembling one interpolation.
//! Growth is fallible: an allocation the allocator refuses, or one that
//! would pass the configured ceiling, is reported and nothing is written.

use std::fmt;

use crate::error::{IrtError, IrtResult};

/// Finished output of one assembly, exclusively owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AssembledText(String);

impl AssembledText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssembledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssembledText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<AssembledText> for String {
    fn from(text: AssembledText) -> Self {
        text.0
    }
}

impl PartialEq<str> for AssembledText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AssembledText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Assembly buffer with an optional byte ceiling
#[derive(Debug)]
pub struct TextBuffer {
    text: String,
    limit: Option<usize>,
}

impl TextBuffer {
    /// Create a buffer, reserving `initial_capacity` bytes (clamped to the
    /// ceiling when one is set)
    pub fn new(initial_capacity: usize, limit: Option<usize>) -> IrtResult<Self> {
        let capacity = match limit {
            Some(limit) => initial_capacity.min(limit),
            None => initial_capacity,
        };

        let mut text = String::new();
        text.try_reserve(capacity)
            .map_err(|_| IrtError::AllocationFailure {
                requested: capacity,
                limit,
            })?;

        Ok(TextBuffer { text, limit })
    }

    /// Append text, growing the buffer as needed
    pub fn append(&mut self, s: &str) -> IrtResult<()> {
        let requested = self
            .text
            .len()
            .checked_add(s.len())
            .ok_or(IrtError::AllocationFailure {
                requested: usize::MAX,
                limit: self.limit,
            })?;

        if let Some(limit) = self.limit {
            if requested > limit {
                return Err(IrtError::AllocationFailure {
                    requested,
                    limit: Some(limit),
                });
            }
        }

        self.text
            .try_reserve(s.len())
            .map_err(|_| IrtError::AllocationFailure {
                requested,
                limit: self.limit,
            })?;
        self.text.push_str(s);
        Ok(())
    }

    /// Current length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Hand the buffer over as the finished text
    pub fn into_assembled(self) -> AssembledText {
        AssembledText(self.text)
    }
}
