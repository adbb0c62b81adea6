//! Fragment Assembler
//!
//! Concatenates a fragment sequence into one owned string, formatting
//! computed fragments on the way. Holds no state between calls.

use tracing::{debug, warn};

use crate::config::IrtConfig;
use crate::error::IrtResult;
use crate::format::ValueFormatter;

use super::buffer::{AssembledText, TextBuffer};
use super::fragment::{Fragment, FragmentSequence};

/// Fragment assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembler {
    formatter: ValueFormatter,
    initial_capacity: usize,
    max_output_len: Option<usize>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::from_config(&IrtConfig::default())
    }
}

impl Assembler {
    /// Create an assembler with default buffer limits
    pub fn new(formatter: ValueFormatter) -> Self {
        let config = IrtConfig::default();
        Assembler {
            formatter,
            initial_capacity: config.initial_capacity,
            max_output_len: config.max_output_len,
        }
    }

    pub fn from_config(config: &IrtConfig) -> Self {
        Assembler {
            formatter: ValueFormatter::from_config(config),
            initial_capacity: config.initial_capacity,
            max_output_len: config.max_output_len,
        }
    }

    pub fn formatter(&self) -> &ValueFormatter {
        &self.formatter
    }

    /// Assemble `fragments` in order
    pub fn assemble(&self, fragments: &FragmentSequence<'_>) -> IrtResult<AssembledText> {
        let mut buffer = TextBuffer::new(self.initial_capacity, self.max_output_len)?;

        for fragment in fragments {
            let res = self.step(&mut buffer, fragment);
            if let Err(e) = res {
                warn!(error = %e, written = buffer.len(), "assembly failed");
                return Err(e);
            }
        }

        let text = buffer.into_assembled();
        debug!(fragments = fragments.len(), bytes = text.len(), "assembled interpolation");
        Ok(text)
    }

    fn step(&self, buffer: &mut TextBuffer, fragment: &Fragment<'_>) -> IrtResult<()> {
        match fragment {
            Fragment::Literal(text) => buffer.append(text),
            Fragment::Computed(value) => {
                let text = self.formatter.format(value)?;
                buffer.append(&text)
            }
        }
    }
}
