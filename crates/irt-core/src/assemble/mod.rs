pub mod assembler;
pub mod buffer;
pub mod fragment;

pub use assembler::Assembler;
pub use buffer::{AssembledText, TextBuffer};
pub use fragment::{Fragment, FragmentSequence};

use crate::error::IrtResult;

/// Assemble `fragments` with the default configuration.
///
/// Fails only with `AllocationFailure`.
pub fn assemble(fragments: &FragmentSequence<'_>) -> IrtResult<AssembledText> {
    Assembler::default().assemble(fragments)
}
