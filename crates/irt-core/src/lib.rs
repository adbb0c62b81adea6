//! Interpolation Runtime - Core Library
//!
//! Runtime support for generated programs: converts typed values into
//! canonical text and assembles interpolated strings from literal and
//! value fragments.

pub mod assemble;
pub mod config;
pub mod error;
pub mod format;
pub mod value;

// Re-export commonly used types
pub use assemble::{assemble, AssembledText, Assembler, Fragment, FragmentSequence};
pub use config::IrtConfig;
pub use error::{IrtError, IrtResult};
pub use format::{format, FloatPolicy, FormattedText, NonFinitePolicy, ValueFormatter};
pub use value::Value;
