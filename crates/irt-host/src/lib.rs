//! IRT host crate: output delivery helpers for generated programs
//!
//! Generated programs print each interpolated string as one line. This
//! crate performs that mechanical handoff to a writer; it makes no
//! formatting decisions of its own.

pub use irt_core::{Assembler, FragmentSequence, IrtError, IrtResult};

pub mod transcript;

pub use transcript::Transcript;

use std::io::Write;

/// Assemble `fragments` and write the result plus a newline to `out`.
/// Nothing is written if assembly fails.
pub fn emit_line<W: Write>(
    out: &mut W,
    assembler: &Assembler,
    fragments: &FragmentSequence<'_>,
) -> IrtResult<()> {
    let text = assembler.assemble(fragments)?;
    writeln!(out, "{}", text)?;
    tracing::trace!(bytes = text.len(), "emitted line");
    Ok(())
}

/// Like `emit_line`, also recording the line in `transcript`.
pub fn emit_recorded<W: Write>(
    out: &mut W,
    assembler: &Assembler,
    fragments: &FragmentSequence<'_>,
    transcript: &Transcript,
) -> IrtResult<()> {
    let text = assembler.assemble(fragments)?;
    writeln!(out, "{}", text)?;
    transcript.record(text.into_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use irt_core::{IrtConfig, Value};

    #[test]
    fn emit_line_appends_newline() {
        let mut out = Vec::new();
        let seq = FragmentSequence::new().literal("Count: ").value(42);
        emit_line(&mut out, &Assembler::default(), &seq).expect("emit failed");
        assert_eq!(String::from_utf8(out).unwrap(), "Count: 42\n");
    }

    #[test]
    fn failed_assembly_writes_nothing() {
        let mut config = IrtConfig::new();
        config.initial_capacity = 2;
        config.max_output_len = Some(4);
        let assembler = Assembler::from_config(&config);

        let mut out = Vec::new();
        let seq = FragmentSequence::new().value(Value::Text("too long"));
        let res = emit_line(&mut out, &assembler, &seq);
        assert!(matches!(res, Err(IrtError::AllocationFailure { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn emit_recorded_keeps_transcript() {
        let mut out = Vec::new();
        let transcript = Transcript::new();
        let assembler = Assembler::default();
        for n in [1, 2] {
            let seq = FragmentSequence::new().literal("n=").value(n);
            emit_recorded(&mut out, &assembler, &seq, &transcript).expect("emit failed");
        }
        assert_eq!(transcript.lines(), vec!["n=1", "n=2"]);
        assert_eq!(String::from_utf8(out).unwrap(), "n=1\nn=2\n");
    }
}
