//! Interpolation Runtime - CLI
//!
//! Commands:
//! - `demo`: print the demonstration lines of the generated program
//! - `render`: assemble and print every line of an interpolation script
//! - `format`: format a single value

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use irt_core::{Assembler, FloatPolicy, FragmentSequence, IrtConfig, Value};
use irt_host::emit_line;

mod script;

use script::Script;

#[derive(Parser)]
#[command(name = "irt", about = "Interpolation Runtime", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the float rendering policy
    #[arg(long, global = true, value_enum)]
    float_policy: Option<FloatPolicyArg>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demonstration lines
    Demo,

    /// Assemble and print every line of a script
    Render {
        /// Script file
        script: PathBuf,
    },

    /// Format a single value
    Format {
        #[arg(value_enum)]
        kind: Kind,

        /// Raw value, parsed according to `kind`
        #[arg(allow_hyphen_values = true)]
        raw: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FloatPolicyArg {
    Nice,
    FixedSix,
}

impl From<FloatPolicyArg> for FloatPolicy {
    fn from(arg: FloatPolicyArg) -> Self {
        match arg {
            FloatPolicyArg::Nice => FloatPolicy::Nice,
            FloatPolicyArg::FixedSix => FloatPolicy::FixedSix,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Int,
    Float,
    Bool,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;
    let assembler = Assembler::from_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => demo(&mut out, &assembler)?,
        Commands::Render { script } => {
            let script = Script::load(&script)?;
            for line in &script.lines {
                emit_line(&mut out, &assembler, &line.sequence())?;
            }
        }
        Commands::Format { kind, raw } => {
            let value = parse_value(kind, &raw)?;
            let text = assembler.formatter().format(&value)?;
            writeln!(out, "{}", text)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<IrtConfig> {
    let mut config = match &cli.config {
        Some(path) => IrtConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => IrtConfig::new(),
    };
    if let Some(policy) = cli.float_policy {
        config.float_policy = policy.into();
    }
    tracing::debug!(?config, "effective configuration");
    Ok(config)
}

fn parse_value(kind: Kind, raw: &str) -> anyhow::Result<Value<'_>> {
    let value = match kind {
        Kind::Int => Value::Int(raw.parse().with_context(|| format!("not an int: {raw}"))?),
        Kind::Float => Value::Float(raw.parse().with_context(|| format!("not a float: {raw}"))?),
        Kind::Bool => Value::Bool(raw.parse().with_context(|| format!("not a bool: {raw}"))?),
        Kind::Text => Value::Text(raw),
    };
    Ok(value)
}

/// Lines printed by the demonstration program.
fn demo_lines<'a>(msg: &'a str, count: i64, pi: f64) -> Vec<FragmentSequence<'a>> {
    vec![
        FragmentSequence::new().literal("Message: ").value(msg),
        FragmentSequence::new().literal("Count: ").value(count),
        FragmentSequence::new().literal("Pi: ").value(pi),
        FragmentSequence::new()
            .literal("Combined: ")
            .value(msg)
            .literal(" - ")
            .value(count)
            .literal(" - ")
            .value(pi),
        FragmentSequence::new().value(count),
    ]
}

fn demo<W: Write>(out: &mut W, assembler: &Assembler) -> anyhow::Result<()> {
    for seq in demo_lines("Test", 42, 3.14) {
        emit_line(&mut *out, assembler, &seq)?;
    }
    Ok(())
}
