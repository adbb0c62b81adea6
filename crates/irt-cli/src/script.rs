//! Interpolation scripts
//!
//! A script lists output lines, each a sequence of fragments:
//!
//! ```toml
//! [[line]]
//! fragments = [{ literal = "Count: " }, { int = 42 }]
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use irt_core::{Fragment, FragmentSequence, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default, rename = "line")]
    pub lines: Vec<ScriptLine>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptLine {
    #[serde(default)]
    pub fragments: Vec<ScriptFragment>,
}

/// Owned fragment as written in a script file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFragment {
    Literal(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl ScriptFragment {
    pub fn as_fragment(&self) -> Fragment<'_> {
        match self {
            ScriptFragment::Literal(s) => Fragment::Literal(s),
            ScriptFragment::Int(n) => Fragment::Computed(Value::Int(*n)),
            ScriptFragment::Float(v) => Fragment::Computed(Value::Float(*v)),
            ScriptFragment::Bool(b) => Fragment::Computed(Value::Bool(*b)),
            ScriptFragment::Text(s) => Fragment::Computed(Value::Text(s)),
        }
    }
}

impl ScriptLine {
    pub fn sequence(&self) -> FragmentSequence<'_> {
        self.fragments.iter().map(ScriptFragment::as_fragment).collect()
    }
}

impl Script {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid interpolation script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&text)
    }
}
