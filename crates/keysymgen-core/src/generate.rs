// Keysymgen Pipeline
// Parsers -> Resolver -> Emitter over three in-memory header texts

use std::fmt;

use crate::emit::{render, Emitter};
use crate::overrides::Overrides;
use crate::parse::{ParseError, PrimaryTable, ToolkitTable, VendorTable};
use crate::resolve::{DecisionTable, ResolveError, Resolver};

/// Full text of the three definition headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTexts {
    /// keysymdef.h
    pub keysymdef: String,
    /// XF86keysym.h
    pub vendor: String,
    /// qnamespace.h
    pub toolkit: String,
}

/// Fatal generation errors. No output is produced when one occurs.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to render output: {0}")]
    Emit(#[from] fmt::Error),
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct Generated {
    pub table: DecisionTable,
    /// The rendered artifact
    pub output: String,
}

/// Parse all three sources and resolve them into a decision table
pub fn build_table(
    sources: &SourceTexts,
    overrides: &Overrides,
) -> Result<DecisionTable, GenerateError> {
    let primary = PrimaryTable::parse(&sources.keysymdef)?;
    let vendor = VendorTable::parse(&sources.vendor)?;
    let toolkit = ToolkitTable::parse(&sources.toolkit)?;
    Ok(Resolver::new(&primary, &vendor, overrides).resolve(&toolkit)?)
}

/// Build the decision table and render it with `emitter`
pub fn generate(
    sources: &SourceTexts,
    overrides: &Overrides,
    emitter: &dyn Emitter,
) -> Result<Generated, GenerateError> {
    let table = build_table(sources, overrides)?;
    let output = render(&table, emitter)?;
    Ok(Generated { table, output })
}
