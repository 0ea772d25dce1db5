use anyhow::Context;

use crate::base;
use crate::cli;

/// List the dataset's columns and their types
///
/// A column is a number column if it holds at least one number and nothing
/// but numbers and empty cells.
#[derive(clap::Parser)]
pub struct Cols {}

impl Cols {
    pub fn run(&self, table: base::Table) -> anyhow::Result<cli::Output> {
        if table.columns().is_empty() {
            return Ok(cli::Output::Str("No columns.".to_string()));
        }
        let width = table
            .columns()
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or_default();
        let mut lines = Vec::with_capacity(table.columns().len());
        for c in table.columns() {
            let kind = if table.is_numeric(c).context("failed to inspect columns")? {
                "number"
            } else {
                "text"
            };
            lines.push(format!("{:<width$}  {}", c, kind, width = width));
        }
        Ok(cli::Output::Str(lines.join("\n")))
    }
}
