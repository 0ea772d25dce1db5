use anyhow::Context;

use crate::base;
use crate::cli;

/// Reduce measures per group of rows
///
/// Without '--key', the filtered rows form a single group.
#[derive(clap::Parser)]
pub struct Group {
    /// Column to group by; may be given multiple times
    #[arg(short, long = "key", value_name = "COLUMN")]
    keys: Vec<String>,

    /// Column to reduce, and how
    #[arg(
        short,
        long = "measure",
        value_name = "COLUMN=KIND[:STYLE]",
        long_help = cli::sharedopts::MEASURE_HELP_LONG,
        required = true
    )]
    measures: Vec<base::Measure>,

    /// Output format: 'csv' or 'json'
    #[arg(long, default_value_t = cli::sharedopts::TableFormat::Csv)]
    format: cli::sharedopts::TableFormat,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Group {
    pub fn run(&self, table: base::Table) -> anyhow::Result<cli::Output> {
        let filtered = cli::util::select_rows(&table, &self.filter_opts)?;
        let grouped = base::group::group_by(&filtered, &self.keys, &self.measures)
            .context("failed to group rows")?;
        Ok(cli::Output::Table(grouped, self.format))
    }
}
