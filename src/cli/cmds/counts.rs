use anyhow::Context;

use crate::base;
use crate::cli;

/// Plot how often each value of a column occurs
///
/// The mean is shown as well if the column is numeric.
#[derive(clap::Parser)]
pub struct Counts {
    /// Column of interest, e.g. 'Review Rating'
    column: String,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Counts {
    pub fn run(&self, table: base::Table, config: &base::Config) -> anyhow::Result<cli::Output> {
        let filtered = cli::util::select_rows(&table, &self.filter_opts)?;
        let counts = filtered
            .value_counts(&self.column)
            .context("failed to count values")?;
        Ok(cli::Output::Barchart(base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            counts,
            term_width: cli::util::term_width(),
        }))
    }
}
