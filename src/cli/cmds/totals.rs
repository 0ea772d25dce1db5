use anyhow::Context;

use crate::base;
use crate::cli;

/// Summarize the filtered rows
///
/// Settings not given on the command line are taken from the 'totals' section
/// of the config. Growth compares the sums of two columns over the filtered
/// rows, relative to the sum of the previous column over the whole dataset.
#[derive(clap::Parser)]
pub struct Totals {
    /// Column to reduce, and how
    #[arg(
        short,
        long = "measure",
        value_name = "COLUMN=KIND[:STYLE]",
        long_help = cli::sharedopts::MEASURE_HELP_LONG
    )]
    measures: Vec<base::Measure>,

    /// Column holding current values for growth
    #[arg(long, value_name = "COLUMN", requires = "growth_previous")]
    growth_current: Option<String>,

    /// Column holding previous values for growth
    #[arg(long, value_name = "COLUMN", requires = "growth_current")]
    growth_previous: Option<String>,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Totals {
    pub fn run(&self, table: base::Table, config: &base::Config) -> anyhow::Result<cli::Output> {
        let configured = config.totals.as_ref();
        let measures = cli::util::measures_or(
            &self.measures,
            configured.map(|c| c.measures.as_slice()),
            "totals",
        )?;
        let growth = match (&self.growth_current, &self.growth_previous) {
            (Some(current), Some(previous)) => Some(base::totals::Growth {
                current: current.clone(),
                previous: previous.clone(),
            }),
            _ => configured.and_then(|c| c.growth.clone()),
        };
        let totals_config = base::totals::Config {
            measures: measures.to_vec(),
            growth,
        };

        let filtered = cli::util::select_rows(&table, &self.filter_opts)?;
        let totals = totals_config
            .compute(&filtered, &table)
            .context("failed to compute totals")?;
        Ok(cli::Output::Totals(base::tree::fortotals::Config {
            charset: cli::util::charset_from_config(config),
            totals,
        }))
    }
}
