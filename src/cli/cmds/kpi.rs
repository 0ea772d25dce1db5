use anyhow::Context;

use crate::base;
use crate::cli;

/// Compare the latest period against the previous one
///
/// Settings not given on the command line are taken from the 'kpi' section of
/// the config.
#[derive(clap::Parser)]
pub struct Kpi {
    /// Column holding the period, e.g. 'Year'
    #[arg(long, value_name = "COLUMN")]
    by: Option<String>,

    /// Column to reduce, and how
    #[arg(
        short,
        long = "measure",
        value_name = "COLUMN=KIND[:STYLE]",
        long_help = cli::sharedopts::MEASURE_HELP_LONG
    )]
    measures: Vec<base::Measure>,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Kpi {
    pub fn run(&self, table: base::Table, config: &base::Config) -> anyhow::Result<cli::Output> {
        let configured = config.kpi.as_ref();
        let Some(period) = self.by.as_ref().or(configured.map(|c| &c.period)) else {
            anyhow::bail!("no period column configured; pass '--by'");
        };
        let measures = cli::util::measures_or(
            &self.measures,
            configured.map(|c| c.measures.as_slice()),
            "kpi",
        )?;
        let kpi_config = base::kpi::Config {
            period: period.clone(),
            measures: measures.to_vec(),
        };

        let filtered = cli::util::select_rows(&table, &self.filter_opts)?;
        let kpi = kpi_config
            .compute(&filtered)
            .context("failed to compute KPIs")?;
        Ok(cli::Output::Kpi(kpi.map(|kpi| {
            base::tree::forkpi::Config {
                charset: cli::util::charset_from_config(config),
                kpi,
            }
        })))
    }
}
