use anyhow::Context;

use crate::base;
use crate::cli;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Format {
    #[default]
    Tree,
    Csv,
    Json,
}

/// Roll rows up into a root, coarse groups and fine groups
///
/// Settings not given on the command line are taken from the 'rollup' section
/// of the config. The root's sums and counts always cover the whole dataset;
/// everything else covers the filtered rows only. With a filter active, the
/// root's count can therefore exceed the total count of its children. Means
/// of the root cover the filtered rows.
///
/// A measure column is named after its source column, or 'COLUMN (KIND)' when
/// two measures read the same column or the name is taken by 'id', 'parent',
/// 'label', 'coarse_text' or 'fine_text'.
#[derive(clap::Parser)]
pub struct Rollup {
    /// Column holding the outer grouping, e.g. 'Season'
    #[arg(long, value_name = "COLUMN")]
    coarse: Option<String>,

    /// Column holding the inner grouping, e.g. 'Item Purchased'
    #[arg(long, value_name = "COLUMN")]
    fine: Option<String>,

    /// Column to reduce, and how
    #[arg(
        short,
        long = "measure",
        value_name = "COLUMN=KIND[:STYLE]",
        long_help = cli::sharedopts::MEASURE_HELP_LONG
    )]
    measures: Vec<base::Measure>,

    /// Output format: 'tree', or the node table as 'csv' or 'json'
    #[arg(long, default_value_t = Format::Tree)]
    format: Format,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Rollup {
    fn resolve(&self, config: &base::Config) -> anyhow::Result<base::rollup::Config> {
        let mut resolved = match &config.rollup {
            Some(c) => c.clone(),
            None => {
                let (Some(coarse), Some(fine)) = (&self.coarse, &self.fine) else {
                    anyhow::bail!(
                        "no rollup configured; pass '--coarse', '--fine' and '--measure'"
                    );
                };
                base::rollup::Config {
                    coarse: coarse.clone(),
                    fine: fine.clone(),
                    measures: Vec::new(),
                    root_label: "All".into(),
                    ids: Default::default(),
                }
            }
        };
        if let Some(coarse) = &self.coarse {
            resolved.coarse = coarse.clone();
        }
        if let Some(fine) = &self.fine {
            resolved.fine = fine.clone();
        }
        let configured = Some(resolved.measures.as_slice());
        resolved.measures = cli::util::measures_or(&self.measures, configured, "rollup")?.to_vec();
        Ok(resolved)
    }

    pub fn run(&self, table: base::Table, config: &base::Config) -> anyhow::Result<cli::Output> {
        let rollup_config = self.resolve(config)?;
        let filtered = cli::util::select_rows(&table, &self.filter_opts)?;
        let rollup = rollup_config
            .build(&filtered, &table)
            .context("failed to build rollup")?;
        let nodes = rollup
            .to_table(&rollup_config.ids)
            .context("failed to build rollup")?;
        Ok(match self.format {
            Format::Tree => cli::Output::Rollup(base::tree::forrollup::Config {
                charset: cli::util::charset_from_config(config),
                rollup,
            }),
            Format::Csv => cli::Output::Table(nodes, cli::sharedopts::TableFormat::Csv),
            Format::Json => cli::Output::Table(nodes, cli::sharedopts::TableFormat::Json),
        })
    }
}
