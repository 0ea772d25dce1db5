use crate::base;
use crate::cli::sharedopts::TableFormat;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Table(base::Table, TableFormat),
    Rollup(base::tree::forrollup::Config),
    /// `None` if no row falls within a period.
    Kpi(Option<base::tree::forkpi::Config>),
    Totals(base::tree::fortotals::Config),
    Barchart(base::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Table(table, TableFormat::Csv) => write!(f, "{}", table),
            Output::Table(table, TableFormat::Json) => {
                let s = serde_json::to_string_pretty(table).map_err(|_| std::fmt::Error)?;
                writeln!(f, "{}", s)
            }
            Output::Rollup(config) => write!(f, "{}", config.to_tree()),
            Output::Kpi(None) => writeln!(f, "No data."),
            Output::Kpi(Some(config)) => write!(f, "{}", config.to_tree()),
            Output::Totals(config) => write!(f, "{}", config.to_tree()),
            Output::Barchart(config) => {
                if config.counts.is_empty() {
                    writeln!(f, "No data.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
        }
    }
}
