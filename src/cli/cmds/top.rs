use anyhow::Context;

use crate::base;
use crate::cli;

/// List the rows with the largest values in a column
#[derive(clap::Parser)]
pub struct Top {
    /// Column to rank rows by, e.g. 'MarketCap'
    column: String,

    /// Number of rows to list
    #[arg(short, default_value_t = 5)]
    n: usize,

    /// Columns to show; defaults to every column
    #[arg(short, long, value_name = "COLUMNS", value_delimiter = ',')]
    select: Vec<String>,

    /// Output format: 'csv' or 'json'
    #[arg(long, default_value_t = cli::sharedopts::TableFormat::Csv)]
    format: cli::sharedopts::TableFormat,

    #[command(flatten)]
    filter_opts: cli::sharedopts::FilterOpts,
}

impl Top {
    pub fn run(&self, table: base::Table) -> anyhow::Result<cli::Output> {
        let mut ranked = cli::util::select_rows(&table, &self.filter_opts)?;
        ranked
            .sort_descending(&self.column)
            .context("failed to rank rows")?;
        ranked.truncate(self.n);
        if !self.select.is_empty() {
            ranked = ranked
                .select(&self.select)
                .context("failed to select columns")?;
        }
        Ok(cli::Output::Table(ranked, self.format))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const DATASET: &str = indoc!(
        "
        CompanyID,CompanyName,Year,MarketCap
        1,Acme,2023,120.5
        2,Globex,2023,980
        3,Initech,2023,
        4,Umbrella,2023,450
        2,Globex,2022,900
        "
    );

    cli::testing::generate_testcases![
        (
            default_columns,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "top", "MarketCap", "-n", "2", "-w", "Year=2023"],
                    res: cli::testing::ResultMatcher::OkRendered(indoc!(
                        "
                        CompanyID,CompanyName,Year,MarketCap
                        2,Globex,2023,980
                        4,Umbrella,2023,450
                        "
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_dataset(DATASET),
            }
        ),
        (
            selected_columns,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &[
                        "",
                        "top",
                        "MarketCap",
                        "-s",
                        "CompanyName,MarketCap",
                        "-x",
                        "Year=2022",
                    ],
                    res: cli::testing::ResultMatcher::OkRendered(indoc!(
                        "
                        CompanyName,MarketCap
                        Globex,980
                        Umbrella,450
                        Acme,120.5
                        Initech,
                        "
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_dataset(DATASET),
            }
        ),
        (
            missing_column,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "top", "MarketCap", "-s", "Ticker"],
                    res: cli::testing::ResultMatcher::ErrGlob(
                        "failed to select columns: missing column 'Ticker'"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config("{}")
                    .with_dataset(DATASET),
            }
        ),
    ];
}
