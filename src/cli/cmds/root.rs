use anyhow::Context;

use crate::base;
use crate::cli;

/// Hierarchical rollups and KPI summaries of tabular datasets
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Rollup(cli::cmds::rollup::Rollup),
    Kpi(cli::cmds::kpi::Kpi),
    Totals(cli::cmds::totals::Totals),
    Counts(cli::cmds::counts::Counts),
    Group(cli::cmds::group::Group),
    Top(cli::cmds::top::Top),
    Cols(cli::cmds::cols::Cols),
}

/// Loads the configured dataset and adds derived columns to it.
fn load(fs: &base::Fs, config: &base::Config) -> anyhow::Result<base::Table> {
    let mut table = fs.read_table(config).with_context(|| {
        format!("failed to read '{}'", fs.dataset_path(config).display())
    })?;
    for d in config.derived.iter() {
        d.apply(&mut table)
            .with_context(|| format!("failed to derive column '{}'", d.name))?;
    }
    Ok(table)
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let table = load(fs, &config)?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Rollup(cmd) => cmd.run(table, &config),
            Commands::Kpi(cmd) => cmd.run(table, &config),
            Commands::Totals(cmd) => cmd.run(table, &config),
            Commands::Counts(cmd) => cmd.run(table, &config),
            Commands::Group(cmd) => cmd.run(table),
            Commands::Top(cmd) => cmd.run(table),
            Commands::Cols(cmd) => cmd.run(table),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::cli::testing;

    #[rstest]
    #[case(&["", "rollup"])]
    #[case(&["", "kpi"])]
    #[case(&["", "totals"])]
    #[case(&["", "counts", "Season"])]
    #[case(&["", "group", "-m", "Age=mean"])]
    #[case(&["", "top", "Age"])]
    #[case(&["", "cols"])]
    fn test_error_if_not_a_repo(#[case] args: &[&str]) {
        let (fs, _td) = testing::tempfs();
        let root = match <Root as clap::Parser>::try_parse_from(args) {
            Ok(cmd) => cmd,
            Err(e) => panic!("{}", e),
        };
        let res = root.run(&fs);
        assert!(matches!(res, Err(ref e) if e.to_string() == "not a repository"))
    }

    testing::generate_testcases![
        (
            missing_dataset,
            testing::Case {
                invocations: &[testing::Invocation {
                    args: &["", "cols"],
                    res: testing::ResultMatcher::ErrGlob("failed to read '*sales.csv': *"),
                }],
                initial_state: testing::StrState::new().with_config(r#"{"dataset":"sales.csv"}"#),
            }
        ),
        (
            invalid_derived_column,
            testing::Case {
                invocations: &[testing::Invocation {
                    args: &["", "cols"],
                    res: testing::ResultMatcher::ErrGlob(
                        "failed to derive column 'c': missing column 'z'"
                    ),
                }],
                initial_state: testing::StrState::new()
                    .with_config(
                        r#"{"derived":[{"name":"c","left":"a","op":"+","right":"z"}]}"#
                    )
                    .with_dataset("a,b\n1,2\n"),
            }
        ),
        (
            derived_column,
            testing::Case {
                invocations: &[testing::Invocation {
                    args: &["", "cols"],
                    res: testing::ResultMatcher::OkRendered("a  number\nb  text\nc  number\n"),
                }],
                initial_state: testing::StrState::new()
                    .with_config(
                        r#"{"derived":[{"name":"c","left":"a","op":"/","right":"a"}]}"#
                    )
                    .with_dataset("a,b\n1,x\n2,y\n"),
            }
        ),
    ];
}
