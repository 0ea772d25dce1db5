use crate::base;

pub const FILTER_HELP_LONG: &str = "Keep only rows whose COLUMN matches any of the given patterns

Must be in the format 'COLUMN=PATTERNS', where PATTERNS is a comma separated list of wildcard patterns ('*' matches any run of characters, '?' matches one character). Numbers are matched by their printed form, empty cells by an empty pattern.

May be given multiple times, in which case a row must pass every filter.";

pub const EXCLUDE_HELP_LONG: &str = "Drop rows whose COLUMN matches any of the given patterns

Same format as '--where'. May be given multiple times, in which case a row matching any of them is dropped. Takes precedence over '--where'.";

pub const MEASURE_HELP_LONG: &str = "Column to reduce, and how

Must be in the format 'COLUMN=KIND[:STYLE]'. KIND is one of 'sum', 'mean' or 'count'. STYLE is one of 'plain' (default), 'thousand' (123K), 'million' ($1.2B for values in millions) or 'percent'.";

#[derive(clap::Args)]
pub struct FilterOpts {
    /// Keep only rows whose COLUMN matches any of the given patterns
    #[arg(
        short = 'w',
        long = "where",
        value_name = "COLUMN=PATTERNS",
        long_help = FILTER_HELP_LONG
    )]
    pub include: Vec<base::Filter>,

    /// Drop rows whose COLUMN matches any of the given patterns
    #[arg(
        short = 'x',
        long,
        value_name = "COLUMN=PATTERNS",
        long_help = EXCLUDE_HELP_LONG
    )]
    pub exclude: Vec<base::Filter>,
}

impl FilterOpts {
    pub fn selection(&self) -> base::Selection {
        base::Selection {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Csv,
    Json,
}
