use anyhow::Context;

use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

/// Applies the row selection of `opts` to `table`.
pub fn select_rows(
    table: &base::Table,
    opts: &cli::sharedopts::FilterOpts,
) -> anyhow::Result<base::Table> {
    opts.selection()
        .apply(table)
        .context("failed to apply row filters")
}

/// Returns `given` unless it is empty, in which case returns the configured
/// measures. Fails if both are empty.
pub fn measures_or<'a>(
    given: &'a [base::Measure],
    configured: Option<&'a [base::Measure]>,
    command: &str,
) -> anyhow::Result<&'a [base::Measure]> {
    if !given.is_empty() {
        return Ok(given);
    }
    match configured {
        Some(measures) if !measures.is_empty() => Ok(measures),
        _ => anyhow::bail!("no measures given for '{command}'; pass '--measure' or configure them"),
    }
}
