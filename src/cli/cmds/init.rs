use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize repository in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing repository's config to defaults
    #[arg(long, conflicts_with = "preset")]
    reset_config: bool,

    /// Write a ready-made config for a known dataset
    ///
    /// 'shopping' expects 'shopping_trends_updated.csv', 'esg' expects
    /// 'company_esg_financial_dataset.csv'. Overwrites any existing config.
    #[arg(long, value_name = "NAME")]
    preset: Option<base::config::Preset>,
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let path = fs.path::<base::Config>();
        let config = match self.preset {
            Some(preset) => base::Config::preset(preset),
            None if self.reset_config => base::Config::default(),
            None => fs
                .read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?,
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote config");

        Ok(if !already_repo {
            cli::Output::Str(format!(
                "Repository initialized in '{}'",
                fs.dir().display()
            ))
        } else if let Some(preset) = self.preset {
            cli::Output::Str(format!("Repository configuration set to preset '{}'.", preset))
        } else if self.reset_config {
            cli::Output::Str("Repository configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!(
                "Repository reinitialized in '{}'",
                fs.dir().display()
            ))
        })
    }
}
