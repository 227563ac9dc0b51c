use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

use crate::strings;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(short, long, action = clap::ArgAction::Count, help = strings::VERBOSE)]
    verbose: u8,

    #[arg(short, long, default_value_t = false, help = strings::QUIET)]
    quiet: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> Result<()> {
        let level = if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Info,
                1 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .try_init()?;
        Ok(())
    }
}

pub(crate) fn init_pbar(total: usize) -> Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}, ETA: {eta}] [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

pub(crate) fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Path {} does not exist", style(path.display()).red());
    }
    if !path.is_file() {
        bail!("Path {} is not a file", style(path.display()).red());
    }
    Ok(())
}

pub(crate) fn validate_output(
    path: &Path,
    force: bool,
) -> Result<()> {
    if path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "File {} already exists. Overwrite?",
                path.display()
            ))
            .default(false)
            .interact()?;
        if !overwrite {
            bail!("Aborted");
        }
    }
    Ok(())
}
