use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::debug;
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "depclosure")]
#[command(version)]
#[command(about = "Print every file reachable from the given entry files", long_about = None)]
pub struct Config {
    /// Entry files to start from (stylesheet, typed-script or script)
    #[arg(required = true, num_args = 1..)]
    pub entries: Vec<PathBuf>,

    #[clap(skip)]
    pub cwd: Option<PathBuf>,
}

impl Config {
    /// Initialize the config by capturing the working directory bare specifiers resolve against
    pub fn initialize(&mut self) -> Result<()> {
        if self.cwd.is_none() {
            let cwd = env::current_dir().context("Failed to read the current working directory")?;
            debug!("Using working directory: {}", cwd.display());
            self.cwd = Some(cwd);
        }
        Ok(())
    }

    /// Get the working directory, returning an error if not initialized
    pub fn cwd(&self) -> Result<&PathBuf> {
        self.cwd.as_ref().ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}
