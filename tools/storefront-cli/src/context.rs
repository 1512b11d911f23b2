//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use storefront_cache::FileStore;
use storefront_commerce::Storefront;

use crate::config::{CliConfig, CONFIG_FILE_NAME};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the config was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the storefront over the configured local store.
    pub fn storefront(&self) -> Result<Storefront> {
        let path = self.resolve_path(&self.config.store.path);
        self.output
            .debug(&format!("Using store {}", path.display()));
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open store: {}", path.display()))?;
        Ok(Storefront::from_config(
            self.config.storefront.clone(),
            Arc::new(store),
        ))
    }
}

/// Find a config file in the directory tree above `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    let config_names = [CONFIG_FILE_NAME, ".storefront.toml", "storefront.json"];

    start.ancestors().find_map(|dir| {
        config_names
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    })
}
