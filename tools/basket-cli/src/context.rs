//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use basket_cache::FileBackend;
use basket_cart::prelude::{CartStore, Catalog};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file in effect, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = cwd.join(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            tracing::debug!(path = %path.display(), "using config file");
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Directory relative config paths are resolved against: the config
    /// file's directory, or the working directory without one.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Resolve a path relative to [`Context::base_dir`].
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.base_dir().join(path)
        }
    }

    /// Open the cart store described by `[storage]`.
    pub fn store(&self) -> Result<CartStore<FileBackend>> {
        let dir = self.resolve_path(&self.config.storage.dir);
        let backend = FileBackend::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;
        Ok(CartStore::with_key(backend, self.config.storage.key.clone()))
    }

    /// Load the catalog described by `[catalog]`.
    pub fn catalog(&self) -> Result<Catalog> {
        let path = self.resolve_path(&self.config.catalog.path);
        Ok(Catalog::load(path)?)
    }
}

#[cfg(test)]
impl Context {
    /// Context rooted at `dir` with default config and quiet JSON output.
    pub fn for_dir(dir: &Path) -> Self {
        Self {
            config: CliConfig::default(),
            output: Output::new(false, true),
            cwd: dir.to_path_buf(),
            config_path: None,
        }
    }
}

/// Find a config file in `start` or its parents.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}
