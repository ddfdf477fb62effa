//! Application context for the Roster CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use once_cell::unsync::OnceCell;
use tracing::debug;

use roster_core::lookup::{HttpPostcodeResolver, PostalAutofill, PostcodeResolver};
use roster_core::{FileStorage, RecordStore};

use crate::cli::Cli;
use crate::config::{default_store_dir, read_config, RosterConfig};
use crate::ui::UiContext;

use super::resolver::resolve_config_path;

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<RosterConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Config file contents; a missing file means defaults.
    pub fn config(&self) -> anyhow::Result<&RosterConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                debug!(path = %path.display(), "loading config");
                read_config(&path)
            } else {
                debug!(path = %path.display(), "no config file; using defaults");
                Ok(RosterConfig::default())
            }
        })
    }

    /// Store directory: `--store`/`ROSTER_STORE`, then config, then the XDG default.
    pub fn store_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = self.cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = self.config()?.store.path.as_deref() {
            return Ok(PathBuf::from(path));
        }
        default_store_dir()
    }

    pub fn open_store(&self) -> anyhow::Result<RecordStore<FileStorage>> {
        let dir = self.store_dir()?;
        debug!(dir = %dir.display(), "opening store");
        Ok(RecordStore::new(FileStorage::new(dir)))
    }

    /// Postcode resolver, or `None` when lookups are switched off.
    pub fn resolver(&self) -> anyhow::Result<Option<Arc<dyn PostcodeResolver>>> {
        if self.cli.offline {
            debug!("postcode lookup disabled by --offline");
            return Ok(None);
        }
        let lookup = &self.config()?.lookup;
        if !lookup.enabled {
            debug!("postcode lookup disabled in config");
            return Ok(None);
        }
        let resolver = HttpPostcodeResolver::new(
            lookup.endpoint.clone(),
            Duration::from_millis(lookup.timeout_ms),
        )?;
        Ok(Some(Arc::new(resolver)))
    }

    /// Auto-fill driver for one form, if lookups are enabled.
    pub fn autofill(&self) -> anyhow::Result<Option<PostalAutofill>> {
        Ok(self.resolver()?.map(PostalAutofill::new))
    }

    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
