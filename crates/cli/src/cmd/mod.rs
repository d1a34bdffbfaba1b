//! Subcommands and the plumbing they share.

pub mod check;
pub mod doctor;
pub mod output;
pub mod render;
pub mod vars;

use easy_templates_core::config::loader::{default_config_path, ConfigLoader};
use easy_templates_core::config::types::ResolvedConfig;
use easy_templates_core::store::{JsonFileStore, StoreError, VariableStore};
use easy_templates_core::template::{TemplateEngine, VariableSet};
use std::fs;
use std::path::Path;

use crate::logging;

/// Load config, applying the `--store` override. Exits on failure.
pub fn load_config(config: Option<&Path>, store: Option<&Path>) -> ResolvedConfig {
    match ConfigLoader::load(config) {
        Ok(mut rc) => {
            if let Some(p) = store {
                rc.store_path = p.to_path_buf();
            }
            rc
        }
        Err(e) => {
            println!("FAIL etpl");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Print a failure for `cmd` and exit with status 1.
pub fn fail(cmd: &str, message: impl std::fmt::Display) -> ! {
    println!("FAIL etpl {cmd}");
    println!("{message}");
    logging::flush();
    std::process::exit(1);
}

pub fn read_template(cmd: &str, file: &Path) -> String {
    fs::read_to_string(file).unwrap_or_else(|e| {
        fail(cmd, format!("failed to read template {}: {e}", file.display()))
    })
}

pub fn open_store(cmd: &str, cfg: &ResolvedConfig) -> JsonFileStore {
    JsonFileStore::open(&cfg.store_path, &cfg.namespace).unwrap_or_else(|e| fail(cmd, e))
}

/// Seeds values from a store without ever writing to it.
pub struct ReadOnly<S>(pub S);

impl<S: VariableStore> VariableStore for ReadOnly<S> {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name)
    }

    fn save(&mut self, _variables: &VariableSet) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Parse `file` against the configured store without persisting anything.
pub fn inspect(cmd: &str, cfg: &ResolvedConfig, file: &Path) -> TemplateEngine<ReadOnly<JsonFileStore>> {
    let template = read_template(cmd, file);
    let store = ReadOnly(open_store(cmd, cfg));
    TemplateEngine::new(store, template).unwrap_or_else(|e| fail(cmd, e))
}
