//! Module catalog lifecycle
//!
//! Owns the scanner, the plugin loader cache, and the published registry
//! snapshot. A scan builds a complete new registry and report in isolation,
//! then publishes them with one reference swap, so readers always observe
//! either the fully-old or the fully-new catalog, never a partial one.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::info;

use crate::config::CatalogConfig;
use crate::loader::PluginLoader;
use crate::registry::scanner::ModuleScanner;
use crate::registry::{Registry, ScanReport};
use crate::resolver::{self, ResolveError, ResolvedModule};

/// One scan's complete output.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    /// The registry built by the scan.
    pub registry: Registry,
    /// The scan's fault ledger.
    pub report: ScanReport,
}

/// Process-wide module catalog.
pub struct ModuleCatalog {
    scanner: ModuleScanner,
    loader: Mutex<PluginLoader>,
    state: RwLock<Arc<CatalogSnapshot>>,
}

impl ModuleCatalog {
    /// Catalog over the built-in modules plus the configured plugin
    /// directory. Empty until the first [`scan`](Self::scan).
    pub fn new(config: &CatalogConfig) -> Self {
        Self::with_scanner(ModuleScanner::new().plugin_dir_opt(config.plugin_dir.clone()))
    }

    /// Catalog over an explicit scanner.
    pub fn with_scanner(scanner: ModuleScanner) -> Self {
        Self {
            scanner,
            loader: Mutex::new(PluginLoader::new()),
            state: RwLock::new(Arc::new(CatalogSnapshot::default())),
        }
    }

    /// Run a full scan and publish the result.
    pub fn scan(&self) {
        let (registry, report) = {
            let mut loader = self.loader.lock().unwrap_or_else(PoisonError::into_inner);
            self.scanner.scan(&mut loader)
        };
        let snapshot = Arc::new(CatalogSnapshot { registry, report });
        *self
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    /// Pick up plugin changes: best-effort re-open of every previously
    /// loaded plugin library, then a full rescan. The only supported way to
    /// refresh the catalog after startup.
    pub fn reload(&self) {
        info!("reloading module catalog");
        {
            let mut loader = self.loader.lock().unwrap_or_else(PoisonError::into_inner);
            loader.refresh();
        }
        self.scan();
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(
            &self
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Resolve a (possibly historical) module name against the current
    /// snapshot.
    pub fn resolve(&self, requested: &str) -> Result<ResolvedModule, ResolveError> {
        let snapshot = self.snapshot();
        resolver::resolve(&snapshot.registry, requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::ModuleDeclaration;
    use crate::registry::scanner::Candidate;
    use crate::traits::{Module, ModuleError, PipelineContext, Setting};

    struct Gamma;

    impl Module for Gamma {
        fn name(&self) -> &str {
            "Gamma"
        }
        fn create_settings(&mut self) {}
        fn settings(&self) -> Vec<Setting> {
            vec![Setting::new("Select the input image", "None")]
        }
        fn run(&mut self, _cx: &mut PipelineContext) -> Result<(), ModuleError> {
            Ok(())
        }
    }

    fn gamma_entry() -> Result<ModuleDeclaration, ModuleError> {
        Ok(ModuleDeclaration::new("Gamma", || Ok(Box::new(Gamma))))
    }

    #[test]
    fn catalog_is_empty_until_first_scan() {
        let catalog = ModuleCatalog::with_scanner(ModuleScanner::with_candidates(vec![
            Candidate::builtin("gamma", gamma_entry),
        ]));
        assert!(catalog.snapshot().registry.is_empty());
        catalog.scan();
        assert_eq!(catalog.snapshot().registry.len(), 1);
    }

    #[test]
    fn old_snapshot_survives_a_rescan() {
        let catalog = ModuleCatalog::with_scanner(ModuleScanner::with_candidates(vec![
            Candidate::builtin("gamma", gamma_entry),
        ]));
        catalog.scan();
        let before = catalog.snapshot();
        catalog.reload();
        // A reader holding the old snapshot keeps a complete registry even
        // though the catalog has moved on.
        assert_eq!(before.registry.len(), 1);
        assert_eq!(catalog.snapshot().registry.len(), 1);
    }

    #[test]
    fn resolve_goes_through_the_current_snapshot() {
        let catalog = ModuleCatalog::with_scanner(ModuleScanner::with_candidates(vec![
            Candidate::builtin("gamma", gamma_entry),
        ]));
        catalog.scan();
        let resolved = catalog.resolve("Gamma").unwrap();
        assert_eq!(resolved.name(), "Gamma");
    }
}
