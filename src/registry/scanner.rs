//! Module discovery
//!
//! Scans the built-in candidate list and the configured plugin directory,
//! loads each candidate's declaration, validates it against the contract,
//! and builds the registry. Every per-candidate failure is captured in the
//! scan report rather than aborting the scan, so one broken plugin never
//! takes the whole catalog down.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::builtin;
use crate::contract::ContractValidator;
use crate::declaration::{EntryFn, ModuleDeclaration};
use crate::loader::{is_plugin_library, PluginLoader};
use crate::registry::{Collision, ModuleDescriptor, Registry, ScanFault, ScanReport};
use crate::traits::ModuleError;

// Revision markers as emitted by the repository keyword expansion,
// e.g. `$Revision: 10987 $`.
static REVISION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$Revision: ([0-9]+) \$$").expect("revision pattern"));

/// Where a candidate's declaration comes from.
pub enum UnitSource {
    /// Compiled-in entry point.
    Entry(EntryFn),
    /// Plugin library on disk.
    Library(PathBuf),
}

/// One loadable unit to attempt during a scan.
pub struct Candidate {
    /// Identifier used in fault and collision reporting. Not the canonical
    /// name, which is only known once the unit loads.
    pub identifier: String,
    /// Declaration source.
    pub source: UnitSource,
}

impl Candidate {
    /// Built-in candidate backed by a compiled-in entry point.
    pub fn builtin(identifier: impl Into<String>, entry: EntryFn) -> Self {
        Self {
            identifier: identifier.into(),
            source: UnitSource::Entry(entry),
        }
    }

    /// Plugin candidate backed by a library on disk.
    pub fn plugin(path: PathBuf) -> Self {
        Self {
            identifier: path.display().to_string(),
            source: UnitSource::Library(path),
        }
    }
}

/// Module discovery scanner.
pub struct ModuleScanner {
    builtins: Vec<Candidate>,
    plugin_dir: Option<PathBuf>,
}

impl ModuleScanner {
    /// Scanner over the compiled-in built-in modules, no plugin directory.
    pub fn new() -> Self {
        Self {
            builtins: builtin::candidates(),
            plugin_dir: None,
        }
    }

    /// Scanner over an explicit candidate list. The candidates take the
    /// built-in slot: they are scanned first, with revision recording.
    pub fn with_candidates(builtins: Vec<Candidate>) -> Self {
        Self {
            builtins,
            plugin_dir: None,
        }
    }

    /// Set the plugin directory to list at scan time.
    pub fn plugin_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.plugin_dir = Some(dir.into());
        self
    }

    /// Set or clear the plugin directory from configuration.
    pub fn plugin_dir_opt(mut self, dir: Option<PathBuf>) -> Self {
        self.plugin_dir = dir;
        self
    }

    /// Run a full scan: built-ins strictly before plugins, each group in
    /// deterministic order. Returns the freshly built registry and the
    /// scan's fault ledger; never fails as a whole.
    pub fn scan(&self, loader: &mut PluginLoader) -> (Registry, ScanReport) {
        info!(builtins = self.builtins.len(), "scanning modules");

        let mut registry = Registry::default();
        let mut report = ScanReport::default();

        for candidate in &self.builtins {
            self.add_candidate(candidate, true, loader, &mut registry, &mut report);
        }

        for candidate in self.plugin_candidates(&mut report) {
            // Revision tracking is a built-in-only feature.
            self.add_candidate(&candidate, false, loader, &mut registry, &mut report);
        }

        registry.finish();

        if report.faults.is_empty() {
            info!(modules = registry.len(), "module scan complete");
        } else {
            warn!(
                modules = registry.len(),
                failed = report.faults.len(),
                "module scan complete; some modules could not be loaded"
            );
            for fault in &report.faults {
                warn!(identifier = %fault.identifier, error = %fault.error, "module load failure");
            }
        }

        (registry, report)
    }

    /// List the plugin directory, if configured. An unset directory is not
    /// an error; an unreadable one is recorded as a fault against the
    /// directory itself.
    fn plugin_candidates(&self, report: &mut ScanReport) -> Vec<Candidate> {
        let Some(dir) = &self.plugin_dir else {
            debug!("no plugin directory configured, skipping plugin discovery");
            return Vec::new();
        };

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                report.faults.push(ScanFault {
                    identifier: dir.display().to_string(),
                    error: ModuleError::LoadFailed(format!(
                        "failed to list plugin directory: {e}"
                    )),
                });
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_plugin_library(path))
            .collect();
        // Listing order is filesystem-dependent; sort so collision
        // resolution is deterministic.
        paths.sort();

        debug!(dir = %dir.display(), plugins = paths.len(), "plugin directory listed");
        paths.into_iter().map(Candidate::plugin).collect()
    }

    /// Attempt one candidate. Any failure is appended to the report and the
    /// candidate is rolled back; the scan then moves on.
    fn add_candidate(
        &self,
        candidate: &Candidate,
        record_revision: bool,
        loader: &mut PluginLoader,
        registry: &mut Registry,
        report: &mut ScanReport,
    ) {
        let (library, declaration) = match self.load_unit(candidate, loader) {
            Ok(loaded) => loaded,
            Err(error) => {
                warn!(identifier = %candidate.identifier, %error, "failed to load module unit");
                report.faults.push(ScanFault {
                    identifier: candidate.identifier.clone(),
                    error,
                });
                return;
            }
        };

        let name = declaration.name.clone();

        if let Some(previous) = registry.lookup(&name) {
            warn!(
                module = %name,
                old = %previous.origin,
                new = %candidate.identifier,
                "multiple definitions of module; later registration wins"
            );
            report.collisions.push(Collision {
                name: name.clone(),
                previous_origin: previous.origin.clone(),
                new_origin: candidate.identifier.clone(),
            });
        }

        registry.insert(ModuleDescriptor::new(
            name.clone(),
            candidate.identifier.clone(),
            declaration.constructor,
            library,
        ));

        // Registration is tentative until the contract check and the smoke
        // instantiation both pass.
        if let Err(error) = self.admit(&declaration, &name, registry) {
            registry.remove(&name);
            report.faults.push(ScanFault {
                identifier: candidate.identifier.clone(),
                error,
            });
            return;
        }

        if record_revision {
            if let Some(marker) = &declaration.revision {
                if let Some(captures) = REVISION_MARKER.captures(marker) {
                    registry.set_revision(&name, captures[1].to_string());
                }
            }
        }

        debug!(module = %name, origin = %candidate.identifier, "module registered");
    }

    /// Contract validation and smoke instantiation for a tentatively
    /// registered candidate.
    fn admit(
        &self,
        declaration: &ModuleDeclaration,
        name: &str,
        registry: &mut Registry,
    ) -> Result<(), ModuleError> {
        ContractValidator::check_declaration(declaration)?;

        let instance = (declaration.constructor)()
            .map_err(|e| ModuleError::ConstructionFailed(name.to_string(), e.to_string()))?;
        ContractValidator::check_instance(declaration, instance.as_ref())?;

        if instance.is_data_tool() {
            registry.add_data_tool(name);
        }

        Ok(())
    }

    fn load_unit(
        &self,
        candidate: &Candidate,
        loader: &mut PluginLoader,
    ) -> Result<(Option<Arc<libloading::Library>>, ModuleDeclaration), ModuleError> {
        match &candidate.source {
            UnitSource::Entry(entry) => Ok((None, entry()?)),
            UnitSource::Library(path) => {
                let (library, declaration) = loader.load(path)?;
                Ok((Some(library), declaration))
            }
        }
    }
}

impl Default for ModuleScanner {
    fn default() -> Self {
        Self::new()
    }
}
