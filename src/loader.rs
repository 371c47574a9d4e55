//! Plugin unit loading
//!
//! Loads plugin libraries from disk and resolves their well-known entry
//! point. Opened libraries are cached by path: a scan reuses the cached
//! handle, and [`PluginLoader::refresh`] re-opens each one best-effort so a
//! plugin that fails to reload keeps its previously loaded state.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::{Library, Symbol};
use tracing::{debug, warn};

use crate::declaration::{EntryFn, ModuleDeclaration, MODULE_ABI_VERSION};
use crate::traits::ModuleError;

/// Entry symbol every plugin library exports.
pub const ENTRY_SYMBOL: &[u8] = b"cytopipe_module_entry\0";

/// Loads plugin libraries and keeps them alive.
#[derive(Default)]
pub struct PluginLoader {
    cache: HashMap<PathBuf, Arc<Library>>,
}

impl PluginLoader {
    /// Create a loader with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the unit at `path` and read its declaration.
    ///
    /// Returns the library handle alongside the declaration; the handle must
    /// outlive every constructor taken from the declaration, so descriptors
    /// hold on to it.
    pub fn load(&mut self, path: &Path) -> Result<(Arc<Library>, ModuleDeclaration), ModuleError> {
        let cached = self.cache.contains_key(path);
        let library = match self.cache.get(path) {
            Some(library) => Arc::clone(library),
            None => {
                // Safety: the plugin directory is operator-controlled; a
                // library's initializers run on open, same trust level as
                // the host process.
                let library = unsafe { Library::new(path) }
                    .map_err(|e| ModuleError::LoadFailed(format!("{}: {}", path.display(), e)))?;
                Arc::new(library)
            }
        };

        let entry: Symbol<EntryFn> = unsafe { library.get(ENTRY_SYMBOL) }.map_err(|_| {
            ModuleError::MissingEntryPoint(format!(
                "{} does not export cytopipe_module_entry",
                path.display()
            ))
        })?;
        let declaration = entry()?;

        if declaration.abi_version != MODULE_ABI_VERSION {
            return Err(ModuleError::AbiMismatch {
                host: MODULE_ABI_VERSION,
                unit: declaration.abi_version,
            });
        }

        // Cache only units that resolved a valid declaration; a library
        // without an entry point is not worth keeping alive.
        if !cached {
            self.cache.insert(path.to_path_buf(), Arc::clone(&library));
        }

        Ok((library, declaration))
    }

    /// Best-effort re-open of every cached library.
    ///
    /// Entries whose file is gone are evicted first. A library that fails
    /// to re-open keeps its previous handle; the failure is logged, not
    /// reported, since the follow-up rescan decides what the registry ends
    /// up containing.
    pub fn refresh(&mut self) {
        self.cache.retain(|path, _| {
            let present = path.exists();
            if !present {
                debug!(path = %path.display(), "plugin library removed, dropping cached handle");
            }
            present
        });
        for (path, slot) in &mut self.cache {
            match unsafe { Library::new(path) } {
                Ok(library) => {
                    debug!(path = %path.display(), "plugin library re-opened");
                    *slot = Arc::new(library);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "plugin re-open failed, keeping previous library");
                }
            }
        }
    }

    /// Number of cached plugin libraries.
    pub fn loaded_count(&self) -> usize {
        self.cache.len()
    }
}

/// Whether a path looks like a loadable plugin library.
pub fn is_plugin_library(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("so") | Some("dylib") | Some("dll")
    )
}
