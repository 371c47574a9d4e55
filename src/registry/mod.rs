//! Module registry
//!
//! The canonical name-to-implementation mapping produced by a scan, the
//! per-scan fault ledger, and the scanner that builds both.

pub mod aliases;
pub mod scanner;

use std::collections::HashMap;
use std::sync::Arc;

use libloading::Library;

use crate::declaration::Constructor;
use crate::traits::{Module, ModuleError};

/// A registered module implementation.
///
/// Descriptors are created during a scan and replaced wholesale by the next
/// one; they are never mutated after the registry is published.
pub struct ModuleDescriptor {
    /// Canonical name, the registry key.
    pub name: String,
    /// Candidate identifier the implementation came from. Used in collision
    /// warnings.
    pub origin: String,
    /// Recorded revision number, built-in units only.
    pub revision: Option<String>,
    /// Whether the module advertised the data-tool capability.
    pub data_tool: bool,
    constructor: Constructor,
    // Keeps the plugin library (and with it the constructor's code) alive
    // for as long as the descriptor exists. None for built-ins.
    #[allow(dead_code)]
    library: Option<Arc<Library>>,
}

impl ModuleDescriptor {
    pub(crate) fn new(
        name: String,
        origin: String,
        constructor: Constructor,
        library: Option<Arc<Library>>,
    ) -> Self {
        Self {
            name,
            origin,
            revision: None,
            data_tool: false,
            constructor,
            library,
        }
    }

    /// Construct a fresh instance of the implementation.
    pub fn instantiate(&self) -> Result<Box<dyn Module>, ModuleError> {
        (self.constructor)()
    }
}

impl std::fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("origin", &self.origin)
            .field("revision", &self.revision)
            .field("data_tool", &self.data_tool)
            .finish()
    }
}

/// Name-to-descriptor mapping built by one scan.
///
/// A plain value: the catalog builds a new registry in isolation and
/// publishes it with a single reference swap, so readers always see either
/// the fully-old or the fully-new mapping.
#[derive(Debug, Default)]
pub struct Registry {
    modules: HashMap<String, ModuleDescriptor>,
    data_tools: Vec<String>,
}

impl Registry {
    /// Look up a descriptor by canonical name.
    pub fn lookup(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.get(name)
    }

    /// All canonical names, sorted.
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names of data-tool-capable modules, sorted.
    pub fn data_tool_names(&self) -> &[String] {
        &self.data_tools
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub(crate) fn insert(&mut self, descriptor: ModuleDescriptor) {
        // Overwriting a collision also forfeits the earlier registration's
        // data-tool listing; the new candidate re-earns it on admission.
        if self.modules.contains_key(&descriptor.name) {
            self.data_tools.retain(|n| n != &descriptor.name);
        }
        self.modules.insert(descriptor.name.clone(), descriptor);
    }

    /// Remove a candidate that failed after tentative registration, from
    /// both the name mapping and the data-tool list.
    pub(crate) fn remove(&mut self, name: &str) {
        self.modules.remove(name);
        self.data_tools.retain(|n| n != name);
    }

    pub(crate) fn add_data_tool(&mut self, name: &str) {
        if let Some(descriptor) = self.modules.get_mut(name) {
            descriptor.data_tool = true;
        }
        self.data_tools.push(name.to_string());
    }

    pub(crate) fn set_revision(&mut self, name: &str, revision: String) {
        if let Some(descriptor) = self.modules.get_mut(name) {
            descriptor.revision = Some(revision);
        }
    }

    pub(crate) fn finish(&mut self) {
        self.data_tools.sort_unstable();
    }
}

/// One failed candidate: the identifier attempted and what went wrong.
#[derive(Debug)]
pub struct ScanFault {
    /// Candidate identifier, not the canonical name (which may never have
    /// been learned).
    pub identifier: String,
    /// Captured error.
    pub error: ModuleError,
}

/// Two candidates declared the same canonical name. The later registration
/// wins; this records both origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    pub previous_origin: String,
    pub new_origin: String,
}

/// Per-scan ledger of faults and collision warnings.
///
/// Rebuilt from scratch by every scan; never raised to the scan's caller.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub faults: Vec<ScanFault>,
    pub collisions: Vec<Collision>,
}

impl ScanReport {
    /// Whether the scan completed without faults or collisions.
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty() && self.collisions.is_empty()
    }
}
