//! cytopipe-modules - pipeline-module catalog for the cytopipe
//! image-analysis application
//!
//! This crate owns the registry of interchangeable processing modules that
//! pipelines are composed from. It discovers module implementations
//! (built-in and plugin), validates each against the module contract,
//! isolates per-module failures so one broken plugin never breaks the
//! catalog, and resolves historical module names from saved pipelines to
//! currently valid implementations.
//!
//! ## Architecture
//!
//! - **Discovery**: built-in candidates scan strictly before plugin
//!   candidates; every failure is captured in a per-scan fault ledger.
//! - **Contract**: modules implement the [`Module`] trait; a unit's
//!   [`ModuleDeclaration`] is checked against the required/reserved method
//!   sets before admission.
//! - **Publication**: each scan builds a complete [`Registry`] value that
//!   the [`ModuleCatalog`] publishes with a single reference swap.
//! - **Resolution**: legacy names are rewritten through the compiled-in
//!   alias table and classified into four failure kinds when they no longer
//!   exist.
//!
//! The numerical algorithms inside modules, the pipeline file format, and
//! the execution engine are external collaborators; this crate deals only
//! in names, declarations, and constructors.

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod contract;
pub mod declaration;
pub mod loader;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use catalog::{CatalogSnapshot, ModuleCatalog};
pub use config::CatalogConfig;
pub use contract::ContractValidator;
pub use declaration::{
    Constructor, ContractMethods, EntryFn, ModuleDeclaration, MODULE_ABI_VERSION,
};
pub use loader::PluginLoader;
pub use registry::aliases::AliasEntry;
pub use registry::scanner::{Candidate, ModuleScanner, UnitSource};
pub use registry::{Collision, ModuleDescriptor, Registry, ScanFault, ScanReport};
pub use resolver::{resolve, resolve_with, ResolveError, ResolvedModule};
pub use traits::{Module, ModuleError, PipelineContext, Setting};
