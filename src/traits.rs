//! Module contract traits and shared types
//!
//! Defines the behavioral contract every pipeline module implements and the
//! types that cross the module boundary.

use std::collections::HashMap;
use thiserror::Error;

/// A single configurable parameter of a module.
///
/// The pipeline editor renders `text` as the prompt and round-trips `value`
/// through saved pipeline definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Prompt shown to the user.
    pub text: String,
    /// Current value, serialized form.
    pub value: String,
}

impl Setting {
    /// Create a setting with its default value.
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

/// Execution context handed to [`Module::run`].
///
/// Image data itself is owned by the execution engine; modules address it
/// through named slots, so the catalog-facing contract only deals in names
/// and provenance strings.
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    slots: HashMap<String, String>,
}

impl PipelineContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the provenance bound to a named slot.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    /// Bind a slot to a provenance string, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, provenance: impl Into<String>) {
        self.slots.insert(name.into(), provenance.into());
    }

    /// Names of all bound slots.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

/// Behavioral contract for a pipeline module.
///
/// These are the operations every implementation customizes. Framework
/// bookkeeping (initialization from a settings snapshot, validity checks,
/// class-identity lookup) is deliberately *not* part of this trait; modules
/// declare in their [`ModuleDeclaration`](crate::ModuleDeclaration) which
/// contract methods they override, and the scanner rejects declarations that
/// claim reserved mechanics.
pub trait Module: Send {
    /// Canonical name the implementation declares for itself.
    ///
    /// This is the registry key; it must match the name under which the
    /// unit registered the module.
    fn name(&self) -> &str;

    /// Build the default settings for a fresh instance.
    fn create_settings(&mut self);

    /// The ordered settings list shown to the pipeline editor.
    fn settings(&self) -> Vec<Setting>;

    /// Execute against the current image set.
    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError>;

    /// Whether this module can be launched standalone as a data tool.
    fn is_data_tool(&self) -> bool {
        false
    }
}

/// Discovery-side module errors.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("failed to load module unit: {0}")]
    LoadFailed(String),

    #[error("module entry point not found: {0}")]
    MissingEntryPoint(String),

    #[error("module ABI mismatch: host {host}, unit {unit}")]
    AbiMismatch { host: u32, unit: u32 },

    #[error("module {module} violates the contract: {reason}")]
    ContractViolation { module: String, reason: String },

    #[error("failed to construct module {0}: {1}")]
    ConstructionFailed(String, String),

    #[error("module operation failed: {0}")]
    OperationFailed(String),

    #[error("invalid catalog configuration: {0}")]
    Config(String),
}
