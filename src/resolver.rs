//! Legacy-name resolution
//!
//! Turns any module name a saved pipeline may carry, current or historical,
//! into a fresh implementation instance, or classifies exactly why it
//! cannot.

use std::collections::HashMap;

use thiserror::Error;

use crate::registry::aliases::{AliasEntry, ALIASES};
use crate::registry::Registry;
use crate::traits::{Module, ModuleError};

/// A freshly instantiated module with its recorded revision attached.
///
/// Every resolution constructs a new instance; resolved modules become
/// distinct pipeline steps with their own configuration state.
pub struct ResolvedModule {
    /// The implementation instance.
    pub module: Box<dyn Module>,
    /// Revision recorded for the canonical name at scan time, if any.
    pub revision: Option<String>,
}

impl ResolvedModule {
    /// Canonical name the instance declares.
    pub fn name(&self) -> &str {
        self.module.name()
    }
}

impl std::fmt::Debug for ResolvedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedModule")
            .field("name", &self.name())
            .field("revision", &self.revision)
            .finish()
    }
}

/// Why a requested name could not be resolved.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("the {0} module has not yet been implemented; it will be available in a later version of cytopipe")]
    NotYetAvailable(String),

    #[error("the {0} module has been removed and will not be implemented in this version of cytopipe")]
    Removed(String),

    #[error("the {module} module no longer exists; you can find similar functionality in: {}", successors.join(", "))]
    Superseded {
        module: String,
        successors: Vec<String>,
    },

    #[error("could not find the {0} module")]
    Unknown(String),

    #[error("failed to instantiate the {module} module")]
    Instantiation {
        module: String,
        #[source]
        source: ModuleError,
    },
}

/// Resolve `requested` against `registry` using the compiled-in alias
/// table.
pub fn resolve(registry: &Registry, requested: &str) -> Result<ResolvedModule, ResolveError> {
    resolve_with(registry, &ALIASES, requested)
}

/// Resolution against an explicit alias table.
///
/// The substitution rewrite is applied once, never transitively; the
/// (possibly rewritten) name is then reduced to its final dotted component
/// before lookup and classification.
pub fn resolve_with(
    registry: &Registry,
    aliases: &HashMap<&str, AliasEntry>,
    requested: &str,
) -> Result<ResolvedModule, ResolveError> {
    let rewritten = match aliases.get(requested) {
        Some(AliasEntry::Substitute(target)) => *target,
        _ => requested,
    };

    // Strip any legacy package-qualification prefix.
    let key = rewritten.rsplit('.').next().unwrap_or(rewritten);

    if let Some(descriptor) = registry.lookup(key) {
        let module = descriptor
            .instantiate()
            .map_err(|source| ResolveError::Instantiation {
                module: key.to_string(),
                source,
            })?;
        return Ok(ResolvedModule {
            module,
            revision: descriptor.revision.clone(),
        });
    }

    match aliases.get(key) {
        Some(AliasEntry::Planned) => Err(ResolveError::NotYetAvailable(key.to_string())),
        Some(AliasEntry::Removed) => Err(ResolveError::Removed(key.to_string())),
        Some(AliasEntry::Superseded(successors)) => Err(ResolveError::Superseded {
            module: key.to_string(),
            successors: successors.iter().map(|s| s.to_string()).collect(),
        }),
        _ => Err(ResolveError::Unknown(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModuleDescriptor;
    use crate::traits::{PipelineContext, Setting};

    #[derive(Default)]
    struct Target {
        settings: Vec<Setting>,
    }

    impl Module for Target {
        fn name(&self) -> &str {
            "Target"
        }
        fn create_settings(&mut self) {
            self.settings = vec![Setting::new("Select the input image", "None")];
        }
        fn settings(&self) -> Vec<Setting> {
            self.settings.clone()
        }
        fn run(&mut self, _cx: &mut PipelineContext) -> Result<(), ModuleError> {
            Ok(())
        }
    }

    fn registry_with_target() -> Registry {
        let mut registry = Registry::default();
        let mut descriptor = ModuleDescriptor::new(
            "Target".to_string(),
            "test:target".to_string(),
            || Ok(Box::new(Target::default())),
            None,
        );
        descriptor.revision = Some("10101".to_string());
        registry.insert(descriptor);
        registry
    }

    #[test]
    fn dotted_qualification_is_stripped() {
        let registry = registry_with_target();
        let aliases = HashMap::new();
        let resolved =
            resolve_with(&registry, &aliases, "cytopipe.modules.target.Target").unwrap();
        assert_eq!(resolved.name(), "Target");
    }

    #[test]
    fn revision_rides_along_with_the_instance() {
        let registry = registry_with_target();
        let aliases = HashMap::new();
        let resolved = resolve_with(&registry, &aliases, "Target").unwrap();
        assert_eq!(resolved.revision.as_deref(), Some("10101"));
    }

    #[test]
    fn substitution_is_not_applied_transitively() {
        // Old → Older → Target: a single rewrite step lands on "Older",
        // which is not registered, so resolution reports it unknown rather
        // than chasing the chain.
        let registry = registry_with_target();
        let mut aliases = HashMap::new();
        aliases.insert("Old", AliasEntry::Substitute("Older"));
        aliases.insert("Older", AliasEntry::Substitute("Target"));

        let err = resolve_with(&registry, &aliases, "Old").unwrap_err();
        assert!(matches!(err, ResolveError::Unknown(name) if name == "Older"));
    }

    #[test]
    fn classification_happens_on_the_stripped_key() {
        let registry = Registry::default();
        let mut aliases = HashMap::new();
        aliases.insert("Gone", AliasEntry::Removed);

        let err = resolve_with(&registry, &aliases, "cytopipe.modules.gone.Gone").unwrap_err();
        assert!(matches!(err, ResolveError::Removed(name) if name == "Gone"));
    }

    #[test]
    fn unknown_name_gets_the_generic_error() {
        let registry = Registry::default();
        let aliases = HashMap::new();
        let err = resolve_with(&registry, &aliases, "NoSuchModule").unwrap_err();
        assert!(matches!(err, ResolveError::Unknown(name) if name == "NoSuchModule"));
    }

    #[test]
    fn each_resolution_constructs_a_fresh_instance() {
        let registry = registry_with_target();
        let aliases = HashMap::new();
        let mut first = resolve_with(&registry, &aliases, "Target").unwrap();
        let second = resolve_with(&registry, &aliases, "Target").unwrap();
        // Distinct heap instances: mutating one cannot affect the other.
        first.module.create_settings();
        assert!(second.module.settings().is_empty());
    }

    #[test]
    fn resolved_module_debug_reports_name_and_revision() {
        let registry = registry_with_target();
        let aliases = HashMap::new();
        let resolved = resolve_with(&registry, &aliases, "Target").unwrap();
        let rendered = format!("{resolved:?}");
        assert!(rendered.contains("Target"));
        assert!(rendered.contains("10101"));
    }

    #[test]
    fn registered_name_wins_over_classification() {
        // A name both registered and aliased resolves through the registry;
        // classification only applies to lookup misses.
        let registry = registry_with_target();
        let mut aliases = HashMap::new();
        aliases.insert("Target", AliasEntry::Planned);
        assert!(resolve_with(&registry, &aliases, "Target").is_ok());
    }
}
