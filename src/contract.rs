//! Contract validation
//!
//! Checks a candidate declaration (and its smoke-test instance) against the
//! module contract before the scanner admits it to the registry. Violations
//! name the offending method and module; they are scan faults, never panics.

use tracing::debug;

use crate::declaration::{ContractMethods, ModuleDeclaration};
use crate::traits::{Module, ModuleError};

/// Validates candidate modules against the contract.
pub struct ContractValidator;

impl ContractValidator {
    /// Declaration-level checks: no reserved method overridden, every
    /// required method overridden.
    ///
    /// A declaration carrying the `skip_contract_check` marker is exempt;
    /// that marker exists for internal base units that are not end-user
    /// modules.
    pub fn check_declaration(decl: &ModuleDeclaration) -> Result<(), ModuleError> {
        if decl.skip_contract_check {
            debug!(module = %decl.name, "contract check skipped by declaration");
            return Ok(());
        }

        for flag in ContractMethods::reserved().iter() {
            if decl.overrides.contains(flag) {
                return Err(ModuleError::ContractViolation {
                    module: decl.name.clone(),
                    reason: format!(
                        "must not override reserved method {}",
                        ContractMethods::method_name(flag)
                    ),
                });
            }
        }

        for flag in ContractMethods::required().iter() {
            if !decl.overrides.contains(flag) {
                return Err(ModuleError::ContractViolation {
                    module: decl.name.clone(),
                    reason: format!(
                        "must override required method {}",
                        ContractMethods::method_name(flag)
                    ),
                });
            }
        }

        Ok(())
    }

    /// Instance-level check: the smoke-test instance must report the name
    /// the unit registered under.
    pub fn check_instance(
        decl: &ModuleDeclaration,
        instance: &dyn Module,
    ) -> Result<(), ModuleError> {
        if instance.name() != decl.name {
            return Err(ModuleError::ContractViolation {
                module: decl.name.clone(),
                reason: format!(
                    "instance reports name {} but is registered as {}",
                    instance.name(),
                    decl.name
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{PipelineContext, Setting};

    struct Renamed;

    impl Module for Renamed {
        fn name(&self) -> &str {
            "SomethingElse"
        }
        fn create_settings(&mut self) {}
        fn settings(&self) -> Vec<Setting> {
            Vec::new()
        }
        fn run(&mut self, _cx: &mut PipelineContext) -> Result<(), ModuleError> {
            Ok(())
        }
    }

    fn construct() -> Result<Box<dyn Module>, ModuleError> {
        Ok(Box::new(Renamed))
    }

    #[test]
    fn well_behaved_declaration_passes() {
        let decl = ModuleDeclaration::new("Good", construct);
        assert!(ContractValidator::check_declaration(&decl).is_ok());
    }

    #[test]
    fn reserved_override_is_a_violation() {
        let decl = ModuleDeclaration::new("Overrider", construct).with_overrides(
            ContractMethods::required() | ContractMethods::FROM_SNAPSHOT,
        );
        let err = ContractValidator::check_declaration(&decl).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Overrider"));
        assert!(message.contains("from_snapshot"));
    }

    #[test]
    fn missing_required_override_is_a_violation() {
        let decl = ModuleDeclaration::new("Lazy", construct)
            .with_overrides(ContractMethods::CREATE_SETTINGS | ContractMethods::SETTINGS);
        let err = ContractValidator::check_declaration(&decl).unwrap_err();
        assert!(err.to_string().contains("run"));
    }

    #[test]
    fn skip_marker_bypasses_override_checks() {
        let decl = ModuleDeclaration::new("BaseUnit", construct)
            .with_overrides(ContractMethods::empty() | ContractMethods::INIT)
            .skip_contract_check();
        assert!(ContractValidator::check_declaration(&decl).is_ok());
    }

    #[test]
    fn name_mismatch_is_a_violation() {
        let decl = ModuleDeclaration::new("Renamed", construct);
        let instance = Renamed;
        let err = ContractValidator::check_instance(&decl, &instance).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("SomethingElse"));
        assert!(message.contains("Renamed"));
    }
}
