use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 10471 $";

/// Renumbers objects, unifying or splitting label sets.
///
/// Merged from `RelabelObjects`, `UnifyObjects` and
/// `SplitIntoContiguousObjects`.
pub struct ReassignObjectNumbers {
    settings: Vec<Setting>,
}

impl ReassignObjectNumbers {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for ReassignObjectNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ReassignObjectNumbers {
    fn name(&self) -> &str {
        "ReassignObjectNumbers"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the input objects", "None"),
            Setting::new("Operation to perform", "Unify"),
            Setting::new("Name the new objects", "RelabeledNuclei"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let objects = format!("objects:{}", self.settings[0].value);
        let operation = self.settings[1].value.clone();
        let source = cx
            .slot(&objects)
            .ok_or_else(|| {
                ModuleError::OperationFailed(format!("no objects named {}", self.settings[0].value))
            })?
            .to_string();
        cx.bind(
            format!("objects:{}", self.settings[2].value),
            format!("relabel[{operation}]({source})"),
        );
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(ModuleDeclaration::new("ReassignObjectNumbers", || {
        Ok(Box::new(ReassignObjectNumbers::new()))
    })
    .with_revision(REVISION))
}
