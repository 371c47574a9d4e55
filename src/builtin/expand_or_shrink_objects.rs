use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

/// Expands or shrinks objects by a defined distance. Formerly
/// `ExpandOrShrink`.
pub struct ExpandOrShrinkObjects {
    settings: Vec<Setting>,
}

impl ExpandOrShrinkObjects {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for ExpandOrShrinkObjects {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ExpandOrShrinkObjects {
    fn name(&self) -> &str {
        "ExpandOrShrinkObjects"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the input objects", "None"),
            Setting::new("Select the operation", "Expand objects by a specified number of pixels"),
            Setting::new("Number of pixels by which to expand or shrink", "1"),
            Setting::new("Name the output objects", "ShrunkenNuclei"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let objects = format!("objects:{}", self.settings[0].value);
        let pixels = self.settings[2].value.clone();
        let source = cx
            .slot(&objects)
            .ok_or_else(|| {
                ModuleError::OperationFailed(format!("no objects named {}", self.settings[0].value))
            })?
            .to_string();
        cx.bind(
            format!("objects:{}", self.settings[3].value),
            format!("morph[{pixels}px]({source})"),
        );
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    // No revision marker on this unit; the scanner records nothing for it.
    Ok(ModuleDeclaration::new("ExpandOrShrinkObjects", || {
        Ok(Box::new(ExpandOrShrinkObjects::new()))
    }))
}
