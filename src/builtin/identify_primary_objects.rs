use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 11143 $";

/// Identifies primary objects (e.g. nuclei) in a grayscale image.
///
/// Formerly `IdentifyPrimAutomatic`.
pub struct IdentifyPrimaryObjects {
    settings: Vec<Setting>,
}

impl IdentifyPrimaryObjects {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for IdentifyPrimaryObjects {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for IdentifyPrimaryObjects {
    fn name(&self) -> &str {
        "IdentifyPrimaryObjects"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the input image", "None"),
            Setting::new("Name the primary objects to be identified", "Nuclei"),
            Setting::new("Typical diameter of objects, in pixel units (Min,Max)", "10,40"),
            Setting::new("Select the thresholding method", "Otsu Global"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let input = self.settings[0].value.clone();
        let threshold = self.settings[3].value.clone();
        let source = cx
            .slot(&input)
            .ok_or_else(|| ModuleError::OperationFailed(format!("no image named {input}")))?
            .to_string();
        cx.bind(
            format!("objects:{}", self.settings[1].value),
            format!("identify[{threshold}]({source})"),
        );
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(ModuleDeclaration::new("IdentifyPrimaryObjects", || {
        Ok(Box::new(IdentifyPrimaryObjects::new()))
    })
    .with_revision(REVISION))
}
