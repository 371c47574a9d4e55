use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 10535 $";

/// Smooths an image with the selected filter.
pub struct Smooth {
    settings: Vec<Setting>,
}

impl Smooth {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for Smooth {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Smooth {
    fn name(&self) -> &str {
        "Smooth"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the input image", "None"),
            Setting::new("Select smoothing method", "Gaussian Filter"),
            Setting::new("Typical artifact diameter, in pixels", "16"),
            Setting::new("Name the output image", "FilteredImage"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let input = self.settings[0].value.clone();
        let method = self.settings[1].value.clone();
        let source = cx
            .slot(&input)
            .ok_or_else(|| ModuleError::OperationFailed(format!("no image named {input}")))?
            .to_string();
        cx.bind(
            self.settings[3].value.clone(),
            format!("smooth[{method}]({source})"),
        );
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(ModuleDeclaration::new("Smooth", || Ok(Box::new(Smooth::new()))).with_revision(REVISION))
}
