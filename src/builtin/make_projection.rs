use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 10987 $";

/// Combines the images in an image group into a single projected image.
///
/// Formerly `Average`; the projection method is a setting so the merged
/// module covers the old behavior.
pub struct MakeProjection {
    settings: Vec<Setting>,
}

impl MakeProjection {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for MakeProjection {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for MakeProjection {
    fn name(&self) -> &str {
        "MakeProjection"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the input image", "None"),
            Setting::new("Type of projection", "Average"),
            Setting::new("Name the output image", "ProjectionBlue"),
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
            self.settings[2].value.clone(),
            format!("projection[{method}]({source})"),
        );
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(
        ModuleDeclaration::new("MakeProjection", || Ok(Box::new(MakeProjection::new())))
            .with_revision(REVISION),
    )
}
