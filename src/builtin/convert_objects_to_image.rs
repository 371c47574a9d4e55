use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 10104 $";

/// Converts identified objects back into an image, e.g. for saving.
pub struct ConvertObjectsToImage {
    settings: Vec<Setting>,
}

impl ConvertObjectsToImage {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for ConvertObjectsToImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ConvertObjectsToImage {
    fn name(&self) -> &str {
        "ConvertObjectsToImage"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the input objects", "None"),
            Setting::new("Name the output image", "CellImage"),
            Setting::new("Select the color format", "Color"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let objects = format!("objects:{}", self.settings[0].value);
        let source = cx
            .slot(&objects)
            .ok_or_else(|| {
                ModuleError::OperationFailed(format!("no objects named {}", self.settings[0].value))
            })?
            .to_string();
        cx.bind(self.settings[1].value.clone(), format!("rasterize({source})"));
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(ModuleDeclaration::new("ConvertObjectsToImage", || {
        Ok(Box::new(ConvertObjectsToImage::new()))
    })
    .with_revision(REVISION))
}
