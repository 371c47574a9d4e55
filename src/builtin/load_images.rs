use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 11104 $";

/// Loads images from files into the image set.
///
/// Typically the first module of a pipeline: it binds image names that the
/// downstream modules consume.
pub struct LoadImages {
    settings: Vec<Setting>,
}

impl LoadImages {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for LoadImages {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for LoadImages {
    fn name(&self) -> &str {
        "LoadImages"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("File type to be loaded", "individual images"),
            Setting::new("Text that the image files have in common", "DAPI"),
            Setting::new("Name of the loaded image", "OrigBlue"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let pattern = self.settings[1].value.clone();
        cx.bind(self.settings[2].value.clone(), format!("file[{pattern}]"));
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(
        ModuleDeclaration::new("LoadImages", || Ok(Box::new(LoadImages::new())))
            .with_revision(REVISION),
    )
}
