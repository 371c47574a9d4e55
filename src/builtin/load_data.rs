use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 11025 $";

/// Loads image file names and per-image metadata from a CSV file.
///
/// Formerly `LoadText`.
pub struct LoadData {
    settings: Vec<Setting>,
}

impl LoadData {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for LoadData {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for LoadData {
    fn name(&self) -> &str {
        "LoadData"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Input data file location", "Default Input Folder"),
            Setting::new("Name of the file", "load_data.csv"),
            Setting::new("Load images based on this data?", "Yes"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let file = self.settings[1].value.clone();
        cx.bind("DataTable", format!("csv[{file}]"));
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(
        ModuleDeclaration::new("LoadData", || Ok(Box::new(LoadData::new())))
            .with_revision(REVISION),
    )
}
