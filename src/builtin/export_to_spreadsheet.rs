use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 11021 $";

/// Writes measurements to comma- or tab-delimited files.
///
/// Formerly `ExportToExcel`. Usable standalone as a data tool.
pub struct ExportToSpreadsheet {
    settings: Vec<Setting>,
}

impl ExportToSpreadsheet {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for ExportToSpreadsheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ExportToSpreadsheet {
    fn name(&self) -> &str {
        "ExportToSpreadsheet"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the column delimiter", "Comma (\",\")"),
            Setting::new("Output file location", "Default Output Folder"),
            Setting::new("Add image metadata columns?", "No"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let measurements: Vec<String> = cx
            .slot_names()
            .filter(|name| name.starts_with("measurement:"))
            .map(str::to_string)
            .collect();
        let location = self.settings[1].value.clone();
        cx.bind(
            "export:spreadsheet",
            format!("write[{location}]({} measurements)", measurements.len()),
        );
        Ok(())
    }

    fn is_data_tool(&self) -> bool {
        true
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(ModuleDeclaration::new("ExportToSpreadsheet", || {
        Ok(Box::new(ExportToSpreadsheet::new()))
    })
    .with_revision(REVISION))
}
