use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 10896 $";

/// Removes objects based on a measurement threshold.
///
/// Covers the old `FilterByObjectMeasurement` and `KeepLargestObject`
/// modules.
pub struct FilterObjects {
    settings: Vec<Setting>,
}

impl FilterObjects {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for FilterObjects {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for FilterObjects {
    fn name(&self) -> &str {
        "FilterObjects"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select the objects to filter", "None"),
            Setting::new("Select the measurement to filter by", "AreaShape_Area"),
            Setting::new("Minimum value", "0"),
            Setting::new("Name the output objects", "FilteredObjects"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let objects = format!("objects:{}", self.settings[0].value);
        let measurement = self.settings[1].value.clone();
        let source = cx
            .slot(&objects)
            .ok_or_else(|| {
                ModuleError::OperationFailed(format!("no objects named {}", self.settings[0].value))
            })?
            .to_string();
        cx.bind(
            format!("objects:{}", self.settings[3].value),
            format!("filter[{measurement}]({source})"),
        );
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(
        ModuleDeclaration::new("FilterObjects", || Ok(Box::new(FilterObjects::new())))
            .with_revision(REVISION),
    )
}
