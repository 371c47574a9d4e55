use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 10640 $";

/// Measures the image granularity spectrum.
///
/// Formerly `MeasureImageGranularity`. Usable standalone as a data tool
/// against previously computed measurements.
pub struct MeasureGranularity {
    settings: Vec<Setting>,
}

impl MeasureGranularity {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for MeasureGranularity {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for MeasureGranularity {
    fn name(&self) -> &str {
        "MeasureGranularity"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Select an image to measure", "None"),
            Setting::new("Subsampling factor for granularity measurements", "0.25"),
            Setting::new("Range of the granularity spectrum", "16"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let input = self.settings[0].value.clone();
        let range = self.settings[2].value.clone();
        let source = cx
            .slot(&input)
            .ok_or_else(|| ModuleError::OperationFailed(format!("no image named {input}")))?
            .to_string();
        cx.bind(
            format!("measurement:Granularity_{input}"),
            format!("granularity[1..{range}]({source})"),
        );
        Ok(())
    }

    fn is_data_tool(&self) -> bool {
        true
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(ModuleDeclaration::new("MeasureGranularity", || {
        Ok(Box::new(MeasureGranularity::new()))
    })
    .with_revision(REVISION))
}
