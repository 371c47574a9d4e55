use crate::declaration::ModuleDeclaration;
use crate::traits::{Module, ModuleError, PipelineContext, Setting};

const REVISION: &str = "$Revision: 10718 $";

/// Performs simple arithmetic between images.
///
/// Absorbed the old single-purpose `Add`/`Subtract`/`Multiply`/`Combine`
/// and `InvertIntensity` modules; the operation is a setting.
pub struct ImageMath {
    settings: Vec<Setting>,
}

impl ImageMath {
    pub fn new() -> Self {
        let mut module = Self {
            settings: Vec::new(),
        };
        module.create_settings();
        module
    }
}

impl Default for ImageMath {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for ImageMath {
    fn name(&self) -> &str {
        "ImageMath"
    }

    fn create_settings(&mut self) {
        self.settings = vec![
            Setting::new("Operation", "Add"),
            Setting::new("Select the first image", "None"),
            Setting::new("Select the second image", "None"),
            Setting::new("Name the output image", "ImageAfterMath"),
        ];
    }

    fn settings(&self) -> Vec<Setting> {
        self.settings.clone()
    }

    fn run(&mut self, cx: &mut PipelineContext) -> Result<(), ModuleError> {
        let operation = self.settings[0].value.clone();
        let first = self.settings[1].value.clone();
        let second = self.settings[2].value.clone();
        let lhs = cx
            .slot(&first)
            .ok_or_else(|| ModuleError::OperationFailed(format!("no image named {first}")))?
            .to_string();
        // Unary operations such as Invert ignore the second operand.
        let rhs = cx.slot(&second).unwrap_or("-").to_string();
        cx.bind(
            self.settings[3].value.clone(),
            format!("{operation}({lhs}, {rhs})"),
        );
        Ok(())
    }
}

pub(super) fn entry() -> Result<ModuleDeclaration, ModuleError> {
    Ok(
        ModuleDeclaration::new("ImageMath", || Ok(Box::new(ImageMath::new())))
            .with_revision(REVISION),
    )
}
