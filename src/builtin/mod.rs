//! Built-in pipeline modules
//!
//! The compiled-in module set. Each unit lives in its own file and exposes
//! the same entry-point shape a plugin library would, so the scanner treats
//! built-ins and plugins identically apart from revision recording.

mod convert_objects_to_image;
mod expand_or_shrink_objects;
mod export_to_spreadsheet;
mod filter_objects;
mod identify_primary_objects;
mod image_math;
mod load_data;
mod load_images;
mod make_projection;
mod measure_granularity;
mod reassign_object_numbers;
mod smooth;

pub use convert_objects_to_image::ConvertObjectsToImage;
pub use expand_or_shrink_objects::ExpandOrShrinkObjects;
pub use export_to_spreadsheet::ExportToSpreadsheet;
pub use filter_objects::FilterObjects;
pub use identify_primary_objects::IdentifyPrimaryObjects;
pub use image_math::ImageMath;
pub use load_data::LoadData;
pub use load_images::LoadImages;
pub use make_projection::MakeProjection;
pub use measure_granularity::MeasureGranularity;
pub use reassign_object_numbers::ReassignObjectNumbers;
pub use smooth::Smooth;

use crate::registry::scanner::Candidate;

/// The fixed built-in candidate list, in scan order.
pub fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::builtin("convertobjectstoimage", convert_objects_to_image::entry),
        Candidate::builtin("expandorshrinkobjects", expand_or_shrink_objects::entry),
        Candidate::builtin("exporttospreadsheet", export_to_spreadsheet::entry),
        Candidate::builtin("filterobjects", filter_objects::entry),
        Candidate::builtin("identifyprimaryobjects", identify_primary_objects::entry),
        Candidate::builtin("imagemath", image_math::entry),
        Candidate::builtin("loaddata", load_data::entry),
        Candidate::builtin("loadimages", load_images::entry),
        Candidate::builtin("makeprojection", make_projection::entry),
        Candidate::builtin("measuregranularity", measure_granularity::entry),
        Candidate::builtin("reassignobjectnumbers", reassign_object_numbers::entry),
        Candidate::builtin("smooth", smooth::entry),
    ]
}
