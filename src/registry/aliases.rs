//! Legacy-name alias tables
//!
//! Static configuration mapping historical module names to their current
//! disposition. Saved pipelines can reference modules that have since been
//! renamed, merged, split, or removed; the resolver rewrites or classifies
//! those references through this table.
//!
//! A name appears at most once, so the four historical categories cannot
//! overlap by construction.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Disposition of a legacy module name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasEntry {
    /// Renamed or merged; the listed module covers it.
    Substitute(&'static str),
    /// Removed, functionality distributed across the listed successors.
    Superseded(&'static [&'static str]),
    /// Permanently removed, no successor.
    Removed,
    /// Planned but not yet available in this version.
    Planned,
}

/// The compiled-in alias table.
///
/// Keys include legacy fully-qualified dotted forms; substitution targets
/// are current canonical names.
pub static ALIASES: Lazy<HashMap<&'static str, AliasEntry>> = Lazy::new(|| {
    use AliasEntry::*;

    let mut table = HashMap::new();

    // Renamed or merged modules.
    table.insert("Average", Substitute("MakeProjection"));
    table.insert("OldAverage", Substitute("MakeProjection"));
    table.insert("Combine", Substitute("ImageMath"));
    table.insert("InvertIntensity", Substitute("ImageMath"));
    table.insert("Multiply", Substitute("ImageMath"));
    table.insert("Subtract", Substitute("ImageMath"));
    table.insert("SmoothOrEnhance", Substitute("Smooth"));
    table.insert("SmoothKeepingEdges", Substitute("Smooth"));
    table.insert("FilterByObjectMeasurement", Substitute("FilterObjects"));
    table.insert(
        "cytopipe.modules.filterbyobjectmeasurement.FilterByObjectMeasurement",
        Substitute("FilterObjects"),
    );
    table.insert("KeepLargestObject", Substitute("FilterObjects"));
    table.insert("LoadText", Substitute("LoadData"));
    table.insert("cytopipe.modules.loadtext.LoadText", Substitute("LoadData"));
    table.insert("IdentifyPrimAutomatic", Substitute("IdentifyPrimaryObjects"));
    table.insert(
        "cytopipe.modules.identifyprimautomatic.IdentifyPrimAutomatic",
        Substitute("IdentifyPrimaryObjects"),
    );
    table.insert("ConvertToImage", Substitute("ConvertObjectsToImage"));
    table.insert(
        "cytopipe.modules.converttoimage.ConvertToImage",
        Substitute("ConvertObjectsToImage"),
    );
    table.insert("ExpandOrShrink", Substitute("ExpandOrShrinkObjects"));
    table.insert(
        "cytopipe.modules.expandorshrink.ExpandOrShrink",
        Substitute("ExpandOrShrinkObjects"),
    );
    table.insert("MeasureImageGranularity", Substitute("MeasureGranularity"));
    table.insert(
        "cytopipe.modules.measureimagegranularity.MeasureImageGranularity",
        Substitute("MeasureGranularity"),
    );
    table.insert("RelabelObjects", Substitute("ReassignObjectNumbers"));
    table.insert(
        "cytopipe.modules.relabelobjects.RelabelObjects",
        Substitute("ReassignObjectNumbers"),
    );
    table.insert("SplitIntoContiguousObjects", Substitute("ReassignObjectNumbers"));
    table.insert("UnifyObjects", Substitute("ReassignObjectNumbers"));
    table.insert("ExportToExcel", Substitute("ExportToSpreadsheet"));
    table.insert(
        "cytopipe.modules.exporttoexcel.ExportToExcel",
        Substitute("ExportToSpreadsheet"),
    );

    // Removed modules whose functionality lives on elsewhere.
    table.insert(
        "LoadImageDirectory",
        Superseded(&["LoadImages", "LoadData"]),
    );
    table.insert("GroupMovieFrames", Superseded(&["LoadImages"]));
    table.insert("FileNameMetadata", Superseded(&["LoadImages"]));
    table.insert("IdentifyPrimLoG", Superseded(&["IdentifyPrimaryObjects"]));

    // Gone for good.
    table.insert("SubtractBackground", Removed);
    table.insert("CorrectIllumination_Calculate_kate", Removed);

    // Not yet ported to this version.
    table.insert("LabelImages", Planned);
    table.insert("Restart", Planned);
    table.insert("SplitOrSpliceMovie", Planned);

    table
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_keys_map_to_bare_canonical_names() {
        for (key, entry) in ALIASES.iter() {
            if let AliasEntry::Substitute(target) = entry {
                assert!(!target.contains('.'), "{key} maps to qualified {target}");
            }
        }
    }

    #[test]
    fn substitution_is_single_step() {
        // No substitution target is itself an aliased name; a chain of
        // renames would otherwise silently stop after one hop.
        for entry in ALIASES.values() {
            if let AliasEntry::Substitute(target) = entry {
                assert!(!ALIASES.contains_key(target));
            }
        }
    }

    #[test]
    fn successor_lists_are_never_empty() {
        for entry in ALIASES.values() {
            if let AliasEntry::Superseded(successors) = entry {
                assert!(!successors.is_empty());
            }
        }
    }
}
