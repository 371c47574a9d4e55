//! Legacy-name resolution integration tests
//!
//! Verifies the resolver against the shipped alias table and a freshly
//! scanned built-in registry: substitution equivalence, the four failure
//! classifications, and dotted legacy forms.

use cytopipe_modules::registry::aliases::{AliasEntry, ALIASES};
use cytopipe_modules::{resolve, ModuleScanner, PluginLoader, Registry, ResolveError};

fn scanned_registry() -> Registry {
    let mut loader = PluginLoader::new();
    let (registry, report) = ModuleScanner::new().scan(&mut loader);
    assert!(report.is_clean());
    registry
}

#[test]
fn every_substitution_resolves_like_its_target() {
    let registry = scanned_registry();

    for (legacy, entry) in ALIASES.iter() {
        if let AliasEntry::Substitute(target) = entry {
            let via_legacy = resolve(&registry, legacy)
                .unwrap_or_else(|e| panic!("resolve({legacy}) failed: {e}"));
            let direct = resolve(&registry, target).unwrap();
            assert_eq!(via_legacy.name(), *target);
            assert_eq!(via_legacy.name(), direct.name());
        }
    }
}

#[test]
fn old_average_resolves_to_make_projection() {
    let registry = scanned_registry();
    let via_legacy = resolve(&registry, "OldAverage").unwrap();
    let direct = resolve(&registry, "MakeProjection").unwrap();
    assert_eq!(via_legacy.name(), "MakeProjection");
    assert_eq!(direct.name(), "MakeProjection");
}

#[test]
fn dotted_legacy_forms_resolve() {
    let registry = scanned_registry();
    // Qualified names rewrite before the prefix is stripped, so each needs
    // its own table entry; a bare-name substitution does not cover them.
    for (legacy, target) in [
        ("cytopipe.modules.loadtext.LoadText", "LoadData"),
        (
            "cytopipe.modules.expandorshrink.ExpandOrShrink",
            "ExpandOrShrinkObjects",
        ),
        (
            "cytopipe.modules.measureimagegranularity.MeasureImageGranularity",
            "MeasureGranularity",
        ),
        (
            "cytopipe.modules.relabelobjects.RelabelObjects",
            "ReassignObjectNumbers",
        ),
    ] {
        let resolved = resolve(&registry, legacy)
            .unwrap_or_else(|e| panic!("resolve({legacy}) failed: {e}"));
        assert_eq!(resolved.name(), target);
    }
}

#[test]
fn planned_modules_are_reported_as_not_yet_available() {
    let registry = scanned_registry();

    for name in ["LabelImages", "Restart", "SplitOrSpliceMovie"] {
        let err = resolve(&registry, name).unwrap_err();
        assert!(
            matches!(&err, ResolveError::NotYetAvailable(n) if n == name),
            "{name}: {err}"
        );
        assert!(err.to_string().contains("later version"));
    }
}

#[test]
fn removed_modules_are_reported_as_removed() {
    let registry = scanned_registry();

    for name in ["SubtractBackground", "CorrectIllumination_Calculate_kate"] {
        let err = resolve(&registry, name).unwrap_err();
        assert!(matches!(&err, ResolveError::Removed(n) if n == name));
        assert!(err.to_string().contains(name));
    }
}

#[test]
fn superseded_modules_carry_their_successor_lists() {
    let registry = scanned_registry();

    let err = resolve(&registry, "LoadImageDirectory").unwrap_err();
    match err {
        ResolveError::Superseded { module, successors } => {
            assert_eq!(module, "LoadImageDirectory");
            assert_eq!(successors, ["LoadImages", "LoadData"]);
        }
        other => panic!("expected Superseded, got {other}"),
    }

    let err = resolve(&registry, "IdentifyPrimLoG").unwrap_err();
    match err {
        ResolveError::Superseded { successors, .. } => {
            assert_eq!(successors, ["IdentifyPrimaryObjects"]);
        }
        other => panic!("expected Superseded, got {other}"),
    }
}

#[test]
fn superseded_message_names_the_successors() {
    let registry = scanned_registry();
    let message = resolve(&registry, "LoadImageDirectory")
        .unwrap_err()
        .to_string();
    assert!(message.contains("LoadImages, LoadData"));
}

#[test]
fn names_in_no_table_are_unknown() {
    let registry = scanned_registry();
    let err = resolve(&registry, "TotallyMadeUp").unwrap_err();
    assert!(matches!(&err, ResolveError::Unknown(n) if n == "TotallyMadeUp"));
}

#[test]
fn every_superseded_successor_is_registered() {
    // Dangling successors would send users chasing modules that do not
    // exist; the shipped table must stay consistent with the built-in set.
    let registry = scanned_registry();
    for entry in ALIASES.values() {
        if let AliasEntry::Superseded(successors) = entry {
            for successor in *successors {
                assert!(
                    registry.lookup(successor).is_some(),
                    "dangling successor {successor}"
                );
            }
        }
    }
}

#[test]
fn resolution_attaches_the_recorded_revision() {
    let registry = scanned_registry();
    let resolved = resolve(&registry, "Average").unwrap();
    assert_eq!(resolved.revision.as_deref(), Some("10987"));
}
