#![allow(clippy::unwrap_used, clippy::expect_used)]
//! End-to-end resolution tests.
//!
//! Exercises the resolver, validator, sorter, and reverse queries together
//! over the full plugin universe, the way the editor assembler uses them.

use std::collections::HashSet;

use redattore_features::symbol::Plugin::*;
use redattore_features::{
    CORE_PLUGINS, CustomPlugin, Plugin, direct_dependencies, load_order, removal_impact,
    resolve, resolve_with_premium, resolve_with_recommended, topological_sort,
    validate_dependencies, validate_premium_dependencies,
};

fn position(order: &[Plugin], plugin: Plugin) -> usize {
    order
        .iter()
        .position(|&p| p == plugin)
        .unwrap_or_else(|| panic!("{plugin} missing from order"))
}

#[test]
fn every_singleton_resolution_covers_its_direct_dependencies() {
    for &plugin in Plugin::ALL {
        let resolved = resolve(&[plugin], true);
        assert!(resolved.contains(&plugin));
        for &core in CORE_PLUGINS {
            assert!(resolved.contains(&core));
        }
        for dependency in direct_dependencies(plugin) {
            assert!(
                resolved.contains(dependency),
                "resolve([{plugin}]) is missing {dependency}"
            );
        }
    }
}

#[test]
fn every_resolved_set_validates_clean() {
    for &plugin in Plugin::ALL {
        let resolved = resolve(&[plugin], true);
        assert!(
            validate_dependencies(&resolved).is_empty(),
            "resolve([{plugin}]) produced an inconsistent set"
        );
    }
}

#[test]
fn foundations_only_arrive_when_asked_for_or_required() {
    // Bold requires nothing, so without the foundational seed the result
    // is just Bold.
    let resolved = resolve(&[Bold], false);
    assert!(!resolved.contains(&Essentials));
    assert!(!resolved.contains(&Paragraph));

    // Heading pulls Paragraph as a real dependency regardless of the seed.
    let resolved = resolve(&[Heading], false);
    assert!(resolved.contains(&Paragraph));
    assert!(!resolved.contains(&Essentials));
}

#[test]
fn recommended_resolution_always_contains_plain_resolution() {
    for &plugin in Plugin::ALL {
        let plain = resolve(&[plugin], true);
        let enriched = resolve_with_recommended(&[plugin]);
        assert!(
            enriched.is_superset(&plain),
            "resolve_with_recommended([{plugin}]) lost members"
        );
    }
}

#[test]
fn full_universe_load_order_is_complete_and_consistent() {
    let requested: Vec<Plugin> = Plugin::ALL.to_vec();
    let order = load_order(&requested);

    assert_eq!(order.len(), Plugin::ALL.len());
    let unique: HashSet<Plugin> = order.iter().copied().collect();
    assert_eq!(unique.len(), Plugin::ALL.len());

    for &plugin in &order {
        for &dependency in direct_dependencies(plugin) {
            assert!(position(&order, dependency) < position(&order, plugin));
        }
    }
}

#[test]
fn assembling_a_realistic_configuration() {
    let requested = [
        Bold,
        Italic,
        Heading,
        List,
        ImageUpload,
        ImageCaption,
        Table,
        MediaEmbed,
    ];
    let custom = [
        CustomPlugin::premium("ExportPdf"),
        CustomPlugin::premium("FormatPainter"),
        CustomPlugin::new("HouseStyleButtons"),
    ];

    let resolved = resolve_with_premium(&requested, &custom, true);

    // Premium registration pulled the cloud integration and its own chain.
    assert!(resolved.contains(&CloudServices));
    assert!(resolved.contains(&Notification));

    // The assembled set is consistent on both graphs.
    assert!(validate_dependencies(&resolved).is_empty());
    assert!(validate_premium_dependencies(&resolved, &custom).is_empty());

    // And sortable into a dependency-first order.
    let order = topological_sort(&resolved);
    assert_eq!(order.len(), resolved.len());
    assert!(position(&order, Image) < position(&order, ImageCaption));
    assert!(position(&order, Notification) < position(&order, CloudServices));
}

#[test]
fn removal_warning_flow() {
    // A user assembled a configuration and now wants to drop Image; the UI
    // warns about exactly the members that would break.
    let current = resolve(&[ImageCaption, ImageToolbar, Table], true);
    let impacted = removal_impact(Image, &current);
    assert_eq!(
        impacted,
        [ImageCaption, ImageToolbar].into_iter().collect::<HashSet<Plugin>>()
    );

    // Dropping something nothing depends on is safe.
    assert!(removal_impact(Table, &current).is_empty());
}

#[test]
fn strict_mode_caller_can_turn_diagnostics_into_failure() {
    // The engine itself never fails; a strict assembler inspects the
    // report and decides.
    let assembled: HashSet<Plugin> = [ImageCaption, Bold].into_iter().collect();
    let report = validate_dependencies(&assembled);

    let strict_result: Result<(), String> = if report.is_empty() {
        Ok(())
    } else {
        Err(format!("configuration is missing dependencies: {report:?}"))
    };
    assert!(strict_result.is_err());
}
