//! Expansion of a requested plugin set into a dependency-closed set.
//!
//! The closure walk is iterative (explicit work stack) and memoized on the
//! accumulating result, so it handles diamond dependencies in one pass and
//! terminates even if the static tables ever contain an accidental cycle.

use std::collections::HashSet;

use crate::symbol::{CORE_PLUGINS, CustomPlugin, Plugin};
use crate::tables::{direct_dependencies, premium_dependencies, recommended};

/// Expand `requested` into a set that also contains every transitive hard
/// dependency of its members.
///
/// When `include_core_plugins` is set, the result is additionally seeded
/// with the foundational plugins every configuration needs
/// ([`CORE_PLUGINS`]). The result is an unordered set; see
/// [`crate::order::topological_sort`] for a load order.
pub fn resolve(requested: &[Plugin], include_core_plugins: bool) -> HashSet<Plugin> {
    let mut resolved = HashSet::new();

    if include_core_plugins {
        for &core in CORE_PLUGINS {
            resolve_into(core, &mut resolved);
        }
    }

    for &plugin in requested {
        resolve_into(plugin, &mut resolved);
    }

    resolved
}

/// [`resolve`] plus one generation of recommended companions.
///
/// Companions are looked up only for plugins in the hard-resolved set, not
/// for plugins added by this step, so the recommendation radius stays
/// bounded at one hop. Each companion's own hard dependencies are still
/// expanded to full depth.
pub fn resolve_with_recommended(requested: &[Plugin]) -> HashSet<Plugin> {
    let mut resolved = resolve(requested, true);

    let snapshot: Vec<Plugin> = resolved.iter().copied().collect();
    for plugin in snapshot {
        for &companion in recommended(plugin) {
            resolve_into(companion, &mut resolved);
        }
    }

    resolved
}

/// [`resolve`] plus the registered dependencies of external/premium
/// plugins.
///
/// Only the central premium registry is consulted; a `dependencies` list
/// attached to a [`CustomPlugin`] descriptor by the caller is deliberately
/// ignored here.
pub fn resolve_with_premium(
    requested: &[Plugin],
    custom_plugins: &[CustomPlugin],
    include_core_plugins: bool,
) -> HashSet<Plugin> {
    let mut resolved = resolve(requested, include_core_plugins);

    for descriptor in custom_plugins {
        for &dependency in premium_dependencies(&descriptor.name) {
            resolve_into(dependency, &mut resolved);
        }
    }

    resolved
}

/// Add `plugin` and its transitive hard dependencies to `resolved`.
///
/// A plugin already in the set is not revisited, which both collapses
/// shared dependencies and guarantees termination.
pub(crate) fn resolve_into(plugin: Plugin, resolved: &mut HashSet<Plugin>) {
    let mut pending = vec![plugin];

    while let Some(next) = pending.pop() {
        if resolved.insert(next) {
            pending.extend(direct_dependencies(next).iter().copied());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Plugin::*;

    fn set(plugins: &[Plugin]) -> HashSet<Plugin> {
        plugins.iter().copied().collect()
    }

    #[test]
    fn single_plugin_pulls_direct_dependency_and_foundations() {
        let resolved = resolve(&[ImageCaption], true);
        assert_eq!(resolved, set(&[Essentials, Paragraph, Image, ImageCaption]));
    }

    #[test]
    fn shared_dependencies_are_collapsed() {
        let resolved = resolve(&[LinkImage, AutoImage], true);
        assert_eq!(
            resolved,
            set(&[
                Essentials, Paragraph, Image, Link, Clipboard, LinkImage, AutoImage
            ])
        );
    }

    #[test]
    fn deep_chain_is_fully_expanded() {
        let resolved = resolve(&[EasyImage], true);
        for expected in [
            EasyImage,
            CloudServices,
            Notification,
            ImageUpload,
            Image,
            FileRepository,
        ] {
            assert!(resolved.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn foundations_can_be_left_out() {
        let resolved = resolve(&[Bold], false);
        assert_eq!(resolved, set(&[Bold]));
    }

    #[test]
    fn resolving_a_closed_set_adds_nothing() {
        let closed = resolve(&[TableClipboard, ImageInsert], true);
        let requested: Vec<Plugin> = closed.iter().copied().collect();
        assert_eq!(resolve(&requested, true), closed);
    }

    #[test]
    fn recommended_is_a_superset_of_plain_resolution() {
        let plain = resolve(&[Image, Table], true);
        let with_recommended = resolve_with_recommended(&[Image, Table]);
        assert!(with_recommended.is_superset(&plain));
    }

    #[test]
    fn recommendations_expand_one_generation_only() {
        // Mention hard-requires Typing; Typing recommends
        // TextTransformation, which in turn recommends Autoformat. Only the
        // first generation may appear.
        let resolved = resolve_with_recommended(&[Mention]);
        assert!(resolved.contains(&TextTransformation));
        assert!(!resolved.contains(&Autoformat));
    }

    #[test]
    fn recommended_companions_bring_their_hard_dependencies() {
        // TableSelection recommends TableClipboard, which hard-requires
        // Clipboard. Clipboard must arrive even though nobody requested it.
        let resolved = resolve_with_recommended(&[TableSelection]);
        assert!(resolved.contains(&TableClipboard));
        assert!(resolved.contains(&Clipboard));
    }

    #[test]
    fn premium_names_pull_registered_dependencies() {
        let custom = [CustomPlugin::premium("ExportPdf")];
        let resolved = resolve_with_premium(&[Essentials, Paragraph], &custom, true);
        assert!(resolved.contains(&CloudServices));
        assert!(resolved.contains(&Notification));
    }

    #[test]
    fn unknown_premium_names_are_leaves() {
        let custom = [CustomPlugin::new("SomethingNobodyRegistered")];
        let resolved = resolve_with_premium(&[Bold], &custom, true);
        assert_eq!(resolved, set(&[Essentials, Paragraph, Bold]));
    }

    #[test]
    fn per_instance_dependency_lists_are_ignored() {
        let mut descriptor = CustomPlugin::premium("FormatPainter");
        descriptor.dependencies = vec![Table, MediaEmbed];

        let resolved = resolve_with_premium(&[Bold], &[descriptor], true);
        assert!(!resolved.contains(&Table));
        assert!(!resolved.contains(&MediaEmbed));
    }
}
