//! Consistency checks for an already-assembled plugin set.
//!
//! Validation is local per member: each plugin is checked against its
//! direct dependencies only, never the transitive closure. Missing
//! dependencies are reported as data; deciding whether they are fatal is
//! the caller's policy.

use std::collections::{HashMap, HashSet};

use crate::symbol::{CustomPlugin, Plugin};
use crate::tables::{direct_dependencies, premium_dependencies};

/// Report every member of `plugins` that is missing one of its direct
/// dependencies.
///
/// Returns an empty map when the set is self-consistent.
pub fn validate_dependencies(plugins: &HashSet<Plugin>) -> HashMap<Plugin, HashSet<Plugin>> {
    let mut missing_by_plugin = HashMap::new();

    for &plugin in plugins {
        let missing: HashSet<Plugin> = direct_dependencies(plugin)
            .iter()
            .copied()
            .filter(|dependency| !plugins.contains(dependency))
            .collect();

        if !missing.is_empty() {
            missing_by_plugin.insert(plugin, missing);
        }
    }

    missing_by_plugin
}

/// Report every external/premium plugin whose registered dependencies are
/// not all present in `plugins`, keyed by external name.
pub fn validate_premium_dependencies(
    plugins: &HashSet<Plugin>,
    custom_plugins: &[CustomPlugin],
) -> HashMap<String, HashSet<Plugin>> {
    let mut missing_by_name = HashMap::new();

    for descriptor in custom_plugins {
        let missing: HashSet<Plugin> = premium_dependencies(&descriptor.name)
            .iter()
            .copied()
            .filter(|dependency| !plugins.contains(dependency))
            .collect();

        if !missing.is_empty() {
            missing_by_name.insert(descriptor.name.clone(), missing);
        }
    }

    missing_by_name
}
