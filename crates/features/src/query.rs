//! Reverse-dependency queries and introspection.
//!
//! These answer "what breaks if I remove this plugin" for a configuration
//! UI, and render a plugin's dependency structure for debugging. The
//! dependency tables only store forward edges, so reverse queries scan the
//! closed vocabulary; at this graph size that is cheaper than maintaining a
//! second table that could drift out of sync.

use std::collections::HashSet;

use crate::symbol::Plugin;
use crate::tables::direct_dependencies;

/// Every plugin whose direct dependencies include `plugin`.
pub fn dependents_of(plugin: Plugin) -> HashSet<Plugin> {
    Plugin::ALL
        .iter()
        .copied()
        .filter(|&candidate| direct_dependencies(candidate).contains(&plugin))
        .collect()
}

/// The members of `current` that would lose a satisfied dependency if
/// `plugin` were removed.
pub fn removal_impact(plugin: Plugin, current: &HashSet<Plugin>) -> HashSet<Plugin> {
    dependents_of(plugin)
        .intersection(current)
        .copied()
        .collect()
}

/// Render the transitive dependency structure of `plugin` as an ASCII
/// tree, for humans rather than machines.
///
/// A dependency encountered again while already being rendered on the
/// current path is marked `(circular)` and not descended, mirroring the
/// sorter's tolerance of graph-authoring mistakes.
pub fn dependency_tree(plugin: Plugin) -> String {
    tree_with(plugin, direct_dependencies)
}

fn tree_with<F>(plugin: Plugin, dependencies_of: F) -> String
where
    F: Fn(Plugin) -> &'static [Plugin] + Copy,
{
    let mut out = String::new();
    out.push_str(plugin.name());
    out.push('\n');

    let mut path = vec![plugin];
    render_branches(plugin, dependencies_of, &mut path, "", &mut out);
    out
}

fn render_branches<F>(
    plugin: Plugin,
    dependencies_of: F,
    path: &mut Vec<Plugin>,
    prefix: &str,
    out: &mut String,
) where
    F: Fn(Plugin) -> &'static [Plugin] + Copy,
{
    let dependencies = dependencies_of(plugin);

    for (index, &dependency) in dependencies.iter().enumerate() {
        let last = index + 1 == dependencies.len();
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(dependency.name());

        if path.contains(&dependency) {
            out.push_str(" (circular)\n");
            continue;
        }
        out.push('\n');

        path.push(dependency);
        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        render_branches(dependency, dependencies_of, path, &child_prefix, out);
        path.pop();
    }
}
