//! Dependency-respecting load order.
//!
//! Three-color depth-first search over the members of the input set:
//! unvisited, in-progress, finished. A dependency found in-progress means
//! the static tables contain a cycle; the edge is logged and skipped so the
//! sort always returns a full permutation of its input instead of hanging
//! or failing. Dependencies outside the input set are ignored — adding
//! missing dependencies is the resolver's job, not the sorter's.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::resolve::resolve;
use crate::symbol::Plugin;
use crate::tables::direct_dependencies;

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    InProgress,
    Finished,
}

/// Order `plugins` so that every member appears after all of its direct
/// dependencies that are also members.
///
/// The output is always a permutation of the input, even when the tables
/// contain an accidental cycle.
pub fn topological_sort(plugins: &HashSet<Plugin>) -> Vec<Plugin> {
    sort_with(plugins, direct_dependencies)
}

/// Resolve `requested` (with the foundational plugins) and return the
/// result in load order.
pub fn load_order(requested: &[Plugin]) -> Vec<Plugin> {
    topological_sort(&resolve(requested, true))
}

fn sort_with<F>(plugins: &HashSet<Plugin>, dependencies_of: F) -> Vec<Plugin>
where
    F: Fn(Plugin) -> &'static [Plugin],
{
    let mut marks: HashMap<Plugin, Mark> = HashMap::with_capacity(plugins.len());
    let mut order = Vec::with_capacity(plugins.len());
    // (plugin, children_done) frames; a plugin is pushed once to expand its
    // dependencies and once more to emit it after they finish.
    let mut stack: Vec<(Plugin, bool)> = Vec::new();

    for &root in plugins {
        if marks.contains_key(&root) {
            continue;
        }
        stack.push((root, false));

        while let Some((plugin, children_done)) = stack.pop() {
            if children_done {
                marks.insert(plugin, Mark::Finished);
                order.push(plugin);
                continue;
            }
            if marks.contains_key(&plugin) {
                // Reached through more than one edge; the first visit wins.
                continue;
            }

            marks.insert(plugin, Mark::InProgress);
            stack.push((plugin, true));

            for &dependency in dependencies_of(plugin) {
                if !plugins.contains(&dependency) {
                    continue;
                }
                match marks.get(&dependency) {
                    None => stack.push((dependency, false)),
                    Some(Mark::InProgress) => {
                        warn!(
                            plugin = plugin.name(),
                            dependency = dependency.name(),
                            "circular dependency detected, skipping edge"
                        );
                    }
                    Some(Mark::Finished) => {}
                }
            }
        }
    }

    order
}
