//! Redattore feature-resolution engine.
//!
//! Assembling a feature set for the editor means naming the plugins you
//! want; many of them silently require others. This library handles:
//! - The closed vocabulary of first-party plugin symbols and descriptors
//!   for external/premium plugins
//! - Expanding a requested set into a dependency-closed set, optionally
//!   with recommended companions or premium dependencies
//! - Validating that an assembled set is self-consistent
//! - Computing a dependency-first load order
//! - Reverse queries ("what breaks if I remove this plugin")
//!
//! Everything is a pure, synchronous computation over static tables built
//! into the binary: no I/O, no shared mutable state, safe to call from any
//! number of threads. Invalid inputs degrade rather than fail — missing
//! dependencies come back as data and cycles are logged and skipped —
//! leaving strict-mode policy to the caller.

pub mod order;
pub mod query;
pub mod resolve;
pub mod symbol;
pub mod tables;
pub mod validate;

pub use order::{load_order, topological_sort};
pub use query::{dependency_tree, dependents_of, removal_impact};
pub use resolve::{resolve, resolve_with_premium, resolve_with_recommended};
pub use symbol::{CORE_PLUGINS, CustomPlugin, Plugin, UnknownPluginError};
pub use tables::{
    direct_dependencies, premium_dependencies, recommended, requires_cloud_services,
};
pub use validate::{validate_dependencies, validate_premium_dependencies};
