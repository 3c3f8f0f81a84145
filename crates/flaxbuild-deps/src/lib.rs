//! Third-party dependency recipes for the engine.
//!
//! A recipe fetches one upstream component, builds it with its native build
//! system and stages the libraries and public headers into the engine's
//! `Source/Platforms/*/Binaries/ThirdParty` and `Source/ThirdParty` trees.
//!
//! Every external tool goes through a [`ToolRunner`], and every recipe run
//! reads the same [`BuildContext`]. Recipes run one at a time; a failing tool
//! aborts the whole run and leaves the staging tree as it was at that point.

pub mod builder;
pub mod cmake;
pub mod context;
pub mod dependencies;
pub mod dependency;
pub mod error;
pub mod fsutil;
pub mod git;
pub mod msbuild;
pub mod options;
pub mod registry;
pub mod runner;

// Re-exports for convenience.
pub use builder::{BuildPlan, BuildSummary, DepsBuilder, DepsRequest, PlannedBuild};
pub use context::BuildContext;
pub use dependency::Dependency;
pub use error::{DepsError, Result};
pub use options::BuildOptions;
pub use registry::DependencyRegistry;
pub use runner::{Invocation, SystemToolRunner, ToolRunner, ToolsConfig};
