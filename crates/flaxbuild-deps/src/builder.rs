//! Runs the selected recipes one after another.

use std::time::Instant;

use flaxbuild_targets::TargetPlatform;
use tracing::{info, warn};

use crate::context::BuildContext;
use crate::dependency::Dependency;
use crate::error::{DepsError, Result};
use crate::fsutil;
use crate::options::BuildOptions;
use crate::registry::DependencyRegistry;

/// What to build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepsRequest {
    /// Requested platforms. Empty means the host platform.
    pub platforms: Vec<TargetPlatform>,
    /// Recipe names to build. Empty means every registered recipe.
    pub only: Vec<String>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Recipes that ran, in order.
    pub built: Vec<&'static str>,
    /// Recipes with no supported platform in the request.
    pub skipped: Vec<&'static str>,
}

/// A recipe selected to run, with the options it will receive.
pub struct PlannedBuild<'a> {
    pub dependency: &'a dyn Dependency,
    pub options: BuildOptions,
}

/// Recipes to run and recipes skipped for lack of a supported platform.
pub struct BuildPlan<'a> {
    pub builds: Vec<PlannedBuild<'a>>,
    pub skipped: Vec<&'static str>,
}

/// Drives recipes from a registry.
pub struct DepsBuilder<'a> {
    registry: &'a DependencyRegistry,
}

impl<'a> DepsBuilder<'a> {
    pub fn new(registry: &'a DependencyRegistry) -> Self {
        Self { registry }
    }

    /// Decide which recipes run and with which options, without touching
    /// the filesystem or running any tool.
    pub fn plan(&self, ctx: &BuildContext<'_>, request: &DepsRequest) -> Result<BuildPlan<'a>> {
        let selected = self.select(request)?;
        let requested = requested_platforms(ctx, request);

        let mut plan = BuildPlan {
            builds: Vec::new(),
            skipped: Vec::new(),
        };
        for dependency in selected {
            let name = dependency.name();
            let platforms = match ctx.host_platform() {
                Some(host) => supported_subset(&requested, dependency.platforms(host)),
                None => Vec::new(),
            };
            if platforms.is_empty() {
                plan.skipped.push(name);
                continue;
            }
            let options = BuildOptions {
                platforms,
                intermediate_folder: ctx.state().deps_intermediate_folder().join(name),
                third_party_folder: ctx.state().third_party_folder(),
                platforms_folder: ctx.state().platforms_folder(),
            };
            plan.builds.push(PlannedBuild { dependency, options });
        }
        Ok(plan)
    }

    /// Build every selected recipe, stopping at the first failure.
    pub fn run(&self, ctx: &BuildContext<'_>, request: &DepsRequest) -> Result<BuildSummary> {
        let plan = self.plan(ctx, request)?;
        for name in &plan.skipped {
            warn!(dependency = name, "no supported platform requested, skipping");
        }

        let mut summary = BuildSummary {
            built: Vec::new(),
            skipped: plan.skipped,
        };
        for PlannedBuild { dependency, options } in plan.builds {
            let name = dependency.name();
            info!(dependency = name, platforms = ?options.platforms, "building");
            let started = Instant::now();
            fsutil::setup_directory(&options.intermediate_folder, false)
                .and_then(|()| dependency.build(ctx, &options))
                .map_err(|source| DepsError::Recipe {
                    name: name.to_string(),
                    source: Box::new(source),
                })?;
            info!(
                dependency = name,
                elapsed = ?started.elapsed(),
                "finished"
            );
            summary.built.push(name);
        }
        Ok(summary)
    }

    fn select(&self, request: &DepsRequest) -> Result<Vec<&'a dyn Dependency>> {
        if request.only.is_empty() {
            return Ok(self.registry.iter().collect());
        }
        let mut selected: Vec<&'a dyn Dependency> = Vec::new();
        for name in &request.only {
            let dependency = self.registry.require(name)?;
            if !selected.iter().any(|d| d.name() == dependency.name()) {
                selected.push(dependency);
            }
        }
        Ok(selected)
    }
}

fn requested_platforms(ctx: &BuildContext<'_>, request: &DepsRequest) -> Vec<TargetPlatform> {
    if request.platforms.is_empty() {
        ctx.host_platform().into_iter().collect()
    } else {
        request.platforms.clone()
    }
}

/// Requested platforms the recipe supports, in request order, without duplicates.
fn supported_subset(requested: &[TargetPlatform], supported: &[TargetPlatform]) -> Vec<TargetPlatform> {
    let mut out = Vec::new();
    for platform in requested {
        if supported.contains(platform) && !out.contains(platform) {
            out.push(*platform);
        }
    }
    out
}
