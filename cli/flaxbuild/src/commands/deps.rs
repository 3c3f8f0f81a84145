//! `flaxbuild deps`: fetch, build and stage third-party dependencies.

use anyhow::Result;
use flaxbuild_deps::{
    BuildContext, BuildPlan, BuildSummary, DependencyRegistry, DepsBuilder, DepsRequest,
    SystemToolRunner, ToolsConfig,
};
use flaxbuild_workspace::WorkspaceState;

/// Build the requested dependencies.
///
/// With `dry_run`, only the plan is printed: nothing is fetched, built or
/// staged, and the returned summary lists the planned recipes as built.
pub fn run(
    state: &WorkspaceState,
    tools: &ToolsConfig,
    registry: &DependencyRegistry,
    request: &DepsRequest,
    dry_run: bool,
) -> Result<BuildSummary> {
    let ctx = BuildContext::new(state, tools, &SystemToolRunner);
    let builder = DepsBuilder::new(registry);

    let summary = if dry_run {
        let plan = builder.plan(&ctx, request)?;
        print_plan(&plan);
        BuildSummary {
            built: plan.builds.iter().map(|b| b.dependency.name()).collect(),
            skipped: plan.skipped,
        }
    } else {
        let summary = builder.run(&ctx, request)?;
        print_summary(&summary);
        summary
    };
    Ok(summary)
}

fn print_plan(plan: &BuildPlan<'_>) {
    for build in &plan.builds {
        let platforms: Vec<&str> = build.options.platforms.iter().map(|p| p.name()).collect();
        println!(
            "Would build {} for {}",
            build.dependency.name(),
            platforms.join(", ")
        );
        println!("  scratch: {}", build.options.intermediate_folder.display());
    }
    for name in &plan.skipped {
        println!("Would skip {name} (no supported platform requested)");
    }
    if plan.builds.is_empty() && plan.skipped.is_empty() {
        println!("Nothing to build.");
    }
}

fn print_summary(summary: &BuildSummary) {
    for name in &summary.built {
        println!("Built {name}");
    }
    for name in &summary.skipped {
        println!("Skipped {name} (no supported platform requested)");
    }
    if summary.built.is_empty() && summary.skipped.is_empty() {
        println!("Nothing to build.");
    }
}
