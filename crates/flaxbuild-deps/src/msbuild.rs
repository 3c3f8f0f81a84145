//! Visual Studio solution builds.

use std::path::Path;

use crate::context::BuildContext;
use crate::error::Result;

/// Build `solution` for `configuration|platform` with MSBuild.
pub fn build_solution(
    ctx: &BuildContext<'_>,
    solution: &Path,
    configuration: &str,
    platform: &str,
) -> Result<()> {
    let working_dir = solution.parent().unwrap_or(Path::new("."));
    ctx.run(
        &ctx.tools().msbuild,
        [
            solution.display().to_string(),
            "/m".to_string(),
            "/t:Build".to_string(),
            format!("/p:Configuration={configuration}"),
            format!("/p:Platform={platform}"),
        ],
        working_dir,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{RecordingToolRunner, ToolsConfig};
    use flaxbuild_workspace::WorkspaceState;

    #[test]
    fn solution_build_arguments() {
        let state = WorkspaceState::new("/w", "/w");
        let tools = ToolsConfig {
            msbuild: "MSBuild.exe".into(),
            ..ToolsConfig::default()
        };
        let runner = RecordingToolRunner::new();
        let ctx = BuildContext::new(&state, &tools, &runner);

        build_solution(&ctx, Path::new("/w/deps/glslang.sln"), "Release", "x64").unwrap();
        let seen = runner.invocations();
        assert_eq!(seen[0].program, "MSBuild.exe");
        assert_eq!(
            seen[0].args,
            ["/w/deps/glslang.sln", "/m", "/t:Build", "/p:Configuration=Release", "/p:Platform=x64"]
        );
        assert_eq!(seen[0].working_dir, Path::new("/w/deps"));
    }
}
