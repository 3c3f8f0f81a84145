//! `flaxbuild info`: workspace and toolchain diagnostics.

use std::process::Command;

use anyhow::Result;
use flaxbuild_deps::ToolsConfig;
use flaxbuild_workspace::WorkspaceState;

/// Print the workspace state and whether the external tools can be found.
pub fn run(state: &WorkspaceState, tools: &ToolsConfig) -> Result<()> {
    println!("=== Flax Build ===");
    println!();
    println!("flaxbuild version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("--- Workspace ---");
    println!("  Root:        {}", state.root().display());
    println!("  Engine root: {}", state.engine_root().display());
    match state.host_platform() {
        Some(host) => println!("  Host:        {host}"),
        None => println!("  Host:        unsupported"),
    }
    println!("  ThirdParty:  {}", state.third_party_folder().display());
    println!("  Scratch:     {}", state.deps_intermediate_folder().display());
    println!();

    println!("--- Project ---");
    match state.project() {
        Some(project) => {
            println!("  Name:    {}", project.name);
            println!("  Version: {}", project.version);
            println!("  File:    {}", project.project_path.display());
            for referenced in project.projects().into_iter().skip(1) {
                println!(
                    "  Uses:    {} ({})",
                    referenced.name,
                    referenced.project_path.display()
                );
            }
        }
        None => println!("  no project file in {}", state.root().display()),
    }
    println!();

    println!("--- Targets ---");
    println!("  Platforms:      {}", join(state.all_platforms()));
    println!("  Architectures:  {}", join(state.all_architectures()));
    println!("  Configurations: {}", join(state.all_configurations()));
    println!();

    println!("--- Tools ---");
    print_tool_status("git", &tools.git, &["--version"]);
    print_tool_status("python", &tools.python, &["--version"]);
    print_tool_status("cmake", &tools.cmake, &["--version"]);
    print_tool_status("msbuild", &tools.msbuild, &["-version"]);
    match tools.android_ndk() {
        Some(ndk) => println!("  android-ndk: {}", ndk.display()),
        None => println!("  android-ndk: not configured"),
    }

    Ok(())
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_tool_status(label: &str, program: &str, args: &[&str]) {
    match Command::new(program).args(args).output() {
        Ok(output) => {
            // Some tools print their version on stderr.
            let text = if output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stderr).into_owned()
            } else {
                String::from_utf8_lossy(&output.stdout).into_owned()
            };
            let first_line = text.lines().next().unwrap_or("(unknown version)");
            println!("  {label}: {first_line}");
        }
        Err(_) => {
            println!("  {label}: not found ({program})");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flaxbuild_targets::TargetPlatform;

    #[test]
    fn info_runs_without_project() {
        let dir = tempfile::tempdir().unwrap();
        let state = WorkspaceState::new(dir.path(), dir.path());
        run(&state, &ToolsConfig::default()).unwrap();
    }

    #[test]
    fn info_runs_with_missing_tools() {
        let dir = tempfile::tempdir().unwrap();
        let state = WorkspaceState::new(dir.path(), dir.path()).with_host(None);
        let tools = ToolsConfig {
            git: "flaxbuild-no-such-git".into(),
            ..ToolsConfig::default()
        };
        run(&state, &tools).unwrap();
    }

    #[test]
    fn join_uses_display_names() {
        assert_eq!(
            join(&[TargetPlatform::Windows, TargetPlatform::XboxOne]),
            "Windows, XboxOne"
        );
    }
}
