//! Khronos reference front-end for GLSL and ESSL, and sample SPIR-V generator.

use std::path::Path;

use flaxbuild_targets::{TargetArchitecture, TargetPlatform};
use tracing::info;

use crate::cmake::{self, CMAKE_CACHE_FILE};
use crate::context::BuildContext;
use crate::dependency::Dependency;
use crate::error::{DepsError, Result};
use crate::options::BuildOptions;
use crate::{fsutil, git, msbuild};

/// Fork of the upstream repository pinned for the engine.
pub const REPOSITORY_URL: &str = "https://github.com/FlaxEngine/glslang.git";

/// Libraries staged into the platform binaries folder.
pub const OUTPUT_LIBRARIES: [&str; 9] = [
    "GenericCodeGen.lib",
    "MachineIndependent.lib",
    "HLSL.lib",
    "OSDependent.lib",
    "OGLCompiler.lib",
    "SPIRV-Tools-opt.lib",
    "SPIRV-Tools.lib",
    "SPIRV.lib",
    "glslang.lib",
];

/// Subfolders of `include/glslang` mirrored into the third-party tree.
pub const HEADER_DIRS: [&str; 5] = ["HLSL", "Include", "MachineIndependent", "Public", "SPIRV"];

/// Third-party folder of the sibling component whose headers glslang bundles.
pub const SPIRV_TOOLS_DIR: &str = "spirv-tools";

const SOURCES_SCRIPT: &str = "update_glslang_sources.py";
const CONFIGURATION: &str = "Release";
const HEADER_EXTENSIONS: [&str; 2] = ["h", "hpp"];

#[derive(Debug, Default, Clone, Copy)]
pub struct Glslang;

impl Glslang {
    fn cmake_args(install_dir: &Path) -> Vec<String> {
        vec![
            format!("-DCMAKE_INSTALL_PREFIX={}", install_dir.display()),
            "-DENABLE_CTEST=OFF".into(),
            "-DENABLE_HLSL=ON".into(),
            "-DENABLE_SPVREMAPPER=ON".into(),
            "-DENABLE_GLSLANG_BINARIES=OFF".into(),
        ]
    }

    fn build_windows(ctx: &BuildContext<'_>, options: &BuildOptions, install_dir: &Path) -> Result<()> {
        let build_dir = &options.intermediate_folder;
        let architecture = TargetArchitecture::X64;

        info!(platform = "Windows", %architecture, "building glslang");
        fsutil::file_delete(&build_dir.join(CMAKE_CACHE_FILE))?;
        cmake::run_cmake(
            ctx,
            build_dir,
            TargetPlatform::Windows,
            architecture,
            &Self::cmake_args(install_dir),
        )?;
        cmake::build_and_install(ctx, build_dir, CONFIGURATION)?;
        msbuild::build_solution(
            ctx,
            &build_dir.join("glslang.sln"),
            CONFIGURATION,
            architecture.name(),
        )?;

        let libs_root = install_dir.join("lib");
        let deps_folder = options.platform_third_party_folder(TargetPlatform::Windows, architecture);
        for file in OUTPUT_LIBRARIES {
            fsutil::file_copy(&libs_root.join(file), &deps_folder.join(file))?;
        }
        Ok(())
    }

    /// Replace the staged glslang headers with the installed ones.
    fn copy_headers(options: &BuildOptions, install_dir: &Path) -> Result<()> {
        for dir in HEADER_DIRS {
            let src = install_dir.join("include").join("glslang").join(dir);
            let dst = options.third_party_folder.join("glslang").join(dir);
            fsutil::directory_delete(&dst)?;
            fsutil::directory_copy(&src, &dst)?;
        }
        Ok(())
    }

    /// glslang ships its own SPIRV-Tools; keep the sibling component's
    /// headers at the same version as the libraries just built.
    fn sync_spirv_tools_headers(options: &BuildOptions, install_dir: &Path) -> Result<()> {
        let src = install_dir.join("include").join(SPIRV_TOOLS_DIR);
        let dst = options.third_party_folder.join(SPIRV_TOOLS_DIR);
        if !src.is_dir() {
            return Err(DepsError::MissingSource { path: src });
        }
        fsutil::setup_directory(&dst, false)?;
        for extension in HEADER_EXTENSIONS {
            for file in fsutil::files_with_extension(&dst, extension)? {
                fsutil::file_delete(&file)?;
            }
        }
        for extension in HEADER_EXTENSIONS {
            for file in fsutil::files_with_extension(&src, extension)? {
                if let Some(name) = file.file_name() {
                    fsutil::file_copy(&file, &dst.join(name))?;
                }
            }
        }
        Ok(())
    }
}

impl Dependency for Glslang {
    fn name(&self) -> &'static str {
        "glslang"
    }

    fn description(&self) -> &'static str {
        "Khronos reference front-end for GLSL and ESSL, and sample SPIR-V generator"
    }

    fn platforms(&self, host: TargetPlatform) -> &'static [TargetPlatform] {
        match host {
            TargetPlatform::Windows => &[TargetPlatform::Windows],
            _ => &[],
        }
    }

    fn build(&self, ctx: &BuildContext<'_>, options: &BuildOptions) -> Result<()> {
        let supported = ctx.host_platform().map_or(&[][..], |host| self.platforms(host));
        let platforms: Vec<TargetPlatform> = options
            .platforms
            .iter()
            .copied()
            .filter(|p| supported.contains(p))
            .collect();
        if platforms.is_empty() {
            info!("no supported platform requested, nothing to build");
            return Ok(());
        }

        let root = &options.intermediate_folder;
        let install_dir = root.join("install");

        git::clone_git_repo_fast(ctx, root, REPOSITORY_URL)?;

        info!("updating glslang external sources");
        ctx.run(&ctx.tools().python, [SOURCES_SCRIPT], root)?;

        for platform in platforms {
            if platform == TargetPlatform::Windows {
                Self::build_windows(ctx, options, &install_dir)?;
            }
        }

        info!("staging glslang headers");
        Self::copy_headers(options, &install_dir)?;
        Self::sync_spirv_tools_headers(options, &install_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_windows_hosts_build_windows() {
        assert_eq!(Glslang.platforms(TargetPlatform::Windows), [TargetPlatform::Windows]);
        for host in TargetPlatform::ALL {
            if host != TargetPlatform::Windows {
                assert!(Glslang.platforms(host).is_empty(), "{host}");
            }
        }
    }

    #[test]
    fn cmake_flags() {
        let args = Glslang::cmake_args(Path::new("/scratch/install"));
        assert_eq!(args[0], "-DCMAKE_INSTALL_PREFIX=/scratch/install");
        assert!(args.contains(&"-DENABLE_HLSL=ON".to_string()));
        assert!(args.contains(&"-DENABLE_GLSLANG_BINARIES=OFF".to_string()));
    }
}
