//! CMake invocation with per-platform generator settings.

use std::path::Path;

use flaxbuild_targets::{TargetArchitecture, TargetPlatform};

use crate::context::BuildContext;
use crate::error::{DepsError, Result};
use crate::runner::ToolsConfig;

/// Name of the cache file CMake leaves in the build folder.
pub const CMAKE_CACHE_FILE: &str = "CMakeCache.txt";

const ANDROID_API_LEVEL: &str = "android-24";

fn visual_studio_arch(architecture: TargetArchitecture) -> &'static str {
    match architecture {
        TargetArchitecture::X86 => "Win32",
        TargetArchitecture::X64 => "x64",
        TargetArchitecture::ARM => "ARM",
        TargetArchitecture::ARM64 => "ARM64",
    }
}

fn android_abi(architecture: TargetArchitecture) -> &'static str {
    match architecture {
        TargetArchitecture::X86 => "x86",
        TargetArchitecture::X64 => "x86_64",
        TargetArchitecture::ARM => "armeabi-v7a",
        TargetArchitecture::ARM64 => "arm64-v8a",
    }
}

/// Generator and toolchain arguments for a platform/architecture pair.
pub fn generator_args(
    tools: &ToolsConfig,
    platform: TargetPlatform,
    architecture: TargetArchitecture,
) -> Result<Vec<String>> {
    let mut args: Vec<String> = Vec::new();
    match platform {
        TargetPlatform::Windows | TargetPlatform::XboxOne | TargetPlatform::XboxScarlett => {
            args.extend(["-G".into(), tools.vs_generator.clone()]);
            args.extend(["-A".into(), visual_studio_arch(architecture).into()]);
        }
        TargetPlatform::UWP => {
            args.extend(["-G".into(), tools.vs_generator.clone()]);
            args.extend(["-A".into(), visual_studio_arch(architecture).into()]);
            args.push("-DCMAKE_SYSTEM_NAME=WindowsStore".into());
            args.push("-DCMAKE_SYSTEM_VERSION=10.0".into());
        }
        TargetPlatform::Linux => {
            args.extend(["-G".into(), "Unix Makefiles".into()]);
        }
        TargetPlatform::Android => {
            let ndk = tools.android_ndk().ok_or_else(|| DepsError::UnsupportedPlatform {
                platform,
                architecture,
                detail: "Android NDK not found (set ANDROID_NDK or tools.android-ndk)".into(),
            })?;
            let toolchain = ndk.join("build").join("cmake").join("android.toolchain.cmake");
            args.extend(["-G".into(), "Unix Makefiles".into()]);
            args.push(format!("-DCMAKE_TOOLCHAIN_FILE={}", toolchain.display()));
            args.push(format!("-DANDROID_NDK={}", ndk.display()));
            args.push(format!("-DANDROID_ABI={}", android_abi(architecture)));
            args.push(format!("-DANDROID_PLATFORM={ANDROID_API_LEVEL}"));
        }
        TargetPlatform::PS4 => {
            return Err(DepsError::UnsupportedPlatform {
                platform,
                architecture,
                detail: "no CMake toolchain is configured for this platform".into(),
            });
        }
    }
    Ok(args)
}

/// Configure the CMake project in `path` for the given target.
pub fn run_cmake(
    ctx: &BuildContext<'_>,
    path: &Path,
    platform: TargetPlatform,
    architecture: TargetArchitecture,
    custom_args: &[String],
) -> Result<()> {
    let mut args = vec![".".to_string()];
    args.extend(generator_args(ctx.tools(), platform, architecture)?);
    args.extend(custom_args.iter().cloned());
    ctx.run(&ctx.tools().cmake, args, path)
}

/// `cmake --build . --config <configuration> --target install`.
pub fn build_and_install(ctx: &BuildContext<'_>, path: &Path, configuration: &str) -> Result<()> {
    ctx.run(
        &ctx.tools().cmake,
        ["--build", ".", "--config", configuration, "--target", "install"],
        path,
    )
}
