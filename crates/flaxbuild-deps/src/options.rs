//! Per-recipe build options.

use std::path::PathBuf;

use flaxbuild_targets::{TargetArchitecture, TargetPlatform};

/// Inputs for one recipe run. Owned by the dependency builder; recipes only
/// read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Platforms to build. Always a subset of what the recipe supports.
    pub platforms: Vec<TargetPlatform>,
    /// Private scratch folder of the recipe.
    pub intermediate_folder: PathBuf,
    /// Shared third-party headers tree (`Source/ThirdParty`).
    pub third_party_folder: PathBuf,
    /// Root of the per-platform folders (`Source/Platforms`).
    pub platforms_folder: PathBuf,
}

impl BuildOptions {
    /// Staging folder for prebuilt binaries of one platform/architecture:
    /// `<platforms>/<Platform>/Binaries/ThirdParty/<arch>`.
    pub fn platform_third_party_folder(
        &self,
        platform: TargetPlatform,
        architecture: TargetArchitecture,
    ) -> PathBuf {
        self.platforms_folder
            .join(platform.name())
            .join("Binaries")
            .join("ThirdParty")
            .join(architecture.name())
    }
}
