//! The recipe contract.

use flaxbuild_targets::TargetPlatform;

use crate::context::BuildContext;
use crate::error::Result;
use crate::options::BuildOptions;

/// A recipe that fetches, builds and stages one third-party component.
///
/// Recipes are stateless; everything a run needs comes in through the
/// context and the options.
pub trait Dependency {
    /// Registry key, also the name of the recipe's intermediate folder.
    fn name(&self) -> &'static str;

    /// One-line description of the component.
    fn description(&self) -> &'static str;

    /// Platforms this recipe can build when running on `host`.
    ///
    /// `build` is only ever called with platforms from this set.
    fn platforms(&self, host: TargetPlatform) -> &'static [TargetPlatform];

    /// Fetch, build and stage the component for `options.platforms`.
    fn build(&self, ctx: &BuildContext<'_>, options: &BuildOptions) -> Result<()>;
}
