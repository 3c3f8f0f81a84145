//! `flaxbuild list`: show the registered dependency recipes.

use anyhow::Result;
use flaxbuild_deps::{Dependency, DependencyRegistry};
use flaxbuild_targets::TargetPlatform;

/// Print every recipe with its description and the platforms it can build
/// on this host.
pub fn run(registry: &DependencyRegistry, host: Option<TargetPlatform>) -> Result<()> {
    println!("Dependencies:");
    println!();
    for dependency in registry.iter() {
        println!(
            "  {:<16} {}",
            dependency.name(),
            dependency.description()
        );
        println!("  {:<16} platforms: {}", "", platforms_label(dependency, host));
    }
    println!();
    println!("Use 'flaxbuild deps --only <name>' to build a single dependency.");
    Ok(())
}

/// Comma-separated platforms a recipe supports on `host`.
fn platforms_label(dependency: &dyn Dependency, host: Option<TargetPlatform>) -> String {
    let platforms = host.map(|h| dependency.platforms(h)).unwrap_or(&[]);
    if platforms.is_empty() {
        return "none on this host".to_string();
    }
    platforms
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}
