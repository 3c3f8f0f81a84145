//! Lookup table of recipes keyed by name.

use crate::dependencies::Glslang;
use crate::dependency::Dependency;
use crate::error::{DepsError, Result};

/// Registered recipes, kept in registration order.
#[derive(Default)]
pub struct DependencyRegistry {
    dependencies: Vec<Box<dyn Dependency>>,
}

impl DependencyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in recipe.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.dependencies.push(Box::new(Glslang));
        registry
    }

    /// Add a recipe. Names are unique, compared case-insensitively.
    pub fn register(&mut self, dependency: Box<dyn Dependency>) -> Result<()> {
        if self.get(dependency.name()).is_some() {
            return Err(DepsError::DuplicateDependency {
                name: dependency.name().to_string(),
            });
        }
        self.dependencies.push(dependency);
        Ok(())
    }

    /// Find a recipe by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&dyn Dependency> {
        self.dependencies
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .map(|d| d.as_ref())
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn require(&self, name: &str) -> Result<&dyn Dependency> {
        self.get(name).ok_or_else(|| DepsError::UnknownDependency {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Dependency> {
        self.dependencies.iter().map(|d| d.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.dependencies.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_glslang() {
        let registry = DependencyRegistry::builtin();
        assert_eq!(registry.names(), ["glslang"]);
        assert!(registry.get("GLSLANG").is_some());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = DependencyRegistry::builtin();
        let err = registry.register(Box::new(Glslang)).unwrap_err();
        assert!(matches!(err, DepsError::DuplicateDependency { .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn require_unknown_lists_available() {
        let registry = DependencyRegistry::builtin();
        let err = registry.require("PhysX").err().unwrap();
        assert_eq!(
            err.to_string(),
            "unknown dependency 'PhysX' (available: glslang)"
        );
    }

    #[test]
    fn empty_registry() {
        let registry = DependencyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
