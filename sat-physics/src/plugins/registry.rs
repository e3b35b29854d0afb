// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Name-keyed registries for colliders and resolvers
//!
//! Both registries share one implementation, [`Registry`], which provides:
//! - Registration with overwrite semantics (last registration for a name wins)
//! - Removal by name
//! - Lookup by name
//! - API version compatibility checking at registration time

use crate::plugins::api::{Collider, Definition, Resolver, COLLISION_API_VERSION};
use log::debug;
use semver::Version;
use std::collections::HashMap;

/// Registry of collider definitions keyed by shape-type name
pub type ColliderRegistry = Registry<dyn Collider>;

/// Registry of resolver definitions keyed by response-type name
pub type ResolverRegistry = Registry<dyn Resolver>;

/// Name-keyed store of boxed definitions
///
/// # Thread Safety
///
/// The registry is Send + Sync. It is meant to be written during setup and
/// teardown and only read while objects are being solved.
pub struct Registry<T: ?Sized + Definition> {
    definitions: HashMap<String, Box<T>>,
}

impl<T: ?Sized + Definition> Registry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry {
            definitions: HashMap::new(),
        }
    }

    /// Register a definition under `name`
    ///
    /// A definition already stored under the same name is replaced.
    ///
    /// # Returns
    ///
    /// Ok with the replaced definition (if any), or an error if the
    /// definition's API version is incompatible with the engine.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sat_physics::plugins::{ColliderRegistry, CircleCollider};
    ///
    /// let mut registry = ColliderRegistry::new();
    /// registry.register("circle", Box::new(CircleCollider)).unwrap();
    /// assert!(registry.contains("circle"));
    /// ```
    pub fn register(
        &mut self,
        name: impl Into<String>,
        definition: Box<T>,
    ) -> Result<Option<Box<T>>, String> {
        let name = name.into();

        let api_version = definition.api_version();
        if !is_version_compatible(api_version, COLLISION_API_VERSION) {
            return Err(format!(
                "Definition '{}' API version {} is incompatible with engine API version {}",
                name, api_version, COLLISION_API_VERSION
            ));
        }

        let previous = self.definitions.insert(name.clone(), definition);
        if previous.is_some() {
            debug!("Replaced definition '{}'", name);
        }
        Ok(previous)
    }

    /// Remove the definition stored under `name`
    ///
    /// Returns the removed definition, or None if the name was unknown.
    pub fn unregister(&mut self, name: &str) -> Option<Box<T>> {
        let removed = self.definitions.remove(name);
        if removed.is_some() {
            debug!("Unregistered definition '{}'", name);
        }
        removed
    }

    /// Get a definition by name
    pub fn get(&self, name: &str) -> Option<&T> {
        self.definitions.get(name).map(|d| d.as_ref())
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Get the number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Remove every definition
    pub fn clear(&mut self) {
        self.definitions.clear();
    }
}

impl<T: ?Sized + Definition> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a definition API version is compatible with the engine
///
/// Uses semantic versioning rules:
/// - Major version must match
/// - For major version 0.x.y, minor versions must match (breaking changes)
/// - For major version >= 1, minor version can be less than or equal
/// - Patch version is ignored
fn is_version_compatible(definition_version: &str, engine_version: &str) -> bool {
    let (Ok(definition), Ok(engine)) = (
        Version::parse(definition_version),
        Version::parse(engine_version),
    ) else {
        return false;
    };

    if definition.major != engine.major {
        return false;
    }

    if definition.major != 0 {
        definition.minor <= engine.minor
    } else {
        definition.minor == engine.minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::CollisionObject;
    use crate::plugins::api::{Counterpart, Resolver};
    use crate::vector::{Projection, Vector2};
    use std::any::Any;

    struct TestResolver {
        tag: u32,
        api_version: &'static str,
    }

    impl TestResolver {
        fn new(tag: u32) -> Self {
            TestResolver {
                tag,
                api_version: COLLISION_API_VERSION,
            }
        }
    }

    impl Definition for TestResolver {
        fn api_version(&self) -> &str {
            self.api_version
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl Resolver for TestResolver {
        fn resolve_collision(
            &self,
            _object: &mut CollisionObject,
            _other: &CollisionObject,
            _overlap_amount: f64,
            _overlap_normal: Vector2,
        ) {
        }
    }

    struct NullCollider;

    impl Definition for NullCollider {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl Collider for NullCollider {
        fn normals(&self, _object: &CollisionObject, _other: Counterpart<'_>) -> Vec<Vector2> {
            Vec::new()
        }

        fn closest_point(&self, object: &CollisionObject, _point: Vector2) -> Vector2 {
            object.position
        }

        fn project(&self, _object: &CollisionObject, _axis: Vector2) -> Projection {
            Projection::new(0.0, 0.0)
        }
    }

    fn tag_of(registry: &ResolverRegistry, name: &str) -> u32 {
        registry
            .get(name)
            .unwrap()
            .as_any()
            .downcast_ref::<TestResolver>()
            .unwrap()
            .tag
    }

    #[test]
    fn test_registry_creation() {
        let registry = ResolverRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registration_and_lookup() {
        let mut registry = ResolverRegistry::new();
        let previous = registry.register("test", Box::new(TestResolver::new(1))).unwrap();
        assert!(previous.is_none());
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("test"));
        assert_eq!(tag_of(&registry, "test"), 1);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = ResolverRegistry::new();
        registry.register("test", Box::new(TestResolver::new(1))).unwrap();
        let previous = registry.register("test", Box::new(TestResolver::new(2))).unwrap();

        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);
        assert_eq!(tag_of(&registry, "test"), 2);
    }

    #[test]
    fn test_unregister() {
        let mut registry = ResolverRegistry::new();
        registry.register("test", Box::new(TestResolver::new(1))).unwrap();

        assert!(registry.unregister("test").is_some());
        assert!(registry.unregister("test").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_incompatible_version_rejected() {
        let mut registry = ResolverRegistry::new();
        let mut resolver = TestResolver::new(1);
        resolver.api_version = "1.0.0";

        let result = registry.register("test", Box::new(resolver));
        assert!(result.is_err());
        assert!(result.err().unwrap().contains("incompatible"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_collider_registry_names_sorted() {
        let mut registry = ColliderRegistry::new();
        registry.register("rectangle", Box::new(NullCollider)).unwrap();
        registry.register("circle", Box::new(NullCollider)).unwrap();
        assert_eq!(registry.names(), vec!["circle", "rectangle"]);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_version_compatibility() {
        // For 0.x.y versions, minor versions must match (breaking changes)
        assert!(is_version_compatible("0.1.0", "0.1.0"));
        assert!(is_version_compatible("0.1.5", "0.1.10"));
        assert!(!is_version_compatible("0.1.0", "0.2.0"));
        assert!(!is_version_compatible("0.2.0", "0.1.0"));

        // For 1.x.y and higher, minor version <= is ok
        assert!(is_version_compatible("1.0.0", "1.2.0"));
        assert!(!is_version_compatible("1.2.0", "1.0.0"));

        // Major version must always match
        assert!(!is_version_compatible("1.0.0", "0.1.0"));
        assert!(!is_version_compatible("2.0.0", "1.0.0"));

        assert!(!is_version_compatible("invalid", "0.1.0"));
        assert!(!is_version_compatible("0.1.0", "invalid"));
    }
}
