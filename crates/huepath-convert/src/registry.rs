//! Conversion path and chromatic adaptation registries.
//!
//! Both registries are plain maps. Lookup is exact: the path registry
//! answers `(from, to)` with the single edge registered for that pair and
//! never searches for multi-hop routes.
//!
//! # Process-wide instances
//!
//! [`init`] registers the built-in paths and methods once. [`paths`] and
//! [`adaptations`] expose the global registries behind `RwLock`s; the
//! `add_*`/`remove_*` functions mutate them.
//!
//! ```rust
//! use huepath_convert::{init, paths};
//! use huepath_core::ColorType;
//!
//! init();
//! let registry = paths().read().unwrap();
//! assert!(registry.get(ColorType::Rgb, ColorType::Lab).is_some());
//! ```

use crate::ConversionPath;
use huepath_core::ColorType;
use huepath_math::{BRADFORD, ChromaticAdaptationMethod, VON_KRIES, XYZ_SCALING};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::debug;

/// Catalog of `(from, to)` conversion paths.
#[derive(Debug, Clone, Default)]
pub struct ConversionPathRegistry {
    paths: HashMap<(ColorType, ColorType), ConversionPath>,
}

impl ConversionPathRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the XYZ-pivot path for every ordered pair
    /// of color types, including same-type pairs.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for from in ColorType::ALL {
            for to in ColorType::ALL {
                registry.add(ConversionPath::via_xyz(from, to));
            }
        }
        debug!("registered {} default conversion paths", registry.len());
        registry
    }

    /// Registers a path.
    ///
    /// Returns `false` and leaves the registry untouched when an equal path
    /// is already present. A different path for the same `(from, to)` pair
    /// replaces the old one.
    pub fn add(&mut self, path: ConversionPath) -> bool {
        if self.paths.get(&path.key()) == Some(&path) {
            return false;
        }
        debug!("conversion path added: {}", path);
        self.paths.insert(path.key(), path);
        true
    }

    /// Removes a path equal to `path`. Returns whether one was present.
    pub fn remove(&mut self, path: &ConversionPath) -> bool {
        if self.paths.get(&path.key()) != Some(path) {
            return false;
        }
        debug!("conversion path removed: {} -> {}", path.from(), path.to());
        self.paths.remove(&path.key()).is_some()
    }

    /// The path registered for exactly `(from, to)`.
    pub fn get(&self, from: ColorType, to: ColorType) -> Option<&ConversionPath> {
        self.paths.get(&(from, to))
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when no path is registered.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the registered paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ConversionPath> {
        self.paths.values()
    }
}

/// Named chromatic adaptation methods.
#[derive(Debug, Clone, Default)]
pub struct AdaptationRegistry {
    methods: HashMap<String, ChromaticAdaptationMethod>,
}

impl AdaptationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with Bradford, Von Kries and XYZ scaling.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for method in [BRADFORD, VON_KRIES, XYZ_SCALING] {
            registry.add(method);
        }
        registry
    }

    /// Registers a method under its name. Same semantics as
    /// [`ConversionPathRegistry::add`].
    pub fn add(&mut self, method: ChromaticAdaptationMethod) -> bool {
        if self.methods.get(method.name()) == Some(&method) {
            return false;
        }
        debug!("chromatic adaptation method added: {}", method.name());
        self.methods.insert(method.name().to_string(), method);
        true
    }

    /// Removes the method called `name`. Returns whether one was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.methods.remove(name).is_some();
        if removed {
            debug!("chromatic adaptation method removed: {}", name);
        }
        removed
    }

    /// The method called `name`.
    pub fn get(&self, name: &str) -> Option<&ChromaticAdaptationMethod> {
        self.methods.get(name)
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// True when no method is registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over the registered methods in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &ChromaticAdaptationMethod> {
        self.methods.values()
    }
}

static PATHS: OnceLock<RwLock<ConversionPathRegistry>> = OnceLock::new();
static ADAPTATIONS: OnceLock<RwLock<AdaptationRegistry>> = OnceLock::new();

/// Registers the built-in conversion paths and adaptation methods.
///
/// Runs once; later calls are no-ops. Accessing [`paths`] or
/// [`adaptations`] also triggers registration.
pub fn init() {
    let paths = read_lock(paths()).len();
    let methods = read_lock(adaptations()).len();
    debug!("registries ready: {} paths, {} adaptation methods", paths, methods);
}

/// The process-wide conversion path registry.
pub fn paths() -> &'static RwLock<ConversionPathRegistry> {
    PATHS.get_or_init(|| RwLock::new(ConversionPathRegistry::with_defaults()))
}

/// The process-wide chromatic adaptation registry.
pub fn adaptations() -> &'static RwLock<AdaptationRegistry> {
    ADAPTATIONS.get_or_init(|| RwLock::new(AdaptationRegistry::with_defaults()))
}

/// Adds a path to the global registry.
pub fn add_conversion_path(path: ConversionPath) -> bool {
    write_lock(paths()).add(path)
}

/// Removes a path from the global registry.
pub fn remove_conversion_path(path: &ConversionPath) -> bool {
    write_lock(paths()).remove(path)
}

/// Adds an adaptation method to the global registry.
pub fn add_chromatic_adaptation(method: ChromaticAdaptationMethod) -> bool {
    write_lock(adaptations()).add(method)
}

/// Removes an adaptation method from the global registry.
pub fn remove_chromatic_adaptation(name: &str) -> bool {
    write_lock(adaptations()).remove(name)
}

// Poisoned locks are recovered: registries hold plain data.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionStep;

    #[test]
    fn test_defaults_cover_every_pair() {
        let registry = ConversionPathRegistry::with_defaults();
        assert_eq!(registry.len(), ColorType::ALL.len() * ColorType::ALL.len());
        for from in ColorType::ALL {
            for to in ColorType::ALL {
                let path = registry.get(from, to).unwrap();
                assert_eq!(path.key(), (from, to));
                assert_eq!(
                    path.steps().iter().filter(|s| **s == ConversionStep::Adapt).count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut registry = ConversionPathRegistry::with_defaults();
        let before = registry.len();
        assert!(!registry.add(ConversionPath::via_xyz(ColorType::Lab, ColorType::Rgb)));
        assert_eq!(registry.len(), before);
    }

    #[test]
    fn test_add_replaces_different_path() {
        let mut registry = ConversionPathRegistry::with_defaults();
        let custom = ConversionPath::new(ColorType::Lab, ColorType::Xyz, vec![ConversionStep::LabToXyz]);
        assert!(registry.add(custom.clone()));
        assert_eq!(registry.get(ColorType::Lab, ColorType::Xyz), Some(&custom));
        assert_eq!(registry.len(), 256);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut registry = ConversionPathRegistry::new();
        let path = ConversionPath::via_xyz(ColorType::Luv, ColorType::Lab);
        assert!(!registry.remove(&path));
        assert!(registry.add(path.clone()));
        assert!(registry.remove(&path));
        assert!(!registry.remove(&path));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_requires_equal_path() {
        let mut registry = ConversionPathRegistry::with_defaults();
        let other = ConversionPath::new(ColorType::Lab, ColorType::Xyz, vec![]);
        assert!(!registry.remove(&other));
        assert!(registry.get(ColorType::Lab, ColorType::Xyz).is_some());
    }

    #[test]
    fn test_adaptation_registry() {
        let mut registry = AdaptationRegistry::with_defaults();
        assert_eq!(registry.names(), vec!["Bradford", "VonKries", "XyzScaling"]);
        assert!(!registry.add(BRADFORD));
        assert!(registry.remove("VonKries"));
        assert!(!registry.remove("VonKries"));
        assert!(registry.get("VonKries").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_equal_whites_give_identity_for_every_method() {
        let registry = AdaptationRegistry::with_defaults();
        for white in [
            huepath_core::Whitepoint::D50,
            huepath_core::Whitepoint::D65,
            huepath_core::Whitepoint::A,
        ] {
            for method in registry.iter() {
                let m = method.calculate_matrix(white.xyz(), white.xyz());
                assert!(m.is_identity(1e-12), "{} under {:?}", method.name(), white);
            }
        }
    }
}
