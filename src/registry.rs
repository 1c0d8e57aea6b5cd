// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Type Registry
//!
//! Explicit map from type name to resource type. The catalog compiler
//! looks a type up by name, hands it a raw declaration and gets back an
//! immutable [`CatalogEntry`]; the convergence engine later hands the
//! entry back together with a provider readback and receives the change
//! to apply, serialized as JSON.
//!
//! ```text
//! Declaration ──build──▶ CatalogEntry ──diff(observed)──▶ change (JSON)
//! ```

use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{
    Declaration, Ensure, ResourceDescriptor, ResourceType, ValidationResult, VarpResourceType,
};
use crate::errors::{ResourceError, ResourceResult};

/// Catalog-wide identity of a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    pub type_name: &'static str,
    pub name: String,
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.type_name, self.name)
    }
}

/// Immutable, type-erased descriptor held by the catalog
///
/// Cloning shares the descriptor; entries are `Send + Sync` and can be
/// diffed from any thread.
#[derive(Clone)]
pub struct CatalogEntry {
    key: ResourceKey,
    ensure: Ensure,
    canonical: Value,
    descriptor: Arc<dyn Any + Send + Sync>,
}

impl CatalogEntry {
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    pub fn ensure(&self) -> Ensure {
        self.ensure
    }

    /// Canonical serialized form, suitable for reports
    pub fn to_json(&self) -> &Value {
        &self.canonical
    }

    /// Borrow the typed descriptor
    pub fn descriptor<D: 'static>(&self) -> Option<&D> {
        self.descriptor.downcast_ref::<D>()
    }
}

impl PartialEq for CatalogEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.ensure == other.ensure && self.canonical == other.canonical
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("key", &self.key)
            .field("ensure", &self.ensure)
            .field("canonical", &self.canonical)
            .finish()
    }
}

/// Object-safe face of [`ResourceType`]
trait ErasedResourceType: Send + Sync {
    fn validate(&self, declaration: &Declaration) -> ValidationResult;

    fn build(&self, declaration: &Declaration) -> ResourceResult<CatalogEntry>;

    fn diff(&self, entry: &CatalogEntry, observed: &Value) -> ResourceResult<Value>;
}

impl<T: ResourceType> ErasedResourceType for T {
    fn validate(&self, declaration: &Declaration) -> ValidationResult {
        ResourceType::validate(self, declaration)
    }

    fn build(&self, declaration: &Declaration) -> ResourceResult<CatalogEntry> {
        let descriptor = self.canonicalize(declaration)?;

        Ok(CatalogEntry {
            key: ResourceKey {
                type_name: self.type_name(),
                name: descriptor.name().to_string(),
            },
            ensure: descriptor.ensure(),
            canonical: serde_json::to_value(&descriptor)?,
            descriptor: Arc::new(descriptor),
        })
    }

    fn diff(&self, entry: &CatalogEntry, observed: &Value) -> ResourceResult<Value> {
        let desired = entry
            .descriptor::<T::Descriptor>()
            .ok_or(ResourceError::TypeMismatch(self.type_name()))?;
        let observed: T::Observed = serde_json::from_value(observed.clone())?;
        let change = ResourceType::diff(self, desired, &observed)?;
        Ok(serde_json::to_value(change)?)
    }
}

/// Explicit registry of resource types
#[derive(Default)]
pub struct ResourceTypeRegistry {
    types: BTreeMap<&'static str, Box<dyn ErasedResourceType>>,
}

impl ResourceTypeRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every resource type this crate ships
    pub fn with_builtin_types() -> Self {
        let mut registry = Self::new();
        if let Err(err) = registry.register(VarpResourceType) {
            warn!("Skipped builtin resource type: {}", err);
        }
        registry
    }

    /// Register a resource type under its type name
    pub fn register<T: ResourceType>(&mut self, resource_type: T) -> ResourceResult<()> {
        let type_name = resource_type.type_name();
        if self.types.contains_key(type_name) {
            return Err(ResourceError::DuplicateType(type_name));
        }

        self.types.insert(type_name, Box::new(resource_type));
        info!("Registered resource type: {}", type_name);
        Ok(())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&'static str> {
        self.types.keys().copied().collect()
    }

    /// Type-check a declaration without building an entry
    pub fn validate(&self, type_name: &str, declaration: &Declaration) -> ResourceResult<()> {
        Ok(self.lookup(type_name)?.validate(declaration)?)
    }

    /// Validate and canonicalize a declaration into a catalog entry
    pub fn build(&self, type_name: &str, declaration: &Declaration) -> ResourceResult<CatalogEntry> {
        let entry = self.lookup(type_name)?.build(declaration).map_err(|err| {
            if let ResourceError::Validation(validation) = &err {
                warn!(
                    resource_type = type_name,
                    field = validation.field(),
                    kind = %validation.kind(),
                    "Rejected declaration: {}",
                    validation
                );
            }
            err
        })?;

        debug!("Built catalog entry {}", entry.key());
        Ok(entry)
    }

    /// Compute the change that converges `observed` onto `entry`
    pub fn diff(&self, entry: &CatalogEntry, observed: &Value) -> ResourceResult<Value> {
        self.lookup(entry.key().type_name)?.diff(entry, observed)
    }

    fn lookup(&self, type_name: &str) -> ResourceResult<&dyn ErasedResourceType> {
        self.types
            .get(type_name)
            .map(|t| &**t)
            .ok_or_else(|| ResourceError::UnknownType(type_name.to_string()))
    }
}

impl fmt::Debug for ResourceTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceTypeRegistry")
            .field("types", &self.type_names())
            .finish()
    }
}
