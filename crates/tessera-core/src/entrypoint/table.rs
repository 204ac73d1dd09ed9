use std::collections::HashMap;
use std::sync::Arc;

use crate::entrypoint::error::EntrypointError;

/// Builds a fresh instance of an entrypoint type
pub type Factory<T> = Arc<dyn Fn() -> Arc<T> + Send + Sync>;

struct TypeEntry<T: ?Sized> {
    factory: Option<Factory<T>>,
    fields: HashMap<String, Arc<T>>,
    methods: HashMap<String, Vec<Arc<T>>>,
}

impl<T: ?Sized> TypeEntry<T> {
    fn new() -> Self {
        Self {
            factory: None,
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }
}

/// Lookup table from declared entrypoint names to capabilities.
///
/// `T` is the capability a plugin exposes, usually a trait object such as
/// `dyn Fn() + Send + Sync` or `dyn ModInitializer`. Plugins register what
/// they provide up front; the loader resolves each declared handle once
/// while loading and keeps the returned `Arc<T>`.
///
/// Handles take two forms:
/// - `Type` constructs a new instance through the registered factory;
/// - `Type::member` returns a registered field value, or the single method
///   registered under that name.
pub struct EntrypointTable<T: ?Sized> {
    types: HashMap<String, TypeEntry<T>>,
}

impl<T: ?Sized> Default for EntrypointTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> EntrypointTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self { types: HashMap::new() }
    }

    fn entry(&mut self, type_name: &str) -> &mut TypeEntry<T> {
        self.types.entry(type_name.to_string()).or_insert_with(TypeEntry::new)
    }

    /// Register a constructor for `type_name`
    pub fn register_type<F>(&mut self, type_name: &str, factory: F) -> Result<(), EntrypointError>
    where
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        let entry = self.entry(type_name);
        if entry.factory.is_some() {
            return Err(EntrypointError::DuplicateRegistration(type_name.to_string()));
        }
        entry.factory = Some(Arc::new(factory));
        Ok(())
    }

    /// Register a static value under `type_name::field`
    pub fn register_field(&mut self, type_name: &str, field: &str, value: Arc<T>) -> Result<(), EntrypointError> {
        let entry = self.entry(type_name);
        if entry.fields.contains_key(field) {
            return Err(EntrypointError::DuplicateRegistration(format!("{}::{}", type_name, field)));
        }
        entry.fields.insert(field.to_string(), value);
        Ok(())
    }

    /// Register a callable under `type_name::method`.
    ///
    /// Several callables may share a name, as overloads do; such a name
    /// cannot be resolved afterwards.
    pub fn register_method(&mut self, type_name: &str, method: &str, callable: Arc<T>) {
        self.entry(type_name)
            .methods
            .entry(method.to_string())
            .or_default()
            .push(callable);
    }

    /// Resolve a `Type` or `Type::member` handle
    pub fn resolve(&self, handle: &str) -> Result<Arc<T>, EntrypointError> {
        let parts: Vec<&str> = handle.split("::").collect();
        if parts.len() >= 3 {
            return Err(EntrypointError::InvalidHandle(handle.to_string()));
        }

        let type_name = parts[0];
        let entry = self
            .types
            .get(type_name)
            .ok_or_else(|| EntrypointError::TypeNotFound(type_name.to_string()))?;

        let member = match parts.get(1) {
            Some(member) => *member,
            None => {
                let factory = entry
                    .factory
                    .as_ref()
                    .ok_or_else(|| EntrypointError::NotConstructible(type_name.to_string()))?;
                log::debug!("Constructing entrypoint {}", handle);
                return Ok(factory());
            }
        };

        let methods = entry.methods.get(member).map(Vec::as_slice).unwrap_or_default();
        if let Some(value) = entry.fields.get(member) {
            if !methods.is_empty() {
                return Err(EntrypointError::Ambiguous(handle.to_string()));
            }
            log::debug!("Resolved entrypoint {} to a field", handle);
            return Ok(Arc::clone(value));
        }

        match methods {
            [] => Err(EntrypointError::MemberNotFound(handle.to_string())),
            [method] => {
                log::debug!("Resolved entrypoint {} to a method", handle);
                Ok(Arc::clone(method))
            }
            _ => Err(EntrypointError::MultipleMethods(handle.to_string())),
        }
    }

    /// Resolve every handle, stopping at the first failure
    pub fn resolve_all<'a, I>(&self, handles: I) -> Result<Vec<Arc<T>>, EntrypointError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        handles.into_iter().map(|handle| self.resolve(handle)).collect()
    }

    /// Check if a type name is registered
    pub fn contains_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Get the number of registered types
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Get all registered type names
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(|s| s.as_str()).collect()
    }
}
