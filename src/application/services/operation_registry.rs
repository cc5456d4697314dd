use std::collections::HashSet;

use crate::application::ports::TextOperation;

/// A registry entry: a stable name and a constructor for a fresh operation.
#[derive(Clone, Copy)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub factory: fn() -> Box<dyn TextOperation>,
}

impl OperationDescriptor {
    pub const fn new(name: &'static str, factory: fn() -> Box<dyn TextOperation>) -> Self {
        Self { name, factory }
    }
}

impl std::fmt::Debug for OperationDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("operation registered twice: {0}")]
    DuplicateOperation(&'static str),
}

/// Resolves operation names to freshly constructed operations.
#[derive(Debug)]
pub struct OperationRegistry {
    descriptors: Vec<OperationDescriptor>,
}

impl OperationRegistry {
    pub fn new(descriptors: Vec<OperationDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            if !seen.insert(descriptor.name) {
                return Err(RegistryError::DuplicateOperation(descriptor.name));
            }
        }

        Ok(Self { descriptors })
    }

    /// Names in registration order.
    pub fn list_operations(&self) -> Vec<&'static str> {
        self.descriptors.iter().map(|d| d.name).collect()
    }

    pub fn resolve(&self, name: &str) -> Result<Box<dyn TextOperation>, RegistryError> {
        let descriptor = self
            .descriptors
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| RegistryError::UnknownOperation(name.to_string()))?;

        tracing::debug!(operation = descriptor.name, "Resolved text operation");
        Ok((descriptor.factory)())
    }
}
