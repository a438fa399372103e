//! Layer definition entity
//!
//! A layer definition is a named, reusable provisioning unit together with the
//! names of the layers it is built on top of.

/// A named layer and the layers it depends on, in declaration order.
///
/// Dependencies are plain names. They may reference layers that are not (yet)
/// part of the definition set; resolution reports those as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerDefinition {
    pub name: String,
    pub dependencies: Vec<String>,
}

impl LayerDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this layer declares a direct dependency on `name`.
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d == name)
    }
}
