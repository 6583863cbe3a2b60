use crate::{model::ModelDescriptor, traits::Record};
use std::{
    any::{TypeId, type_name},
    collections::HashMap,
    sync::Arc,
};

///
/// ModelRegistryBuilder
///
/// Startup-only, single-threaded registration phase. `freeze` consumes the
/// builder, so no registration can follow it and no query can precede it.
///

#[derive(Default)]
pub struct ModelRegistryBuilder {
    models: HashMap<TypeId, ModelDescriptor>,
    debug: bool,
}

impl ModelRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    /// Bind record type `R` to `relation`. Registering `R` again replaces the
    /// earlier descriptor.
    pub fn register<R: Record>(&mut self, relation: impl Into<String>) -> &mut Self {
        let descriptor = ModelDescriptor::for_record::<R>(relation);

        self.debug_log(format!(
            "registering model {} for relation '{}' ({} columns)",
            descriptor.type_name(),
            descriptor.relation(),
            descriptor.fields().len(),
        ));

        if self
            .models
            .insert(TypeId::of::<R>(), descriptor)
            .is_some()
        {
            self.debug_log(format!("model {} re-registered", type_name::<R>()));
        }

        self
    }

    /// Seal the registry. The result is immutable and shared by reference.
    #[must_use]
    pub fn freeze(self) -> Arc<ModelRegistry> {
        self.debug_log(format!("freezing registry with {} models", self.models.len()));

        Arc::new(ModelRegistry {
            models: self.models,
        })
    }
}

///
/// ModelRegistry
///
/// Frozen type -> ModelDescriptor table. Never mutated after construction,
/// so concurrent reads need no synchronization.
///

#[derive(Debug)]
pub struct ModelRegistry {
    models: HashMap<TypeId, ModelDescriptor>,
}

impl ModelRegistry {
    #[must_use]
    pub fn get<R: Record>(&self) -> Option<&ModelDescriptor> {
        self.models.get(&TypeId::of::<R>())
    }

    #[must_use]
    pub fn contains<R: Record>(&self) -> bool {
        self.models.contains_key(&TypeId::of::<R>())
    }

    /// Descriptor for `R`.
    ///
    /// Querying an unregistered model is a sequencing bug in the caller, not a
    /// data condition, so this panics instead of returning an error.
    #[must_use]
    pub fn expect<R: Record>(&self) -> &ModelDescriptor {
        self.get::<R>().unwrap_or_else(|| {
            panic!(
                "contract violation: model {} was not registered before freeze",
                type_name::<R>()
            )
        })
    }

    /// Descriptor registered for `relation`, if any.
    #[must_use]
    pub fn by_relation(&self, relation: &str) -> Option<&ModelDescriptor> {
        self.models.values().find(|d| d.relation() == relation)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.values()
    }
}

///
/// TESTS
///
