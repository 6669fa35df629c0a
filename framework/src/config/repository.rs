use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

/// Process-wide registry, populated once at startup
static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();

/// Typed configuration records keyed by their type
#[derive(Default)]
pub struct Registry {
    records: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, replacing any earlier record of the same type
    pub fn insert<T: Any + Send + Sync>(&mut self, record: T) {
        self.records.insert(TypeId::of::<T>(), Box::new(record));
    }

    /// Clone out the record of type `T`
    pub fn get<T: Any + Send + Sync + Clone>(&self) -> Option<T> {
        self.records
            .get(&TypeId::of::<T>())
            .and_then(|record| record.downcast_ref::<T>())
            .cloned()
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.records.contains_key(&TypeId::of::<T>())
    }
}

fn global() -> &'static RwLock<Registry> {
    REGISTRY.get_or_init(|| RwLock::new(Registry::new()))
}

pub fn register<T: Any + Send + Sync>(record: T) {
    if let Ok(mut registry) = global().write() {
        registry.insert(record);
    }
}

pub fn get<T: Any + Send + Sync + Clone>() -> Option<T> {
    REGISTRY.get()?.read().ok()?.get::<T>()
}

pub fn has<T: Any>() -> bool {
    REGISTRY
        .get()
        .and_then(|registry| registry.read().ok())
        .is_some_and(|registry| registry.contains::<T>())
}
