//! Collaborators the editor consumes: entity persistence and reference lists.

mod memory;

pub use memory::InMemoryCatalog;

use crate::core::{Category, Editable, FaultResult, Product, Supplier};
use async_trait::async_trait;

/// Persistence operations for one entity type.
///
/// Mutations receive the bound entity mutably so that a service can write
/// store-assigned state back onto it, the way a tracked ORM entity would.
#[async_trait]
pub trait EntityStore<T: Editable>: Send + Sync {
    async fn get_by_id(&self, key: T::Key) -> FaultResult<Option<T>>;

    /// Inserts a new record and returns its key.
    async fn add(&self, entity: &mut T) -> FaultResult<T::Key>;

    /// Returns the number of affected records.
    async fn update(&self, entity: &mut T) -> FaultResult<u64>;

    /// Marks the record inactive without removing it.
    async fn logical_delete(&self, entity: &mut T) -> FaultResult<u64>;

    /// Reverses a logical delete.
    async fn activate(&self, entity: &mut T) -> FaultResult<u64>;
}

/// Product persistence, as consumed by the product editor page.
pub trait ProductServices: EntityStore<Product> {}

impl<S: EntityStore<Product> + ?Sized> ProductServices for S {}

#[async_trait]
pub trait CategoryServices: Send + Sync {
    async fn list_categories(&self) -> FaultResult<Vec<Category>>;
}

#[async_trait]
pub trait SupplierServices: Send + Sync {
    async fn list_suppliers(&self) -> FaultResult<Vec<Supplier>>;
}
