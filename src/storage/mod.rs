pub mod memory;

pub use memory::MemoryClientStore;

use async_trait::async_trait;

use crate::core::{ClientId, StoreResult};
use crate::model::Client;

/// Capability boundary to the durable store holding client aggregates.
///
/// The mutation services depend on this trait, never on a concrete store,
/// so tests can substitute their own implementation.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Looks up one aggregate by id.
    async fn find_by_id(&self, id: ClientId) -> StoreResult<Option<Client>>;

    /// Every stored aggregate, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Client>>;

    /// Inserts when `client.id` is `None`, updates otherwise. Owned pets
    /// and addresses still lacking an id are assigned one. Both uniqueness
    /// constraints are validated before anything is committed.
    async fn save(&self, client: Client) -> StoreResult<Client>;

    /// Removes an aggregate together with its owned pets and address.
    /// Removing an absent id is a no-op.
    async fn delete_by_id(&self, id: ClientId) -> StoreResult<()>;

    /// Clients whose first name contains the fragment.
    async fn find_by_name_containing(&self, fragment: &str) -> StoreResult<Vec<Client>>;

    /// Clients whose last name contains the fragment.
    async fn find_by_lastname_containing(&self, fragment: &str) -> StoreResult<Vec<Client>>;

    /// Clients owning at least one pet whose name contains the fragment.
    async fn find_with_pet_named(&self, fragment: &str) -> StoreResult<Vec<Client>>;
}
