use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AddressId, ClientId, PetId, StoreError, StoreResult, UniqueKey};
use crate::model::Client;
use crate::storage::ClientStore;

/// In-process aggregate store.
///
/// All aggregates live in one map guarded by a single writer lock, so every
/// `save` validates and commits as one unit; uniqueness checks run against
/// committed state before anything is mutated.
pub struct MemoryClientStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    clients: BTreeMap<ClientId, Client>,
    next_client_id: ClientId,
    next_pet_id: PetId,
    next_address_id: AddressId,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                clients: BTreeMap::new(),
                next_client_id: 1,
                next_pet_id: 1,
                next_address_id: 1,
            }),
        }
    }
}

impl Default for MemoryClientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    /// Validates both uniqueness constraints against committed state.
    /// The detail strings mimic what a relational store reports: the verb
    /// that failed and the constraint name.
    fn check_constraints(&self, candidate: &Client) -> StoreResult<()> {
        let duplicate_name = self.clients.values().any(|other| {
            other.id != candidate.id
                && other.name == candidate.name
                && other.lastname == candidate.lastname
        });
        if duplicate_name {
            let verb = if candidate.id.is_none() {
                "insert into"
            } else {
                "update of"
            };
            return Err(StoreError::UniqueViolation {
                key: UniqueKey::ClientName,
                detail: format!(
                    "{verb} client: Duplicate entry '{} {}' for key '{}'",
                    candidate.name,
                    candidate.lastname,
                    UniqueKey::ClientName.constraint_name()
                ),
            });
        }

        // The (owner, pet name) pair is scoped to one client, so only
        // siblings inside this aggregate can collide.
        for (index, pet) in candidate.pets.iter().enumerate() {
            let collides = candidate.pets[..index]
                .iter()
                .any(|sibling| sibling.name == pet.name);
            if collides {
                let verb = if pet.id.is_none() {
                    "insert into"
                } else {
                    "update of"
                };
                return Err(StoreError::UniqueViolation {
                    key: UniqueKey::PetOwnerName,
                    detail: format!(
                        "{verb} pet: Duplicate entry '{}' for key '{}' of client '{} {}'",
                        pet.name,
                        UniqueKey::PetOwnerName.constraint_name(),
                        candidate.name,
                        candidate.lastname
                    ),
                });
            }
        }

        Ok(())
    }

    fn assign_ids(&mut self, client: &mut Client) -> ClientId {
        let id = match client.id {
            Some(id) => id,
            None => {
                let id = self.next_client_id;
                self.next_client_id += 1;
                client.id = Some(id);
                id
            }
        };

        for pet in &mut client.pets {
            if pet.id.is_none() {
                pet.id = Some(self.next_pet_id);
                self.next_pet_id += 1;
            }
        }

        if let Some(address) = &mut client.address {
            if address.id.is_none() {
                address.id = Some(self.next_address_id);
                self.next_address_id += 1;
            }
        }

        id
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn find_by_id(&self, id: ClientId) -> StoreResult<Option<Client>> {
        let inner = self.inner.read().await;
        Ok(inner.clients.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Client>> {
        let inner = self.inner.read().await;
        Ok(inner.clients.values().cloned().collect())
    }

    async fn save(&self, client: Client) -> StoreResult<Client> {
        let mut inner = self.inner.write().await;

        if let Some(id) = client.id {
            if !inner.clients.contains_key(&id) {
                return Err(StoreError::StaleAggregate(id));
            }
        }

        inner.check_constraints(&client)?;

        let mut stored = client;
        let id = inner.assign_ids(&mut stored);
        inner.clients.insert(id, stored.clone());

        Ok(stored)
    }

    async fn delete_by_id(&self, id: ClientId) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.clients.remove(&id);
        Ok(())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> StoreResult<Vec<Client>> {
        let inner = self.inner.read().await;
        Ok(inner
            .clients
            .values()
            .filter(|client| client.name.contains(fragment))
            .cloned()
            .collect())
    }

    async fn find_by_lastname_containing(&self, fragment: &str) -> StoreResult<Vec<Client>> {
        let inner = self.inner.read().await;
        Ok(inner
            .clients
            .values()
            .filter(|client| client.lastname.contains(fragment))
            .cloned()
            .collect())
    }

    async fn find_with_pet_named(&self, fragment: &str) -> StoreResult<Vec<Client>> {
        let inner = self.inner.read().await;
        Ok(inner
            .clients
            .values()
            .filter(|client| client.pets.iter().any(|pet| pet.name.contains(fragment)))
            .cloned()
            .collect())
    }
}
