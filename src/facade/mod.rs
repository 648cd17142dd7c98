//! Thin coordination layer consumed by the transport: bundles the three
//! mutation services over one shared store capability and propagates their
//! discriminated results unchanged.

use std::sync::Arc;

use crate::core::{ClientId, PetId};
use crate::model::{AddressDraft, Client, ClientDraft, PetDraft};
use crate::service::{
    AddressService, ClientService, PetService, ServiceError, ServiceResult,
};
use crate::storage::ClientStore;

#[derive(Clone)]
pub struct Clinic {
    clients: ClientService,
    pets: PetService,
    addresses: AddressService,
}

impl Clinic {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self {
            clients: ClientService::new(Arc::clone(&store)),
            pets: PetService::new(Arc::clone(&store)),
            addresses: AddressService::new(store),
        }
    }

    // -----------------------------
    // Client operations
    // -----------------------------

    pub async fn list_clients(&self) -> Result<Vec<Client>, ServiceError> {
        self.clients.find_all().await
    }

    pub async fn get_client(&self, id: ClientId) -> Result<Option<Client>, ServiceError> {
        self.clients.find_by_id(id).await
    }

    pub async fn create_client(&self, draft: ClientDraft) -> Result<Client, ServiceError> {
        self.clients.create(draft).await
    }

    pub async fn update_client(&self, id: ClientId, draft: ClientDraft) -> ServiceResult {
        self.clients.update(id, draft).await
    }

    pub async fn delete_client(&self, id: ClientId) -> ServiceResult {
        self.clients.delete(id).await
    }

    // -----------------------------
    // Pet operations
    // -----------------------------

    pub async fn create_pet(&self, client_id: ClientId, draft: PetDraft) -> ServiceResult {
        self.pets.create(client_id, draft).await
    }

    pub async fn update_pet(
        &self,
        client_id: ClientId,
        pet_id: PetId,
        draft: PetDraft,
    ) -> ServiceResult {
        self.pets.update(client_id, pet_id, draft).await
    }

    pub async fn delete_pet(&self, client_id: ClientId, pet_id: PetId) -> ServiceResult {
        self.pets.delete(client_id, pet_id).await
    }

    // -----------------------------
    // Address operations
    // -----------------------------

    pub async fn create_address(&self, client_id: ClientId, draft: AddressDraft) -> ServiceResult {
        self.addresses.create(client_id, draft).await
    }

    pub async fn update_address(&self, client_id: ClientId, draft: AddressDraft) -> ServiceResult {
        self.addresses.update(client_id, draft).await
    }

    pub async fn delete_address(&self, client_id: ClientId) -> ServiceResult {
        self.addresses.delete(client_id).await
    }

    // -----------------------------
    // Read-side searches
    // -----------------------------

    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Client>, ServiceError> {
        self.clients.find_by_name_containing(fragment).await
    }

    pub async fn search_by_lastname(&self, fragment: &str) -> Result<Vec<Client>, ServiceError> {
        self.clients.find_by_lastname_containing(fragment).await
    }

    pub async fn search_by_pet_name(&self, fragment: &str) -> Result<Vec<Client>, ServiceError> {
        self.clients.find_with_pet_named(fragment).await
    }
}
