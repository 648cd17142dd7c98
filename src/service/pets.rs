use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{ClientId, PetId};
use crate::model::{Pet, PetDraft};
use crate::service::conflict::WriteVerb;
use crate::service::{MutationOutcome, ServiceError, ServiceResult};
use crate::storage::ClientStore;

/// Mutations for the pets owned by a client.
///
/// Every operation resolves the client first; update and delete then locate
/// the pet inside that client's own collection, so a pet id that exists
/// under a different owner behaves exactly like an unknown id.
#[derive(Clone)]
pub struct PetService {
    store: Arc<dyn ClientStore>,
}

impl PetService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Appends a new pet to the client's collection; the store assigns the
    /// pet id on save.
    pub async fn create(&self, client_id: ClientId, draft: PetDraft) -> ServiceResult {
        let found = self
            .store
            .find_by_id(client_id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(mut client) = found else {
            debug!(client = client_id, "pet create: owner not found");
            return Ok(MutationOutcome::NotFound);
        };

        client.pets.push(Pet::from_draft(draft));

        let saved = self
            .store
            .save(client)
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Insert, err))?;

        info!(client = client_id, "pet created");
        Ok(MutationOutcome::Applied(saved))
    }

    /// Overwrites all scalar fields of a pet the client actually owns.
    pub async fn update(&self, client_id: ClientId, pet_id: PetId, draft: PetDraft) -> ServiceResult {
        let found = self
            .store
            .find_by_id(client_id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(mut client) = found else {
            debug!(client = client_id, "pet update: owner not found");
            return Ok(MutationOutcome::NotFound);
        };

        let Some(pet) = client.pet_mut(pet_id) else {
            debug!(client = client_id, pet = pet_id, "pet update: not owned by client");
            return Ok(MutationOutcome::NotFound);
        };
        pet.apply(&draft);

        let saved = self
            .store
            .save(client)
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Update, err))?;

        Ok(MutationOutcome::Applied(saved))
    }

    /// Removes a pet the client actually owns.
    pub async fn delete(&self, client_id: ClientId, pet_id: PetId) -> ServiceResult {
        let found = self
            .store
            .find_by_id(client_id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(mut client) = found else {
            debug!(client = client_id, "pet delete: owner not found");
            return Ok(MutationOutcome::NotFound);
        };

        let Some(index) = client.pets.iter().position(|pet| pet.id == Some(pet_id)) else {
            debug!(client = client_id, pet = pet_id, "pet delete: not owned by client");
            return Ok(MutationOutcome::NotFound);
        };
        client.pets.remove(index);

        let saved = self
            .store
            .save(client)
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Update, err))?;

        info!(client = client_id, pet = pet_id, "pet deleted");
        Ok(MutationOutcome::Applied(saved))
    }
}
