use std::sync::Arc;

use tracing::{debug, info};

use crate::core::ClientId;
use crate::model::{Client, ClientDraft};
use crate::service::conflict::WriteVerb;
use crate::service::{MutationOutcome, ServiceError, ServiceResult};
use crate::storage::ClientStore;

/// Mutations and queries for the client aggregate itself.
#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn ClientStore>,
}

impl ClientService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<Client>, ServiceError> {
        self.store.find_all().await.map_err(ServiceError::Storage)
    }

    pub async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, ServiceError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(ServiceError::Storage)
    }

    /// Saves a brand-new aggregate; the store assigns the identifier.
    pub async fn create(&self, draft: ClientDraft) -> Result<Client, ServiceError> {
        let saved = self
            .store
            .save(Client::from_draft(draft))
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Insert, err))?;

        info!(client = ?saved.id, "client created");
        Ok(saved)
    }

    /// Overwrites the scalar fields of an existing client. Pets and address
    /// are not part of a client-level update.
    pub async fn update(&self, id: ClientId, draft: ClientDraft) -> ServiceResult {
        let found = self
            .store
            .find_by_id(id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(mut client) = found else {
            debug!(client = id, "update target not found");
            return Ok(MutationOutcome::NotFound);
        };

        client.apply(&draft);

        let saved = self
            .store
            .save(client)
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Update, err))?;

        Ok(MutationOutcome::Applied(saved))
    }

    /// Removes the aggregate together with its pets and address, returning
    /// the state it had before removal.
    pub async fn delete(&self, id: ClientId) -> ServiceResult {
        let found = self
            .store
            .find_by_id(id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(client) = found else {
            debug!(client = id, "delete target not found");
            return Ok(MutationOutcome::NotFound);
        };

        self.store
            .delete_by_id(id)
            .await
            .map_err(ServiceError::Storage)?;

        info!(client = id, "client deleted");
        Ok(MutationOutcome::Applied(client))
    }

    pub async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Client>, ServiceError> {
        self.store
            .find_by_name_containing(fragment)
            .await
            .map_err(ServiceError::Storage)
    }

    pub async fn find_by_lastname_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Client>, ServiceError> {
        self.store
            .find_by_lastname_containing(fragment)
            .await
            .map_err(ServiceError::Storage)
    }

    pub async fn find_with_pet_named(&self, fragment: &str) -> Result<Vec<Client>, ServiceError> {
        self.store
            .find_with_pet_named(fragment)
            .await
            .map_err(ServiceError::Storage)
    }
}
