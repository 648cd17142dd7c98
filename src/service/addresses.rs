use std::sync::Arc;

use tracing::{debug, info};

use crate::core::ClientId;
use crate::model::{Address, AddressDraft};
use crate::service::conflict::WriteVerb;
use crate::service::{MutationOutcome, ServiceError, ServiceResult};
use crate::storage::ClientStore;

/// Mutations for the single optional address of a client.
///
/// An address carries no caller-visible id of its own; every operation is
/// addressed through the owning client.
#[derive(Clone)]
pub struct AddressService {
    store: Arc<dyn ClientStore>,
}

impl AddressService {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }

    /// Sets the client's address wholesale, replacing any existing one.
    /// Always succeeds once the client exists.
    pub async fn create(&self, client_id: ClientId, draft: AddressDraft) -> ServiceResult {
        let found = self
            .store
            .find_by_id(client_id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(mut client) = found else {
            debug!(client = client_id, "address create: owner not found");
            return Ok(MutationOutcome::NotFound);
        };

        client.address = Some(Address::from_draft(draft));

        let saved = self
            .store
            .save(client)
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Insert, err))?;

        info!(client = client_id, "address saved");
        Ok(MutationOutcome::Applied(saved))
    }

    /// Overwrites every field of the existing address. NotFound when the
    /// client is absent or has no address to overwrite.
    pub async fn update(&self, client_id: ClientId, draft: AddressDraft) -> ServiceResult {
        let found = self
            .store
            .find_by_id(client_id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(mut client) = found else {
            debug!(client = client_id, "address update: owner not found");
            return Ok(MutationOutcome::NotFound);
        };

        let Some(address) = client.address.as_mut() else {
            debug!(client = client_id, "address update: nothing to overwrite");
            return Ok(MutationOutcome::NotFound);
        };
        address.apply(&draft);

        let saved = self
            .store
            .save(client)
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Update, err))?;

        Ok(MutationOutcome::Applied(saved))
    }

    /// Clears the address. NotFound when the client is absent or has no
    /// address to delete, mirroring `update`.
    pub async fn delete(&self, client_id: ClientId) -> ServiceResult {
        let found = self
            .store
            .find_by_id(client_id)
            .await
            .map_err(ServiceError::Storage)?;
        let Some(mut client) = found else {
            debug!(client = client_id, "address delete: owner not found");
            return Ok(MutationOutcome::NotFound);
        };

        if client.address.is_none() {
            debug!(client = client_id, "address delete: nothing to delete");
            return Ok(MutationOutcome::NotFound);
        }
        client.address = None;

        let saved = self
            .store
            .save(client)
            .await
            .map_err(|err| ServiceError::from_save(WriteVerb::Update, err))?;

        info!(client = client_id, "address deleted");
        Ok(MutationOutcome::Applied(saved))
    }
}
