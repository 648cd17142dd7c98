pub mod conflict;

pub mod addresses;
pub mod clients;
pub mod pets;

pub use addresses::AddressService;
pub use clients::ClientService;
pub use pets::PetService;

use thiserror::Error;
use tracing::info;

use crate::core::StoreError;
use crate::model::Client;
use conflict::{ConflictReport, WriteVerb};

/// Discriminated result of a mutation: either the updated aggregate or an
/// explicit absent outcome. Absence is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The aggregate was found and the mutation committed.
    Applied(Client),
    /// The client, or a nested entity claimed through it, is not reachable.
    NotFound,
}

impl MutationOutcome {
    /// The mutated aggregate, if the operation applied.
    pub fn applied(self) -> Option<Client> {
        match self {
            Self::Applied(client) => Some(client),
            Self::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Failures a mutation can surface besides absence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// A uniqueness constraint fired; classified, never retried.
    #[error("conflict: {}", .0.message)]
    Conflict(ConflictReport),
    /// Any other store failure; reported as-is, retries are the caller's
    /// decision.
    #[error(transparent)]
    Storage(StoreError),
}

impl ServiceError {
    /// Wraps a failed save, classifying uniqueness violations by the write
    /// verb that was being attempted.
    pub(crate) fn from_save(verb: WriteVerb, err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { key, detail } => {
                let report = conflict::classify(key, verb, detail);
                info!(kind = ?report.kind, "uniqueness conflict");
                Self::Conflict(report)
            }
            other => Self::Storage(other),
        }
    }
}

pub type ServiceResult = Result<MutationOutcome, ServiceError>;
