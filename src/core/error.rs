use std::fmt;

use thiserror::Error;

use crate::core::types::ClientId;

/// Which storage-level uniqueness constraint a write violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKey {
    /// The (name, lastname) pair on the client table.
    ClientName,
    /// The (owning client, pet name) pair on the pet table.
    PetOwnerName,
}

impl UniqueKey {
    /// Constraint name as the store reports it in raw failure text.
    pub const fn constraint_name(self) -> &'static str {
        match self {
            Self::ClientName => "UK_client",
            Self::PetOwnerName => "UK_client_pet",
        }
    }
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constraint_name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness constraint fired. `key` identifies the constraint;
    /// `detail` preserves the raw failure text for diagnostics.
    #[error("unique constraint violation: {key}: {detail}")]
    UniqueViolation { key: UniqueKey, detail: String },

    /// Save was asked to update an aggregate that is no longer stored.
    #[error("client {0} is no longer in the store")]
    StaleAggregate(ClientId),

    #[error("storage fault: {0}")]
    Fault(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
