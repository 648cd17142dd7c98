// ============================================================================
// vetcare Library
// ============================================================================
//
// A veterinary clinic client registry. The client is the aggregate root; the
// pets and the single optional address it owns are only reachable through
// it, and every nested mutation verifies ownership before touching anything.
// Storage uniqueness violations are classified into four user-facing
// conflict categories keyed by (constraint, attempted verb).

pub mod core;
pub mod facade;
pub mod model;
pub mod service;
pub mod storage;
pub mod web;

// Re-export main types for convenience
pub use crate::core::{AddressId, ClientId, PetId, StoreError, StoreResult, UniqueKey};
pub use crate::facade::Clinic;
pub use crate::model::{Address, AddressDraft, Client, ClientDraft, Pet, PetDraft};
pub use crate::service::conflict::{
    classify, classify_raw, ConflictKind, ConflictReport, WriteVerb,
};
pub use crate::service::{
    AddressService, ClientService, MutationOutcome, PetService, ServiceError, ServiceResult,
};
pub use crate::storage::{ClientStore, MemoryClientStore};
pub use crate::web::{build_router, AppState};
