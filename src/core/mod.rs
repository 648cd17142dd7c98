pub mod error;
pub mod types;

pub use error::{StoreError, StoreResult, UniqueKey};
pub use types::{AddressId, ClientId, PetId};
