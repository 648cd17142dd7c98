/// Store-assigned identifier of a client aggregate.
pub type ClientId = i64;

/// Store-assigned identifier of a pet. Globally unique, but an id alone
/// never proves ownership; mutations must locate the pet inside the owning
/// client's collection.
pub type PetId = i64;

/// Store-assigned identifier of an address.
pub type AddressId = i64;
