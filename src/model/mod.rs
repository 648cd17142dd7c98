use serde::{Deserialize, Serialize};

use crate::core::{AddressId, ClientId, PetId};

/// Aggregate root: a clinic client together with the pets and the address
/// they own. Pets and the address have no existence of their own and are
/// reachable only through their client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Assigned by the store on first save; `None` marks an unsaved client.
    pub id: Option<ClientId>,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phonenumber: u64,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: Option<PetId>,
    pub name: String,
    pub specie: String,
    pub breed: Option<String>,
    pub age: i64,
    pub reason_for_visit: String,
}

/// A client's single optional address. Always written wholesale; there are
/// no partial-field semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: Option<AddressId>,
    pub street: String,
    pub state: String,
    pub city: String,
    pub cp: i64,
}

/// Scalar fields of a client, as received from a caller. Identifiers are
/// never part of a draft; the store assigns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub phonenumber: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetDraft {
    pub name: String,
    pub specie: String,
    pub breed: Option<String>,
    pub age: i64,
    pub reason_for_visit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressDraft {
    pub street: String,
    pub state: String,
    pub city: String,
    pub cp: i64,
}

impl Client {
    pub fn from_draft(draft: ClientDraft) -> Self {
        Self {
            id: None,
            name: draft.name,
            lastname: draft.lastname,
            email: draft.email,
            phonenumber: draft.phonenumber,
            pets: Vec::new(),
            address: None,
        }
    }

    /// Overwrites every scalar field from the draft. Pets and address are
    /// untouched by a client-level update.
    pub fn apply(&mut self, draft: &ClientDraft) {
        self.name = draft.name.clone();
        self.lastname = draft.lastname.clone();
        self.email = draft.email.clone();
        self.phonenumber = draft.phonenumber;
    }

    /// First pet in the collection with the given id. `None` means the
    /// client does not own such a pet, even if the id exists elsewhere.
    pub fn pet(&self, pet_id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == Some(pet_id))
    }

    pub fn pet_mut(&mut self, pet_id: PetId) -> Option<&mut Pet> {
        self.pets.iter_mut().find(|pet| pet.id == Some(pet_id))
    }
}

impl Pet {
    pub fn from_draft(draft: PetDraft) -> Self {
        Self {
            id: None,
            name: draft.name,
            specie: draft.specie,
            breed: draft.breed,
            age: draft.age,
            reason_for_visit: draft.reason_for_visit,
        }
    }

    /// Overwrites every scalar field from the draft; the id is kept.
    pub fn apply(&mut self, draft: &PetDraft) {
        self.name = draft.name.clone();
        self.specie = draft.specie.clone();
        self.breed = draft.breed.clone();
        self.age = draft.age;
        self.reason_for_visit = draft.reason_for_visit.clone();
    }
}

impl Address {
    pub fn from_draft(draft: AddressDraft) -> Self {
        Self {
            id: None,
            street: draft.street,
            state: draft.state,
            city: draft.city,
            cp: draft.cp,
        }
    }

    /// Overwrites every field from the draft; the id is kept.
    pub fn apply(&mut self, draft: &AddressDraft) {
        self.street = draft.street.clone();
        self.state = draft.state.clone();
        self.city = draft.city.clone();
        self.cp = draft.cp;
    }
}
