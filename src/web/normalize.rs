//! Leading/trailing whitespace removal for free-text fields.
//!
//! Called by the handlers before validation, so the services always receive
//! already-trimmed drafts and never re-trim.

use crate::model::{AddressDraft, ClientDraft, PetDraft};

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

pub fn client_draft(draft: ClientDraft) -> ClientDraft {
    ClientDraft {
        name: trimmed(draft.name),
        lastname: trimmed(draft.lastname),
        email: trimmed(draft.email),
        phonenumber: draft.phonenumber,
    }
}

pub fn pet_draft(draft: PetDraft) -> PetDraft {
    PetDraft {
        name: trimmed(draft.name),
        specie: trimmed(draft.specie),
        breed: draft.breed.map(trimmed),
        age: draft.age,
        reason_for_visit: trimmed(draft.reason_for_visit),
    }
}

pub fn address_draft(draft: AddressDraft) -> AddressDraft {
    AddressDraft {
        street: trimmed(draft.street),
        state: trimmed(draft.state),
        city: trimmed(draft.city),
        cp: draft.cp,
    }
}
