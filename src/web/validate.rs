//! Field-level validation applied before a draft reaches the services.
//!
//! Drafts arrive already trimmed (see [`crate::web::normalize`]), so a blank
//! check is an emptiness check. Failures come back as a field-name → message
//! map for a 400 response.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{AddressDraft, ClientDraft, PetDraft};

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

// Bounds of the ten-digit phone number range.
const PHONE_MIN: u64 = 1_000_000_000;
const PHONE_MAX: u64 = 9_999_999_999;

pub type FieldErrors = BTreeMap<String, String>;

fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.insert(
            field.to_string(),
            format!("the {field} field must not be blank"),
        );
    }
}

pub fn client_draft(draft: &ClientDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(&mut errors, "name", &draft.name);
    require(&mut errors, "lastname", &draft.lastname);
    require(&mut errors, "email", &draft.email);

    if !draft.email.is_empty() && !EMAIL.is_match(&draft.email) {
        errors.insert(
            "email".to_string(),
            "the email field must be a well-formed address".to_string(),
        );
    }
    if !(PHONE_MIN..=PHONE_MAX).contains(&draft.phonenumber) {
        errors.insert(
            "phonenumber".to_string(),
            "the phonenumber field must contain exactly ten digits".to_string(),
        );
    }

    errors
}

pub fn pet_draft(draft: &PetDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(&mut errors, "name", &draft.name);
    require(&mut errors, "specie", &draft.specie);
    require(&mut errors, "reason_for_visit", &draft.reason_for_visit);

    if draft.age < 0 {
        errors.insert(
            "age".to_string(),
            "the age field must not be negative".to_string(),
        );
    }

    errors
}

pub fn address_draft(draft: &AddressDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    require(&mut errors, "street", &draft.street);
    require(&mut errors, "state", &draft.state);
    require(&mut errors, "city", &draft.city);

    errors
}
