//! Classification of storage uniqueness violations into user-facing
//! conflict categories.
//!
//! The same constraint is violated by two verbs that must read differently
//! to the user: inserting a duplicate is not the same mistake as renaming
//! onto an existing name. The category is the cross of which uniqueness key
//! fired and which verb was attempted; collapsing either axis produces a
//! wrong message for at least one case.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::UniqueKey;

/// The logical write that was in flight when the constraint fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteVerb {
    Insert,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// New client collides with an existing (name, lastname) pair.
    ClientDuplicate,
    /// Renaming a client onto a pair another client already holds.
    ClientRenameConflict,
    /// New pet collides with a pet name the owner already uses.
    PetDuplicateForOwner,
    /// Renaming a pet onto a name a sibling pet already holds.
    PetRenameConflictForOwner,
}

impl ConflictKind {
    /// Human message for the category. The raw store detail stays in
    /// `ConflictReport::detail` and is never the primary user text.
    pub const fn message(self) -> &'static str {
        match self {
            Self::ClientDuplicate => "a client with this name is already registered",
            Self::ClientRenameConflict => {
                "another client already has the name this client is being renamed to"
            }
            Self::PetDuplicateForOwner => "this client already has a pet with this name",
            Self::PetRenameConflictForOwner => "another pet of this client already has this name",
        }
    }
}

/// One classified uniqueness conflict, stamped at classification time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConflictReport {
    pub kind: ConflictKind,
    pub message: String,
    /// Original low-level failure text, kept for diagnostics.
    pub detail: String,
    pub at: DateTime<Utc>,
}

/// Classifies by which uniqueness key fired crossed with the attempted verb.
pub fn classify(key: UniqueKey, verb: WriteVerb, detail: String) -> ConflictReport {
    let kind = match (key, verb) {
        (UniqueKey::ClientName, WriteVerb::Insert) => ConflictKind::ClientDuplicate,
        (UniqueKey::ClientName, WriteVerb::Update) => ConflictKind::ClientRenameConflict,
        (UniqueKey::PetOwnerName, WriteVerb::Insert) => ConflictKind::PetDuplicateForOwner,
        (UniqueKey::PetOwnerName, WriteVerb::Update) => ConflictKind::PetRenameConflictForOwner,
    };

    ConflictReport {
        kind,
        message: kind.message().to_string(),
        detail,
        at: Utc::now(),
    }
}

/// Extracts `(key, verb)` hints from raw failure text when the structured
/// kind is not otherwise known. Returns `None` if the text names no known
/// constraint.
pub fn classify_raw(detail: &str) -> Option<(UniqueKey, WriteVerb)> {
    let lower = detail.to_lowercase();

    // "uk_client" is a prefix of "uk_client_pet", so test the pet key first.
    let key = if lower.contains("uk_client_pet") {
        UniqueKey::PetOwnerName
    } else if lower.contains("uk_client") {
        UniqueKey::ClientName
    } else {
        return None;
    };

    let verb = if lower.contains("insert") {
        WriteVerb::Insert
    } else {
        WriteVerb::Update
    };

    Some((key, verb))
}
