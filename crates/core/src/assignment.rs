//! Assignment rules and reader-history conventions.
//!
//! An assignment never stores its reader. The reader history log is
//! append-only and the entry with the greatest `assigned_date` (ties broken
//! by the larger id) is the current reader.

use crate::error::CoreError;
use crate::status::StatusId;
use crate::types::{Date, DbId};

/// History note recorded when a reader is chosen at creation time.
pub const INITIAL_ASSIGNMENT_NOTE: &str = "Initial assignment";

/// History note recorded when a reassignment carries no explicit reason.
pub const DEFAULT_REASSIGNMENT_NOTE: &str = "Reader reassigned";

/// Maximum length of assignment and history notes, in characters.
pub const MAX_NOTES_LENGTH: usize = 5_000;

/// Fields copied once from an order when it is linked to an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSeed {
    pub catalogue_id: DbId,
    pub reception_date: Date,
}

/// Book and reception date after applying an order seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededFields {
    pub catalogue_id: Option<DbId>,
    pub reception_date: Option<Date>,
}

/// Fill book and reception date from a linked order.
///
/// Values supplied explicitly by the operator win over the order's values.
/// The copy happens once; later edits to the order never propagate.
pub fn seed_from_order(
    catalogue_id: Option<DbId>,
    reception_date: Option<Date>,
    seed: Option<OrderSeed>,
) -> SeededFields {
    match seed {
        Some(seed) => SeededFields {
            catalogue_id: catalogue_id.or(Some(seed.catalogue_id)),
            reception_date: reception_date.or(Some(seed.reception_date)),
        },
        None => SeededFields {
            catalogue_id,
            reception_date,
        },
    }
}

/// Check that a new assignment names both a book and a status.
pub fn validate_required(
    catalogue_id: Option<DbId>,
    status_id: Option<StatusId>,
) -> Result<(DbId, StatusId), CoreError> {
    let catalogue_id = catalogue_id
        .ok_or_else(|| CoreError::Validation("A book (catalogue_id) is required".into()))?;
    let status_id =
        status_id.ok_or_else(|| CoreError::Validation("A status (status_id) is required".into()))?;
    Ok((catalogue_id, status_id))
}

/// Validate free-text notes length.
pub fn validate_notes(notes: Option<&str>) -> Result<(), CoreError> {
    match notes {
        Some(n) if n.chars().count() > MAX_NOTES_LENGTH => Err(CoreError::Validation(format!(
            "Notes exceed maximum length of {MAX_NOTES_LENGTH} characters"
        ))),
        _ => Ok(()),
    }
}

/// Reject a reassignment that would not change the current reader.
pub fn check_reassignment(current_reader: Option<DbId>, new_reader: DbId) -> Result<(), CoreError> {
    if current_reader == Some(new_reader) {
        return Err(CoreError::NoChange(format!(
            "Reader {new_reader} is already assigned to this assignment"
        )));
    }
    Ok(())
}

/// Resolve the note stored on a history entry, falling back to `default`
/// when the caller sent nothing or only whitespace.
pub fn history_note(notes: Option<&str>, default: &str) -> String {
    notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(default)
        .to_string()
}
