//! Workflow status reference data.
//!
//! Statuses live in the `statuses` lookup table and carry arbitrary display
//! names. No transition rules are enforced: any assignment or order may move
//! to any status at any time. Only the ids and names below are load-bearing.

/// Status ID type matching SMALLSERIAL in the database.
pub type StatusId = i16;

/// The status that marks an order as finished. Finished orders are never overdue.
pub const STATUS_COMPLETED_ID: StatusId = 3;

/// Status given to a new order that names no status and no request type.
pub const STATUS_NAME_RECEIVED: &str = "Réceptionné";

/// Default status selected when an order is flagged as a duplication request.
pub const STATUS_NAME_DUPLICATION: &str = "Duplication en cours";

/// Default status selected when an order is flagged as a physical-book loan.
pub const STATUS_NAME_PHYSICAL_LOAN: &str = "Prêt physique";
