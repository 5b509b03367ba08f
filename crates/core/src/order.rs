//! Order rules consumed by the assignment workflow.
//!
//! - Overdue derivation (recomputed on every read, never stored).
//! - Duplication vs physical-loan exclusivity.

use chrono::Months;

use crate::error::CoreError;
use crate::status::{StatusId, STATUS_COMPLETED_ID, STATUS_NAME_DUPLICATION, STATUS_NAME_PHYSICAL_LOAN};
use crate::types::Timestamp;

/// Orders still open after this many calendar months are overdue.
pub const OVERDUE_AFTER_MONTHS: u32 = 3;

/// Whether an order is overdue at `now`.
///
/// Completed orders are never overdue. Otherwise the order is overdue when
/// it was received strictly before `now - 3 months`; an order received
/// exactly on the boundary is not.
pub fn is_overdue(status_id: StatusId, request_received_date: Timestamp, now: Timestamp) -> bool {
    if status_id == STATUS_COMPLETED_ID {
        return false;
    }
    match now.checked_sub_months(Months::new(OVERDUE_AFTER_MONTHS)) {
        Some(threshold) => request_received_date < threshold,
        None => false,
    }
}

/// The two mutually exclusive request-type flags of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestType {
    pub is_duplication: bool,
    pub lent_physical_book: bool,
}

/// Outcome of applying requested flag changes to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTypeChange {
    pub flags: RequestType,
    /// Name of the status to select when the caller did not pick one.
    pub default_status_name: Option<&'static str>,
}

/// Apply flag changes on top of `current`.
///
/// Selecting one request type clears the other and proposes its default
/// status. Clearing a flag leaves the other untouched. Selecting both at
/// once is rejected.
pub fn resolve_request_type(
    is_duplication: Option<bool>,
    lent_physical_book: Option<bool>,
    current: RequestType,
) -> Result<RequestTypeChange, CoreError> {
    match (is_duplication, lent_physical_book) {
        (Some(true), Some(true)) => Err(CoreError::Validation(
            "An order cannot be both a duplication and a physical loan".into(),
        )),
        (Some(true), _) => Ok(RequestTypeChange {
            flags: RequestType {
                is_duplication: true,
                lent_physical_book: false,
            },
            default_status_name: Some(STATUS_NAME_DUPLICATION),
        }),
        (_, Some(true)) => Ok(RequestTypeChange {
            flags: RequestType {
                is_duplication: false,
                lent_physical_book: true,
            },
            default_status_name: Some(STATUS_NAME_PHYSICAL_LOAN),
        }),
        (dup, lent) => Ok(RequestTypeChange {
            flags: RequestType {
                is_duplication: dup.unwrap_or(current.is_duplication),
                lent_physical_book: lent.unwrap_or(current.lent_physical_book),
            },
            default_status_name: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> Timestamp {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn completed_order_is_never_overdue() {
        let now = at(2026, 10, 14);
        assert!(!is_overdue(STATUS_COMPLETED_ID, at(2020, 1, 1), now));
    }

    #[test]
    fn open_order_older_than_three_months_is_overdue() {
        let now = at(2026, 10, 14);
        assert!(is_overdue(1, at(2026, 7, 13), now));
        assert!(is_overdue(4, at(2025, 1, 1), now));
    }

    #[test]
    fn exact_boundary_is_not_overdue() {
        let now = at(2026, 10, 14);
        assert!(!is_overdue(1, at(2026, 7, 14), now));
    }

    #[test]
    fn recent_order_is_not_overdue() {
        let now = at(2026, 10, 14);
        assert!(!is_overdue(1, at(2026, 9, 1), now));
    }

    #[test]
    fn month_end_boundary_clamps() {
        // May 31 minus three months clamps to Feb 28.
        let now = at(2026, 5, 31);
        assert!(!is_overdue(1, at(2026, 2, 28), now));
        assert!(is_overdue(1, at(2026, 2, 27), now));
    }

    #[test]
    fn selecting_duplication_clears_physical_loan() {
        let current = RequestType {
            is_duplication: false,
            lent_physical_book: true,
        };
        let change = resolve_request_type(Some(true), None, current).unwrap();
        assert_eq!(
            change.flags,
            RequestType {
                is_duplication: true,
                lent_physical_book: false
            }
        );
        assert_eq!(change.default_status_name, Some(STATUS_NAME_DUPLICATION));
    }

    #[test]
    fn selecting_physical_loan_clears_duplication() {
        let current = RequestType {
            is_duplication: true,
            lent_physical_book: false,
        };
        let change = resolve_request_type(None, Some(true), current).unwrap();
        assert_eq!(
            change.flags,
            RequestType {
                is_duplication: false,
                lent_physical_book: true
            }
        );
        assert_eq!(change.default_status_name, Some(STATUS_NAME_PHYSICAL_LOAN));
    }

    #[test]
    fn clearing_a_flag_keeps_the_other() {
        let current = RequestType {
            is_duplication: true,
            lent_physical_book: false,
        };
        let change = resolve_request_type(Some(false), None, current).unwrap();
        assert_eq!(change.flags, RequestType::default());
        assert_eq!(change.default_status_name, None);
    }

    #[test]
    fn both_flags_is_rejected() {
        assert_matches!(
            resolve_request_type(Some(true), Some(true), RequestType::default()),
            Err(CoreError::Validation(_))
        );
    }
}
