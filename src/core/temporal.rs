//! "Current" and "next" lookups over an in-memory list of vacations.
//!
//! Both functions are pure. Callers that have no reference instant pass
//! [`civil_now`](crate::domain::time::civil_now).

use crate::domain::model::Vacation;
use chrono::{DateTime, FixedOffset};

pub(crate) type Finder =
    for<'v> fn(&'v [Vacation], &DateTime<FixedOffset>) -> Option<&'v Vacation>;

/// The vacation whose `[start, end]` contains `at`.
///
/// When several periods overlap, the last one in input order wins.
pub fn find_current<'a>(
    vacations: &'a [Vacation],
    at: &DateTime<FixedOffset>,
) -> Option<&'a Vacation> {
    vacations.iter().rev().find(|v| v.contains(at))
}

/// The vacation with the earliest `start` that is not before `at`.
///
/// Ties on `start` go to the entry that comes first in the input.
pub fn find_next<'a>(
    vacations: &'a [Vacation],
    at: &DateTime<FixedOffset>,
) -> Option<&'a Vacation> {
    vacations
        .iter()
        .filter(|v| v.start >= *at)
        .min_by_key(|v| v.start)
}
