//! Civil time handling.
//!
//! The API delivers wall-clock timestamps without an offset; they are read as
//! German local time (CET/CEST) and stored as `DateTime<FixedOffset>` so the
//! offset that was in effect stays visible on every record.

use crate::utils::error::{FerienError, Result};
use chrono::{
    DateTime, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Utc,
};
use chrono_tz::{OffsetComponents, Tz};

pub const CIVIL_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// Timestamp layout used on the wire, e.g. `2017-01-29T23:00`.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M";

const WIRE_FORMAT_WITH_OFFSET: &str = "%Y-%m-%dT%H:%M%:z";

/// Attaches the civil timezone to a wall-clock time.
///
/// During the autumn overlap the standard-time reading wins; a time inside
/// the spring gap is read with the standard offset.
pub fn localize(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    match CIVIL_TIMEZONE.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.fixed_offset(),
        LocalResult::Ambiguous(_, standard) => standard.fixed_offset(),
        LocalResult::None => {
            let tz_offset = CIVIL_TIMEZONE.offset_from_utc_datetime(&naive);
            let base = tz_offset.base_utc_offset();
            let offset = i32::try_from(base.num_seconds())
                .ok()
                .and_then(FixedOffset::east_opt)
                .unwrap_or_else(|| tz_offset.fix());
            DateTime::from_naive_utc_and_offset(naive - base, offset)
        }
    }
}

/// The current instant in civil time.
pub fn civil_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&CIVIL_TIMEZONE).fixed_offset()
}

/// Parses a wire timestamp. Values without an offset are localized, values
/// that already carry one are kept as they are.
pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, WIRE_FORMAT) {
        return Ok(localize(naive));
    }
    DateTime::parse_from_str(raw, WIRE_FORMAT_WITH_OFFSET).map_err(|_| {
        FerienError::malformed(format!(
            "field '{}' value '{}' does not match format '{}'",
            field, raw, WIRE_FORMAT
        ))
    })
}

/// Renders an instant back into the wire layout.
///
/// The bare wall-clock form is only used when reading it back through
/// [`localize`] yields the same instant and offset; anything else keeps its
/// explicit offset.
pub fn format_timestamp(dt: &DateTime<FixedOffset>) -> String {
    let civil = localize(dt.naive_local());
    if civil == *dt && civil.offset() == dt.offset() {
        dt.format(WIRE_FORMAT).to_string()
    } else {
        dt.format(WIRE_FORMAT_WITH_OFFSET).to_string()
    }
}

/// Conversion of the usual chrono values into a civil-time reference instant.
pub trait IntoCivilTime {
    fn into_civil_time(self) -> DateTime<FixedOffset>;
}

impl IntoCivilTime for NaiveDateTime {
    fn into_civil_time(self) -> DateTime<FixedOffset> {
        localize(self)
    }
}

impl IntoCivilTime for NaiveDate {
    fn into_civil_time(self) -> DateTime<FixedOffset> {
        localize(self.and_time(NaiveTime::MIN))
    }
}

impl<Z: TimeZone> IntoCivilTime for DateTime<Z> {
    fn into_civil_time(self) -> DateTime<FixedOffset> {
        self.fixed_offset()
    }
}
