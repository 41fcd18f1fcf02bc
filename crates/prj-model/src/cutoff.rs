use std::fmt;

use time::{
    OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

use crate::ModelError;

/// Textual timestamp format used for cutoffs and reports: `YYYY-MM-DD HH:MM`.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

/// Time cutoff for the audit filter.
///
/// A record qualifies iff its last update happened strictly before the cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cutoff(OffsetDateTime);

impl Cutoff {
    /// Parse a `YYYY-MM-DD HH:MM` string; the wall-clock time is taken as UTC.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let at = PrimitiveDateTime::parse(value.trim(), TIMESTAMP_FORMAT).map_err(|e| {
            ModelError::InvalidCutoff {
                value: value.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self(at.assume_utc()))
    }

    pub fn at(&self) -> OffsetDateTime {
        self.0
    }

    #[inline]
    pub fn admits(&self, ts: OffsetDateTime) -> bool {
        ts < self.0
    }
}

impl fmt::Display for Cutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timestamp(self.0))
    }
}

/// Render `ts` in UTC using [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(ts: OffsetDateTime) -> String {
    let utc = ts.to_offset(time::UtcOffset::UTC);
    // Only year/month/day/hour/minute components: formatting cannot fail.
    utc.format(TIMESTAMP_FORMAT).unwrap_or_else(|_| utc.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_minute_precision_as_utc() {
        let cutoff = Cutoff::parse("2023-12-31 00:00").unwrap();
        assert_eq!(cutoff.at(), datetime!(2023-12-31 0:00 UTC));
        assert_eq!(cutoff.to_string(), "2023-12-31 00:00");
    }

    #[test]
    fn rejects_other_formats() {
        for bad in ["2023-12-31", "2023/12/31 00:00", "31-12-2023 00:00", "2023-12-31T00:00", ""] {
            assert!(
                matches!(Cutoff::parse(bad), Err(ModelError::InvalidCutoff { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn admits_is_strict() {
        let cutoff = Cutoff::parse("2024-01-01 00:00").unwrap();
        assert!(cutoff.admits(datetime!(2023-12-31 23:59:59 UTC)));
        assert!(!cutoff.admits(datetime!(2024-01-01 0:00 UTC)));
        assert!(!cutoff.admits(datetime!(2024-06-01 0:00 UTC)));
    }

    #[test]
    fn format_normalizes_to_utc() {
        let ts = datetime!(2023-06-01 12:30 +02:00);
        assert_eq!(format_timestamp(ts), "2023-06-01 10:30");
    }
}
