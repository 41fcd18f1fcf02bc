use prj_model::{Cutoff, ProjectRecord};

/// Records last updated strictly before `cutoff`, in their original order.
pub fn filter_before(records: &[ProjectRecord], cutoff: &Cutoff) -> Vec<ProjectRecord> {
    records
        .iter()
        .filter(|r| cutoff.admits(r.last_update_time))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{OffsetDateTime, macros::datetime};
    use uuid::Uuid;

    fn record(name: &str, ts: OffsetDateTime) -> ProjectRecord {
        ProjectRecord::new(Uuid::new_v4(), name, ts)
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            record("jan", datetime!(2023-01-01 0:00 UTC)),
            record("jun", datetime!(2023-06-01 0:00 UTC)),
            record("next-year", datetime!(2024-01-01 0:00 UTC)),
        ]
    }

    #[test]
    fn keeps_older_records_in_order() {
        let records = sample();
        let cutoff = Cutoff::parse("2023-12-31 00:00").unwrap();

        let filtered = filter_before(&records, &cutoff);
        assert_eq!(filtered, records[..2].to_vec());
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn reapplying_is_a_no_op() {
        let cutoff = Cutoff::parse("2023-12-31 00:00").unwrap();
        let once = filter_before(&sample(), &cutoff);
        let twice = filter_before(&once, &cutoff);
        assert_eq!(once, twice);
    }

    #[test]
    fn record_at_cutoff_is_excluded() {
        let records = vec![record("edge", datetime!(2024-01-01 0:00 UTC))];
        let cutoff = Cutoff::parse("2024-01-01 00:00").unwrap();
        assert!(filter_before(&records, &cutoff).is_empty());
    }

    #[test]
    fn nothing_qualifies() {
        let cutoff = Cutoff::parse("2000-01-01 00:00").unwrap();
        assert!(filter_before(&sample(), &cutoff).is_empty());
        assert!(filter_before(&[], &cutoff).is_empty());
    }
}
