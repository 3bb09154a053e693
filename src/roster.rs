//! Pure transforms over already-fetched assignment lists: day partitioning
//! and the date arithmetic behind the roster navigation. No state, no IO.

use chrono::{Datelike, NaiveDate};

use crate::database::models::{Assignment, DayAssignment, ProjectAssignment, WorkerAssignment};

const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Anything pinned to a calendar day.
pub trait DayEntry {
    fn date(&self) -> NaiveDate;
}

impl DayEntry for Assignment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DayEntry for DayAssignment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DayEntry for WorkerAssignment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DayEntry for ProjectAssignment {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPartition<T> {
    /// Entries on or after the reference date, original order preserved.
    pub upcoming: Vec<T>,
    /// Entries strictly before the reference date, original order preserved.
    pub past: Vec<T>,
}

/// Split a list into upcoming (`date >= ref_date`) and past (`date < ref_date`).
/// Exhaustive and disjoint: every entry lands in exactly one side.
pub fn partition<T: DayEntry>(entries: Vec<T>, ref_date: NaiveDate) -> DayPartition<T> {
    let (upcoming, past) = entries.into_iter().partition(|e| e.date() >= ref_date);
    DayPartition { upcoming, past }
}

/// Entries falling exactly on `date`. Always a subset of the upcoming side
/// when `date` is the partition reference.
pub fn on_date<T: DayEntry + Clone>(entries: &[T], date: NaiveDate) -> Vec<T> {
    entries
        .iter()
        .filter(|e| e.date() == date)
        .cloned()
        .collect()
}

/// Previous and next calendar day, with month/year rollover. Clamps at the
/// ends of the representable calendar rather than panicking.
pub fn adjacent_dates(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (
        date.pred_opt().unwrap_or(date),
        date.succ_opt().unwrap_or(date),
    )
}

/// `YYYY年M月D日（曜）` heading for the day roster, weekday table indexed
/// 0=Sunday .. 6=Saturday.
pub fn weekday_label(date: NaiveDate) -> String {
    let weekday = WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}年{}月{}日（{}）",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        label: &'static str,
        date: NaiveDate,
    }

    impl DayEntry for Entry {
        fn date(&self) -> NaiveDate {
            self.date
        }
    }

    fn entry(label: &'static str, date: &str) -> Entry {
        Entry {
            label,
            date: date.parse().unwrap(),
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let entries = vec![
            entry("a", "2025-06-14"),
            entry("b", "2025-06-15"),
            entry("c", "2025-06-16"),
            entry("d", "2025-06-01"),
        ];
        let split = partition(entries.clone(), date("2025-06-15"));

        assert_eq!(split.upcoming.len() + split.past.len(), entries.len());
        assert!(split.upcoming.iter().all(|e| e.date >= date("2025-06-15")));
        assert!(split.past.iter().all(|e| e.date < date("2025-06-15")));
        for e in &entries {
            let in_upcoming = split.upcoming.contains(e);
            let in_past = split.past.contains(e);
            assert!(in_upcoming != in_past, "{} must land on one side", e.label);
        }
    }

    #[test]
    fn partition_preserves_relative_order() {
        let entries = vec![
            entry("a", "2025-07-01"),
            entry("b", "2025-06-10"),
            entry("c", "2025-06-20"),
            entry("d", "2025-06-05"),
        ];
        let split = partition(entries, date("2025-06-15"));

        let upcoming: Vec<_> = split.upcoming.iter().map(|e| e.label).collect();
        let past: Vec<_> = split.past.iter().map(|e| e.label).collect();
        assert_eq!(upcoming, vec!["a", "c"]);
        assert_eq!(past, vec!["b", "d"]);
    }

    #[test]
    fn on_date_is_subset_of_upcoming() {
        let entries = vec![
            entry("a", "2025-06-15"),
            entry("b", "2025-06-16"),
            entry("c", "2025-06-15"),
        ];
        let today = on_date(&entries, date("2025-06-15"));
        let split = partition(entries, date("2025-06-15"));

        assert_eq!(today.len(), 2);
        assert!(today.iter().all(|e| split.upcoming.contains(e)));
    }

    #[test]
    fn adjacent_dates_handle_month_and_year_rollover() {
        assert_eq!(
            adjacent_dates(date("2025-01-01")),
            (date("2024-12-31"), date("2025-01-02"))
        );
        assert_eq!(
            adjacent_dates(date("2025-06-30")),
            (date("2025-06-29"), date("2025-07-01"))
        );
    }

    #[test]
    fn adjacent_dates_handle_leap_day() {
        assert_eq!(
            adjacent_dates(date("2024-02-29")),
            (date("2024-02-28"), date("2024-03-01"))
        );
        assert_eq!(adjacent_dates(date("2025-03-01")).0, date("2025-02-28"));
    }

    #[test]
    fn adjacent_dates_round_trip() {
        for s in ["2025-06-15", "2024-02-29", "2025-01-01", "2024-12-31"] {
            let d = date(s);
            let (prev, next) = adjacent_dates(d);
            assert_eq!(adjacent_dates(prev).1, d);
            assert_eq!(adjacent_dates(next).0, d);
        }
    }

    #[test]
    fn weekday_label_uses_sunday_indexed_table() {
        // 2025-06-15 is a Sunday
        assert_eq!(weekday_label(date("2025-06-15")), "2025年6月15日（日）");
        assert_eq!(weekday_label(date("2025-06-21")), "2025年6月21日（土）");
        assert_eq!(weekday_label(date("2025-01-01")), "2025年1月1日（水）");
    }
}
