#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use todo_cli::libs::color::{colorize, Color};
    use todo_cli::libs::formatter::{format_created_at, format_due_date, format_due_date_on};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn due_in(days: i64) -> Option<NaiveDate> {
        Some(today() + Duration::days(days))
    }

    #[test]
    fn test_format_due_date_none_is_empty() {
        assert_eq!(format_due_date_on(None, today()), "");
        assert_eq!(format_due_date(None), "");
    }

    #[test]
    fn test_format_due_date_overdue() {
        assert_eq!(format_due_date_on(due_in(-1), today()), colorize(Color::Red, "2025-06-14 (OVERDUE)"));
        assert_eq!(format_due_date_on(due_in(-30), today()), colorize(Color::Red, "2025-05-16 (OVERDUE)"));
    }

    #[test]
    fn test_format_due_date_today() {
        assert_eq!(format_due_date_on(due_in(0), today()), colorize(Color::Red, "2025-06-15 (TODAY)"));
    }

    #[test]
    fn test_format_due_date_tomorrow() {
        assert_eq!(format_due_date_on(due_in(1), today()), colorize(Color::Yellow, "2025-06-16 (tomorrow)"));
    }

    #[test]
    fn test_format_due_date_within_three_days() {
        assert_eq!(format_due_date_on(due_in(2), today()), colorize(Color::Yellow, "2025-06-17"));
        assert_eq!(format_due_date_on(due_in(3), today()), colorize(Color::Yellow, "2025-06-18"));
    }

    #[test]
    fn test_format_due_date_later() {
        assert_eq!(format_due_date_on(due_in(4), today()), colorize(Color::Green, "2025-06-19"));
        assert_eq!(format_due_date_on(due_in(5), today()), colorize(Color::Green, "2025-06-20"));
    }

    #[test]
    fn test_format_due_date_across_month_boundary() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let due = NaiveDate::from_ymd_opt(2025, 2, 1);
        assert!(format_due_date_on(due, today).contains("2025-02-01 (tomorrow)"));
    }

    #[test]
    fn test_format_created_at_shape() {
        let created = Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap();
        let formatted = format_created_at(&created);
        assert_eq!(formatted.len(), "2025-03-01 12:30".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }
}
