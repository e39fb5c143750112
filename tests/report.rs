#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use moro::libs::config::Config;
    use moro::libs::hours::compute_work_hours;
    use moro::libs::record::{merge, DailyRecord, Update};
    use moro::libs::time_of_day::TimeOfDay;
    use moro::libs::view::View;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn day(day: u32, start: &str, end: Option<&str>, config: &Config) -> DailyRecord {
        let record = merge(None, &Update::set_start(date(day), time(start)), config);
        match end {
            Some(end) => merge(Some(record), &Update::set_end(date(day), time(end)), config),
            None => record,
        }
    }

    #[test]
    fn test_day_table_shows_worked_time() {
        let config = Config::default();
        let record = day(1, "09:00", Some("17:00"), &config);
        let hours = compute_work_hours(Some(&record));

        let rendered = View::day_table(&record, hours.as_ref(), &config).to_string();
        assert!(rendered.contains("2024-03-01"));
        assert!(rendered.contains("09:00"));
        assert!(rendered.contains("17:00"));
        assert!(rendered.contains("30 min"));
        assert!(rendered.contains("7h 30m"));
    }

    #[test]
    fn test_day_table_placeholder_when_in_progress() {
        let config = Config::default();
        let record = day(1, "09:00", None, &config);

        let table = View::day_table(&record, None, &config);
        assert_eq!(table.len(), 1);
        let rendered = table.to_string();
        assert!(rendered.contains("in progress"));
        assert!(rendered.contains(" - "));
    }

    #[test]
    fn test_day_table_lists_notes() {
        let config = Config::default();
        let record = merge(None, &Update::add_note(date(1), "kickoff", time("09:30")), &config);
        let record = merge(Some(record), &Update::add_note(date(1), "demo", time("16:00")), &config);

        let rendered = View::day_table(&record, None, &config).to_string();
        assert!(rendered.contains("[09:30] kickoff"));
        assert!(rendered.contains("[16:00] demo"));
    }

    #[test]
    fn test_report_table_uses_date_format_and_order() {
        let config = Config {
            date_format: "%d.%m.%Y".to_string(),
            ..Config::default()
        };
        let records = vec![day(5, "08:00", Some("16:30"), &config), day(2, "10:00", None, &config)];

        let table = View::report_table(&records, &config);
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        let first = rendered.find("02.03.2024").unwrap();
        let second = rendered.find("05.03.2024").unwrap();
        assert!(first < second);
        assert!(rendered.contains("8h 0m"));
        assert!(rendered.contains("in progress"));
    }

    #[test]
    fn test_report_table_empty() {
        let table = View::report_table(&[], &Config::default());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_total_minutes_counts_completed_days_only() {
        let config = Config::default();
        let records = vec![
            day(1, "09:00", Some("17:30"), &config),
            day(2, "09:00", Some("13:30"), &config),
            day(3, "09:00", None, &config),
        ];

        assert_eq!(View::total_minutes(&records), (480 + 240, 2));
    }
}
