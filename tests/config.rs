#[cfg(test)]
mod tests {
    use moro::libs::config::{Config, DEFAULT_BREAK_MINUTES, DEFAULT_DATE_FORMAT, DEFAULT_WORK_DAY_HOURS, MAX_BREAK_MINUTES};
    use moro::libs::error::AppError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("config.json");
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.work_day_hours, DEFAULT_WORK_DAY_HOURS);
        assert_eq!(config.break_default_minutes, DEFAULT_BREAK_MINUTES);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(config.db_file_main.is_empty());
        assert!(config.extra.is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            work_day_hours: 8.0,
            break_default_minutes: 45,
            date_format: "%d.%m.%Y".to_string(),
            db_file_main: "/tmp/work.db".to_string(),
            ..Config::default()
        };
        config.save_to(&ctx.path).unwrap();

        let read_config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_reads_upper_case_keys(ctx: &mut ConfigTestContext) {
        fs::write(
            &ctx.path,
            r#"{"HOURS_IN_A_WORK_DAY": 6, "BREAK_DEFAULT": 20, "DATE_FORMAT": "%d/%m", "DB_FILE_MAIN": ""}"#,
        )
        .unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.work_day_hours, 6.0);
        assert_eq!(config.break_default_minutes, 20);
        assert_eq!(config.date_format, "%d/%m");
        assert_eq!(config.work_day_minutes(), 360);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_keys_take_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{"BREAK_DEFAULT": 15}"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.break_default_minutes, 15);
        assert_eq!(config.work_day_hours, DEFAULT_WORK_DAY_HOURS);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_keys_pass_through(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{"BREAK_DEFAULT": 30, "THEME": "dark", "LIMITS": {"max": 3}}"#).unwrap();

        let mut config = Config::read_from(&ctx.path).unwrap();
        config.break_default_minutes = 40;
        config.save_to(&ctx.path).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&ctx.path).unwrap()).unwrap();
        assert_eq!(raw["THEME"], "dark");
        assert_eq!(raw["LIMITS"]["max"], 3);
        assert_eq!(raw["BREAK_DEFAULT"], 40);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_a_load_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "{ not json").unwrap();
        let err = Config::read_from(&ctx.path).unwrap_err();
        assert!(matches!(err, AppError::ConfigLoad(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_out_of_range_work_day_is_rejected(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{"HOURS_IN_A_WORK_DAY": 30}"#).unwrap();
        let err = Config::read_from(&ctx.path).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_oversized_default_break_is_rejected(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{"BREAK_DEFAULT": 4294967295}"#).unwrap();
        let err = Config::read_from(&ctx.path).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_time_only_date_format_is_rejected(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{"DATE_FORMAT": "%Y-%m-%d %H:%M"}"#).unwrap();
        let err = Config::read_from(&ctx.path).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_break_bound_is_inclusive() {
        let config = Config {
            break_default_minutes: MAX_BREAK_MINUTES,
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        let config = Config {
            break_default_minutes: MAX_BREAK_MINUTES + 1,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_explicit_database_path() {
        let config = Config {
            db_file_main: " /data/moro.db ".to_string(),
            ..Config::default()
        };
        assert_eq!(config.database_path().unwrap(), PathBuf::from("/data/moro.db"));
    }

    #[test]
    fn test_fractional_work_day_minutes() {
        let config = Config {
            work_day_hours: 7.75,
            ..Config::default()
        };
        assert_eq!(config.work_day_minutes(), 465);
    }
}
