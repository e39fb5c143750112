#[cfg(test)]
mod tests {
    use moro::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        conn: Connection,
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let conn = Connection::open(temp_dir.path().join("moro.db")).unwrap();
            MigrationTestContext { conn, _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_reach_latest_version(ctx: &mut MigrationTestContext) {
        init_with_migrations(&mut ctx.conn).unwrap();

        assert_eq!(get_db_version(&ctx.conn).unwrap(), MigrationManager::new().latest_version());
        assert!(!needs_migration(&ctx.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_are_idempotent(ctx: &mut MigrationTestContext) {
        init_with_migrations(&mut ctx.conn).unwrap();
        init_with_migrations(&mut ctx.conn).unwrap();

        let applied: i64 = ctx.conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, i64::from(MigrationManager::new().latest_version()));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_tables_exist(ctx: &mut MigrationTestContext) {
        init_with_migrations(&mut ctx.conn).unwrap();

        for table in ["days", "notes"] {
            let count: i64 = ctx
                .conn
                .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [table], |row| row.get(0))
                .unwrap();
            assert_eq!(count, 1, "table {table} should exist");
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_days_table_has_end_column(ctx: &mut MigrationTestContext) {
        init_with_migrations(&mut ctx.conn).unwrap();

        let mut stmt = ctx.conn.prepare("SELECT name FROM pragma_table_info('days')").unwrap();
        let columns: Vec<String> = stmt.query_map([], |row| row.get(0)).unwrap().map(|c| c.unwrap()).collect();
        assert_eq!(columns, vec!["date", "start", "end", "break_duration"]);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_negative_break_violates_schema(ctx: &mut MigrationTestContext) {
        init_with_migrations(&mut ctx.conn).unwrap();

        let result = ctx.conn.execute("INSERT INTO days (date, break_duration) VALUES ('2024-03-01', -5)", []);
        assert!(result.is_err());
    }
}
