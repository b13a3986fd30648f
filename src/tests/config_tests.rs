#[cfg(test)]
mod tests {
    use crate::config;

    #[test]
    fn test_embedded_defaults_deserialize() {
        let defaults: &str = include_str!("../../config/default.toml");
        let cfg = ::config::Config::builder()
            .add_source(::config::File::from_str(defaults, ::config::FileFormat::Toml))
            .build()
            .expect("embedded defaults must parse");
        let app_cfg: config::AppConfig =
            cfg.try_deserialize().expect("embedded defaults must deserialize");

        assert_eq!(app_cfg.server.port, 8000);
        assert_eq!(app_cfg.auth.token_expire_minutes, 60);
        assert!(app_cfg.object_store.is_none());
        assert_eq!(app_cfg.fixtures.dir, "fixtures");
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let db_path = tmp.path().join("nested/dir/aedb.db");
        let url = format!("sqlite://{}", db_path.display());

        config::ensure_sqlite_parent_dir(&url).unwrap();
        assert!(db_path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_ensure_sqlite_parent_dir_ignores_non_sqlite_urls() {
        assert!(config::ensure_sqlite_parent_dir("postgres://localhost/aedb").is_ok());
    }
}
