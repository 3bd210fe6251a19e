use figment::Jail;
use todo_config::TodoConfig;

#[test]
fn database_url_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("TODOLIST_DATABASE__URL", "libsql://todos-acme.turso.io");
        jail.set_env("TODOLIST_DATABASE__AUTH_TOKEN", "token-from-env");

        let config: TodoConfig = TodoConfig::figment().extract()?;
        assert_eq!(config.database.url, "libsql://todos-acme.turso.io");
        assert_eq!(config.database.auth_token, "token-from-env");
        assert!(config.database.is_remote());
        assert!(config.database.validate().is_ok());
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "todolist.toml",
            r#"
[server]
bind = "127.0.0.1:9000"
"#,
        )?;
        jail.set_env("TODOLIST_SERVER__BIND", "127.0.0.1:9100");

        let config: TodoConfig = TodoConfig::figment().extract()?;
        assert_eq!(config.server.bind, "127.0.0.1:9100");
        Ok(())
    });
}

#[test]
fn log_directive_does_not_clash_with_logging_section() {
    Jail::expect_with(|jail| {
        jail.set_env("TODOLIST_LOG", "debug");

        let config: TodoConfig = TodoConfig::figment().extract()?;
        assert_eq!(config.logging.filter, "info");
        Ok(())
    });
}
