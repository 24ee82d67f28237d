#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskkeep::libs::config::{Config, StorageConfig, DEFAULT_TASK_FILE_NAME};
    use taskkeep::libs::data_storage::DATA_DIR_ENV;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for each config test.
    /// It points the data directory at a temporary directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
        configured_file: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var(DATA_DIR_ENV, temp_dir.path());
            let configured_file = temp_dir.path().join("configured.json");
            ConfigTestContext { temp_dir, configured_file }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        let config = Config {
            storage: Some(StorageConfig {
                file: ctx.configured_file.clone(),
            }),
        };
        config.save_to(&path).unwrap();

        let read_config = Config::read_from(&path).unwrap();
        assert_eq!(read_config.storage.unwrap().file, ctx.configured_file);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_modules_are_omitted(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        Config::default().save_to(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_corrupted_config(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, "{ storage: ").unwrap();
        assert!(Config::read_from(&path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_task_file_precedence(ctx: &mut ConfigTestContext) {
        let flag = PathBuf::from("flag.json");
        let env_file = PathBuf::from("env.json");
        let config = Config {
            storage: Some(StorageConfig {
                file: ctx.configured_file.clone(),
            }),
        };

        assert_eq!(config.task_file(Some(flag.clone()), Some(env_file.clone())).unwrap(), flag);
        assert_eq!(config.task_file(None, Some(env_file.clone())).unwrap(), env_file);
        assert_eq!(config.task_file(None, None).unwrap(), ctx.configured_file);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_task_file(_ctx: &mut ConfigTestContext) {
        let path = Config::default().task_file(None, None).unwrap();
        assert!(path.ends_with(DEFAULT_TASK_FILE_NAME));
        assert!(path.parent().unwrap().exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_or_default_discards_corrupted_config(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("config.json");
        fs::write(&path, "{ storage: ").unwrap();
        assert_eq!(Config::read_or_default(&path), Config::default());

        let config = Config {
            storage: Some(StorageConfig {
                file: ctx.configured_file.clone(),
            }),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::read_or_default(&path), config);
    }
}
