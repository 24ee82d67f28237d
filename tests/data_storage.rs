#[cfg(test)]
mod tests {
    use taskkeep::libs::data_storage::{DataStorage, APP_NAME, DATA_DIR_ENV};

    #[test]
    fn test_get_path_creates_base_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("nested").join(APP_NAME);
        let storage = DataStorage::at(&base);

        let path = storage.get_path("tasks.json").unwrap();
        assert_eq!(path, base.join("tasks.json"));
        assert!(base.is_dir());
        assert!(!path.exists());
        assert_eq!(storage.base_path(), base.as_path());
    }

    #[test]
    fn test_data_dir_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::env::set_var(DATA_DIR_ENV, temp_dir.path());

        let storage = DataStorage::new();
        assert_eq!(storage.base_path(), temp_dir.path());
        assert_eq!(storage.get_path("config.json").unwrap(), temp_dir.path().join("config.json"));

        std::env::remove_var(DATA_DIR_ENV);
        assert!(DataStorage::new().base_path().ends_with(APP_NAME));
    }
}
