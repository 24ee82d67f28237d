#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use taskkeep::commands::{ensure_task_file, search};
    use taskkeep::db::tasks::Tasks;
    use taskkeep::libs::task::{Priority, SearchCriteria};

    #[test]
    fn test_ensure_task_file_creates_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("tasks.json");

        ensure_task_file(&path).unwrap();
        assert!(path.is_file());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        let tasks = Tasks::open(&path).unwrap();
        assert!(tasks.tasks().is_empty());
    }

    #[test]
    fn test_ensure_task_file_keeps_existing_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");
        fs::write(&path, "[]").unwrap();

        ensure_task_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_ensure_task_file_rejects_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let error = ensure_task_file(temp_dir.path()).unwrap_err();
        assert!(error.to_string().contains("is a directory"));
    }

    #[test]
    fn test_search_without_criteria_skips_lookup() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");
        ensure_task_file(&path).unwrap();
        let mut tasks = Tasks::open(&path).unwrap();
        let due = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        tasks.add("Fix sink", "", "Home", due, Priority::Low).unwrap();

        assert!(search::matching(&tasks, &SearchCriteria::default()).is_none());

        let home = SearchCriteria {
            category: Some("home".to_string()),
            ..Default::default()
        };
        assert_eq!(search::matching(&tasks, &home).map(|found| found.len()), Some(1));

        let work = SearchCriteria {
            category: Some("work".to_string()),
            ..Default::default()
        };
        assert_eq!(search::matching(&tasks, &work).map(|found| found.len()), Some(0));
    }
}
