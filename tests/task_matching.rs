#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskkeep::libs::task::{Priority, SearchCriteria, Status, Task, TaskUpdate};

    fn sample() -> Task {
        let due = NaiveDate::from_ymd_opt(2030, 3, 15).unwrap();
        Task::new(7, "Write Report", "Quarterly numbers", "Work", due, Priority::High)
    }

    #[test]
    fn test_empty_criteria_matches_nothing() {
        assert!(!sample().matches(&SearchCriteria::default()));
    }

    #[test]
    fn test_text_fields_ignore_case() {
        let task = sample();

        let by_category = SearchCriteria {
            category: Some("work".to_string()),
            ..Default::default()
        };
        let by_title = SearchCriteria {
            title: Some("WRITE REPORT".to_string()),
            ..Default::default()
        };
        let by_description = SearchCriteria {
            description: Some("quarterly NUMBERS".to_string()),
            ..Default::default()
        };
        assert!(task.matches(&by_category));
        assert!(task.matches(&by_title));
        assert!(task.matches(&by_description));
    }

    #[test]
    fn test_text_fields_ignore_case_beyond_ascii() {
        let due = NaiveDate::from_ymd_opt(2030, 3, 15).unwrap();
        let task = Task::new(1, "Купить хлеб", "", "Дом", due, Priority::Low);

        let criteria = SearchCriteria {
            category: Some("дом".to_string()),
            ..Default::default()
        };
        assert!(task.matches(&criteria));
    }

    #[test]
    fn test_text_fields_need_whole_value() {
        let criteria = SearchCriteria {
            title: Some("report".to_string()),
            ..Default::default()
        };
        assert!(!sample().matches(&criteria));
    }

    #[test]
    fn test_id_and_due_date_exact() {
        let task = sample();

        assert!(task.matches(&SearchCriteria::by_id(7)));
        assert!(!task.matches(&SearchCriteria::by_id(8)));

        let on_due = SearchCriteria {
            due_date: NaiveDate::from_ymd_opt(2030, 3, 15),
            ..Default::default()
        };
        let day_after = SearchCriteria {
            due_date: NaiveDate::from_ymd_opt(2030, 3, 16),
            ..Default::default()
        };
        assert!(task.matches(&on_due));
        assert!(!task.matches(&day_after));
    }

    #[test]
    fn test_labels_parse_ignoring_case() {
        let task = sample();

        let criteria = SearchCriteria {
            priority: Some("HIGH".parse().unwrap()),
            status: Some("Not Done".parse().unwrap()),
            ..Default::default()
        };
        assert!(task.matches(&criteria));
    }

    #[test]
    fn test_every_criterion_must_match() {
        let task = sample();

        let matching = SearchCriteria {
            id: Some(7),
            category: Some("work".to_string()),
            priority: Some(Priority::High),
            ..Default::default()
        };
        let one_off = SearchCriteria {
            status: Some(Status::Done),
            ..matching.clone()
        };
        assert!(task.matches(&matching));
        assert!(!task.matches(&one_off));
    }

    #[test]
    fn test_update_applies_only_given_fields() {
        let mut task = sample();
        let update = TaskUpdate {
            category: Some("Home".to_string()),
            status: Some(Status::Done),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply(&mut task);

        assert_eq!(task.id(), 7);
        assert_eq!(task.title, "Write Report");
        assert_eq!(task.category, "Home");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Done);
    }

    #[test]
    fn test_criteria_from_update() {
        let update = TaskUpdate {
            title: Some("write report".to_string()),
            ..Default::default()
        };
        let criteria = SearchCriteria::from(update);
        assert_eq!(criteria.id, None);
        assert!(sample().matches(&criteria));

        assert!(TaskUpdate::default().is_empty());
        assert!(SearchCriteria::from(TaskUpdate::default()).is_empty());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(Status::NotDone.to_string(), "not done");
        assert_eq!(Status::default(), Status::NotDone);
    }
}
