use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "CATEGORY", "DUE DATE", "PRIORITY", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id(),
                task.title,
                task.description,
                task.category,
                task.due_date.format("%d.%m.%Y"),
                task.priority,
                task.status
            ]);
        }
        table.printstd();
    }
}
