use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};

pub fn cmd(tasks: &Tasks) {
    if tasks.tasks().is_empty() {
        msg_info!(Message::NoTasks, true);
        return;
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(tasks.tasks());
}
