use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u64), // id
    TaskUpdated(u64), // id
    TaskDeleted(u64), // id
    TaskNotFoundWithId(u64),
    TaskStatusChanged(u64, String), // id, status
    TasksHeader,
    NoTasks,
    TasksNotFound,
    NoSearchCriteria,
    NoChangesDetected,

    // === INPUT MESSAGES ===
    InvalidInput(String), // reason

    // === MENU MESSAGES ===
    MenuTitle,
    MenuAddTask,
    MenuDeleteTask,
    MenuUpdateTask,
    MenuUpdateStatus,
    MenuShowAll,
    MenuSearch,
    MenuExit,
    Goodbye,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigDiscarded(String), // reason
    ConfigSaveError,
    ConfigModuleStorage,
    TaskFileCreated(PathBuf),
    TaskFileIsDirectory(PathBuf),
    UsingTaskFile(PathBuf),

    // === PROMPTS ===
    PromptTaskId,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskDueDate,
    PromptTaskPriority,
    PromptTaskStatus,
    PromptOptional(Box<Message>),
    PromptTaskFile,
}
