/// Every user-facing text of the application.
///
/// The wording lives in the `Display` implementation in
/// [`display`](super::display); call sites only pick a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u32, String), // id, name
    TaskUpdated(u32),
    TaskDeleted(u32),
    TaskNotFound(u32),
    TaskDuplicateId(u32),
    TaskAlreadyCompleted(u32),
    TasksNotFound,
    TasksHeader(usize), // count
    ProgressHeader,
    NoOpenTasks,
    ConfirmDeleteTask(u32, String), // id, name
    OperationCancelled,
    NoChangesDetected,

    // === TASK INPUT ===
    PromptTaskName,
    PromptTaskDescription,
    PromptTaskCourse,
    PromptTaskExpiry,
    PromptTaskMinutes,
    PromptTaskPriority,
    PromptUsedMinutes(u32), // total minutes
    PromptSelectField,
    InvalidTotalMinutes(u32, u32), // given, maximum
    InvalidUsedMinutes(u32, u32),  // given, total
    UsedMinutesClamped(u32),
    ExpiryInPast,

    // === EDIT MENU ===
    MenuUpdateName,
    MenuUpdateDescription,
    MenuUpdateCourse,
    MenuUpdateExpiry,
    MenuUpdateTotalTime,
    MenuUpdateUsedTime,
    MenuUpdatePriority,
    MenuMarkCompleted,
    MenuSaveChanges,
    MenuDiscardChanges,

    // === REPORT MESSAGES ===
    ReportHeader(String, String), // period start, now
    ReportSectionCompleted,
    ReportSectionYetToBegin,
    ReportSectionOngoing,
    ReportSectionExpired,
    ReportSectionEmpty,
    ReportSaved(String),       // path
    ReportStartInFuture(i64),  // default window in days

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),       // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleTasks,
    PromptTasksFile,
    PromptReportPeriodDays,
    PromptDateFormat,
    InvalidReportPeriodDays(i64), // upper bound
    InvalidDateFormat(String),
}
