mod assignee_status;
mod assignees;
mod avatar;
mod comment;
mod comment_inline_error;
mod task;
mod task_actions;
mod task_due_date;
mod task_status;
mod task_type_icon;

pub use assignee_status::AssigneeStatus;
pub use assignees::Assignees;
pub use avatar::Avatar;
pub use comment::{
  Comment,
  CommentEdit,
  Translations
};
pub use comment_inline_error::CommentInlineError;
pub use task::Task;
pub use task_actions::TaskActions;
pub use task_due_date::TaskDueDate;
pub use task_status::TaskStatusBadge;
pub use task_type_icon::TaskTypeIcon;
