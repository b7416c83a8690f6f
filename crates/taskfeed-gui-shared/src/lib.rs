pub mod assignees;
pub mod card;
pub mod model;
pub mod tagged_message;
pub mod update;

pub use assignees::{
  AssigneeAvatar,
  AssigneesView,
  MAX_AVATARS,
  assignees_view,
  fill_user_placeholder
};
pub use card::{
  ActionGate,
  CardFooter,
  CommentPermissions,
  HeadlineMessage,
  TaskAction,
  TaskCardView,
  current_user_assignment,
  derive_permissions,
  headline_message,
  should_show_actions,
  task_card_view
};
pub use model::{
  ActionItemError,
  AssignmentPermissions,
  AssignmentStatus,
  AssignmentUpdate,
  CompletionRule,
  PLACEHOLDER_USER_ID,
  TaskAssigneeCollection,
  TaskAssignment,
  TaskNew,
  TaskPermissions,
  TaskStatus,
  TaskType,
  User
};
pub use tagged_message::{
  MessageSegment,
  insert_mention,
  mention_query,
  parse_tagged_message
};
pub use update::{
  AssignmentUpdateError,
  apply_assignment_update,
  derive_task_status
};
