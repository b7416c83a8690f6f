use serde::{
  Deserialize,
  Serialize
};

use crate::model::{
  AssignmentStatus,
  AssignmentUpdate,
  TaskAssignment,
  TaskNew,
  TaskPermissions,
  TaskStatus,
  TaskType,
  User
};

/// Permissions handed to the embedded
/// comment view of a task card.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct CommentPermissions {
  pub can_delete: bool,
  pub can_edit:   bool
}

/// Effective permissions of a task
/// card. Editing is always off at this
/// view, whatever the server sends in
/// `can_update`.
pub fn derive_permissions(
  server: &TaskPermissions
) -> CommentPermissions {
  CommentPermissions {
    can_delete: server.can_delete,
    can_edit:   false
  }
}

/// First assignment whose target is
/// the viewer. Duplicates are not
/// collapsed.
pub fn current_user_assignment<'a>(
  task: &'a TaskNew,
  current_user: &User
) -> Option<&'a TaskAssignment> {
  task.assignments().iter().find(
    |assignment| {
      assignment.target_id()
        == Some(current_user.id.as_str())
    }
  )
}

pub fn should_show_actions(
  task: &TaskNew,
  assignment: Option<&TaskAssignment>
) -> bool {
  let Some(assignment) = assignment
  else {
    return false;
  };

  assignment.can_update()
    && assignment.status
      == AssignmentStatus::NotStarted
    && task.status.is_open()
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum HeadlineMessage {
  ApprovalCurrentUser,
  GeneralCurrentUser,
  Approval,
  General
}

pub fn headline_message(
  is_current_user: bool,
  task_type: TaskType
) -> HeadlineMessage {
  match (is_current_user, task_type) {
    | (true, TaskType::Approval) => {
      HeadlineMessage::ApprovalCurrentUser
    }
    | (true, TaskType::General) => {
      HeadlineMessage::GeneralCurrentUser
    }
    | (false, TaskType::Approval) => {
      HeadlineMessage::Approval
    }
    | (false, TaskType::General) => {
      HeadlineMessage::General
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum TaskAction {
  Approve,
  Reject,
  Complete
}

impl TaskAction {
  pub fn status(
    self
  ) -> AssignmentStatus {
    match self {
      | TaskAction::Approve => {
        AssignmentStatus::Approved
      }
      | TaskAction::Reject => {
        AssignmentStatus::Rejected
      }
      | TaskAction::Complete => {
        AssignmentStatus::Completed
      }
    }
  }

  /// Triggers offered for a task type.
  pub fn for_task_type(
    task_type: TaskType
  ) -> &'static [TaskAction] {
    match task_type {
      | TaskType::Approval => &[
        TaskAction::Approve,
        TaskAction::Reject
      ],
      | TaskType::General => {
        &[TaskAction::Complete]
      }
    }
  }
}

/// Capability gate in front of
/// `on_assignment_update`. Closed while
/// an update is outstanding.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct ActionGate {
  actionable: bool
}

impl ActionGate {
  pub fn new(is_pending: bool) -> Self {
    Self {
      actionable: !is_pending
    }
  }

  pub fn is_actionable(self) -> bool {
    self.actionable
  }

  /// Update to emit for a click, or
  /// `None` when the gate is closed.
  pub fn dispatch(
    self,
    task_id: &str,
    assignment_id: &str,
    action: TaskAction
  ) -> Option<AssignmentUpdate> {
    if !self.actionable {
      tracing::debug!(
        task_id,
        assignment_id,
        ?action,
        "update pending; ignoring \
         task action"
      );
      return None;
    }

    Some(AssignmentUpdate {
      task_id:       task_id
        .to_string(),
      assignment_id: assignment_id
        .to_string(),
      status:        action.status()
    })
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
)]
pub enum CardFooter {
  Actions {
    assignment_id: String,
    task_type:     TaskType
  },
  Status(TaskStatus)
}

/// Everything a task card derives from
/// its inputs on a render.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
)]
pub struct TaskCardView {
  pub permissions:     CommentPermissions,
  pub headline:        HeadlineMessage,
  pub assigned_to_viewer: bool,
  pub footer:          CardFooter,
  pub due_at:          Option<String>,
  pub show_error:      bool,
  pub pending_visual:  bool,
  pub gate:            ActionGate
}

pub fn task_card_view(
  task: &TaskNew,
  current_user: &User,
  is_pending: bool,
  has_error: bool
) -> TaskCardView {
  let assignment =
    current_user_assignment(
      task,
      current_user
    );
  let footer = match assignment {
    | Some(assignment)
      if should_show_actions(
        task,
        Some(assignment)
      ) =>
    {
      CardFooter::Actions {
        assignment_id: assignment
          .id
          .clone(),
        task_type:     task.task_type
      }
    }
    | _ => CardFooter::Status(task.status)
  };

  TaskCardView {
    permissions: derive_permissions(
      &task.permissions
    ),
    headline: headline_message(
      assignment.is_some(),
      task.task_type
    ),
    assigned_to_viewer: assignment
      .is_some(),
    footer,
    due_at: task
      .due_at
      .clone()
      .filter(|due| !due.is_empty()),
    show_error: has_error,
    pending_visual: is_pending
      || has_error,
    gate: ActionGate::new(is_pending)
  }
}
