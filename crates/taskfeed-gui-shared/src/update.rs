//! In-memory application of an
//! assignment update, used by the feed
//! host in place of a remote data layer.

use thiserror::Error;

use crate::model::{
  AssignmentStatus,
  AssignmentUpdate,
  CompletionRule,
  TaskNew,
  TaskStatus,
  TaskType
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignmentUpdateError {
  #[error(
    "task {task_id} does not match \
     update for task {update_task_id}"
  )]
  TaskMismatch {
    task_id:        String,
    update_task_id: String
  },
  #[error(
    "assignment {0} not found on task"
  )]
  UnknownAssignment(String),
  #[error(
    "assignment {0} cannot be updated \
     by this user"
  )]
  NotPermitted(String),
  #[error(
    "assignment {0} is already resolved"
  )]
  AlreadyResolved(String),
  #[error(
    "task is closed with status \
     {0:?}"
  )]
  TaskClosed(TaskStatus),
  #[error(
    "{status:?} is not a valid \
     outcome for a {task_type:?} task"
  )]
  InvalidStatus {
    status:    AssignmentStatus,
    task_type: TaskType
  }
}

fn status_allowed(
  task_type: TaskType,
  status: AssignmentStatus
) -> bool {
  match task_type {
    | TaskType::Approval => matches!(
      status,
      AssignmentStatus::Approved
        | AssignmentStatus::Rejected
    ),
    | TaskType::General => {
      status
        == AssignmentStatus::Completed
    }
  }
}

/// Overall task status implied by its
/// assignment statuses.
pub fn derive_task_status(
  task: &TaskNew
) -> TaskStatus {
  let statuses: Vec<AssignmentStatus> =
    task
      .assignments()
      .iter()
      .map(|assignment| {
        assignment.status
      })
      .collect();
  if statuses.is_empty() {
    return task.status;
  }

  let resolved_status =
    match task.task_type {
      | TaskType::Approval => {
        if statuses.contains(
          &AssignmentStatus::Rejected
        ) {
          return TaskStatus::Rejected;
        }
        AssignmentStatus::Approved
      }
      | TaskType::General => {
        AssignmentStatus::Completed
      }
    };

  let resolved = match task
    .completion_rule
  {
    | CompletionRule::AllAssignees => {
      statuses
        .iter()
        .all(|status| {
          *status == resolved_status
        })
    }
    | CompletionRule::AnyAssignee => {
      statuses.contains(&resolved_status)
    }
  };

  if resolved {
    return match task.task_type {
      | TaskType::Approval => {
        TaskStatus::Approved
      }
      | TaskType::General => {
        TaskStatus::Completed
      }
    };
  }

  if statuses.iter().any(|status| {
    *status
      != AssignmentStatus::NotStarted
  }) {
    TaskStatus::InProgress
  } else {
    TaskStatus::NotStarted
  }
}

pub fn apply_assignment_update(
  task: &mut TaskNew,
  update: &AssignmentUpdate
) -> Result<TaskStatus, AssignmentUpdateError>
{
  if task.id != update.task_id {
    return Err(
      AssignmentUpdateError::TaskMismatch {
        task_id:        task.id.clone(),
        update_task_id: update
          .task_id
          .clone()
      }
    );
  }
  if !task.status.is_open() {
    return Err(
      AssignmentUpdateError::TaskClosed(
        task.status
      )
    );
  }
  if !status_allowed(
    task.task_type,
    update.status
  ) {
    return Err(
      AssignmentUpdateError::InvalidStatus {
        status:    update.status,
        task_type: task.task_type
      }
    );
  }

  let assignment = task
    .assignments_mut()
    .and_then(|entries| {
      entries.iter_mut().find(
        |assignment| {
          assignment.id
            == update.assignment_id
        }
      )
    })
    .ok_or_else(|| {
      AssignmentUpdateError::UnknownAssignment(
        update.assignment_id.clone()
      )
    })?;

  if !assignment.can_update() {
    return Err(
      AssignmentUpdateError::NotPermitted(
        assignment.id.clone()
      )
    );
  }
  if assignment.status
    != AssignmentStatus::NotStarted
  {
    return Err(
      AssignmentUpdateError::AlreadyResolved(
        assignment.id.clone()
      )
    );
  }

  assignment.status = update.status;
  task.status = derive_task_status(task);
  tracing::debug!(
    task_id = %task.id,
    assignment_id = %update.assignment_id,
    status = ?task.status,
    "applied assignment update"
  );
  Ok(task.status)
}
