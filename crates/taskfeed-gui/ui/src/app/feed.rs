use std::rc::Rc;

use taskfeed_gui_shared::{
  ActionItemError,
  AssignmentUpdate,
  AssignmentUpdateError,
  TaskNew,
  apply_assignment_update
};
use yew::Reducible;

use crate::components::CommentEdit;

#[derive(
  Debug,
  Clone,
  PartialEq,
)]
pub struct FeedItem {
  pub task:       TaskNew,
  pub is_pending: bool,
  pub error:      Option<ActionItemError>
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Default,
)]
pub struct FeedState {
  pub items: Vec<FeedItem>
}

pub enum FeedAction {
  BeginUpdate(AssignmentUpdate),
  FinishUpdate(AssignmentUpdate),
  Delete(String),
  Edit(CommentEdit)
}

pub fn update_error(
  error: &AssignmentUpdateError
) -> ActionItemError {
  let title = match error {
    | AssignmentUpdateError::NotPermitted(
      _
    ) => "You can no longer update this task",
    | AssignmentUpdateError::AlreadyResolved(
      _
    )
    | AssignmentUpdateError::TaskClosed(
      _
    ) => "This task has already been resolved",
    | _ => "There was an error updating this task"
  };

  ActionItemError {
    title:   title.to_string(),
    message: error.to_string(),
    action:  None
  }
}

impl FeedState {
  pub fn from_tasks(
    tasks: Vec<TaskNew>
  ) -> Self {
    Self {
      items: tasks
        .into_iter()
        .map(|task| FeedItem {
          task,
          is_pending: false,
          error: None
        })
        .collect()
    }
  }

  fn item_mut(
    &mut self,
    task_id: &str
  ) -> Option<&mut FeedItem> {
    self
      .items
      .iter_mut()
      .find(|item| item.task.id == task_id)
  }

  /// Marks the task as pending. Returns
  /// `false` when it is unknown or
  /// already has an update in flight.
  pub fn begin_update(
    &mut self,
    update: &AssignmentUpdate
  ) -> bool {
    let Some(item) =
      self.item_mut(&update.task_id)
    else {
      tracing::warn!(
        task_id = %update.task_id,
        "update for unknown task"
      );
      return false;
    };
    if item.is_pending {
      tracing::warn!(
        task_id = %update.task_id,
        "update already in flight"
      );
      return false;
    }
    item.is_pending = true;
    item.error = None;
    true
  }

  /// Applies an in-flight update. Only
  /// the first finish after a begin
  /// mutates the task.
  pub fn finish_update(
    &mut self,
    update: &AssignmentUpdate
  ) {
    let Some(item) =
      self.item_mut(&update.task_id)
    else {
      return;
    };
    if !item.is_pending {
      tracing::warn!(
        task_id = %update.task_id,
        "finish without a matching \
         begin; dropping update"
      );
      return;
    }
    item.is_pending = false;
    match apply_assignment_update(
      &mut item.task,
      update
    ) {
      | Ok(status) => {
        tracing::info!(
          task_id = %update.task_id,
          assignment_id = %update.assignment_id,
          ?status,
          "assignment updated"
        );
      }
      | Err(error) => {
        tracing::warn!(
          task_id = %update.task_id,
          %error,
          "assignment update rejected"
        );
        item.error =
          Some(update_error(&error));
      }
    }
  }

  pub fn delete(
    &mut self,
    task_id: &str
  ) {
    self
      .items
      .retain(|item| item.task.id != task_id);
    tracing::info!(
      task_id,
      remaining = self.items.len(),
      "task deleted"
    );
  }

  pub fn edit(
    &mut self,
    edit: &CommentEdit
  ) {
    if let Some(item) =
      self.item_mut(&edit.id)
    {
      item.task.name = edit.text.clone();
    }
  }
}

impl Reducible for FeedState {
  type Action = FeedAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | FeedAction::BeginUpdate(update) => {
        next.begin_update(&update);
      }
      | FeedAction::FinishUpdate(
        update
      ) => {
        next.finish_update(&update);
      }
      | FeedAction::Delete(task_id) => {
        next.delete(&task_id);
      }
      | FeedAction::Edit(edit) => {
        next.edit(&edit);
      }
    }
    Rc::new(next)
  }
}

pub fn parse_feed_tasks(
  raw: &str
) -> Vec<TaskNew> {
  match serde_json::from_str::<Vec<TaskNew>>(
    raw
  ) {
    | Ok(tasks) => {
      tracing::info!(
        task_count = tasks.len(),
        "loaded feed tasks"
      );
      tasks
    }
    | Err(error) => {
      tracing::error!(%error, "failed parsing feed tasks; starting empty");
      Vec::new()
    }
  }
}
