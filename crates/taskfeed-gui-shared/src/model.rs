use serde::{
  Deserialize,
  Serialize
};

/// Placeholder identity used when an
/// assignment or creator arrives
/// without a resolvable user.
pub const PLACEHOLDER_USER_ID: &str =
  "2";

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(
  rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum TaskStatus {
  #[default]
  #[serde(alias = "notStarted")]
  NotStarted,
  #[serde(alias = "inProgress")]
  InProgress,
  #[serde(alias = "approved")]
  Approved,
  #[serde(alias = "rejected")]
  Rejected,
  #[serde(alias = "completed")]
  Completed
}

impl TaskStatus {
  /// Open tasks still accept
  /// assignment updates.
  pub fn is_open(self) -> bool {
    matches!(
      self,
      TaskStatus::NotStarted
        | TaskStatus::InProgress
    )
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | TaskStatus::NotStarted => {
        "not-started"
      }
      | TaskStatus::InProgress => {
        "in-progress"
      }
      | TaskStatus::Approved => {
        "approved"
      }
      | TaskStatus::Rejected => {
        "rejected"
      }
      | TaskStatus::Completed => {
        "completed"
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(
  rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum AssignmentStatus {
  #[default]
  #[serde(alias = "notStarted")]
  NotStarted,
  #[serde(alias = "approved")]
  Approved,
  #[serde(alias = "rejected")]
  Rejected,
  #[serde(alias = "completed")]
  Completed
}

impl AssignmentStatus {
  pub fn as_key(self) -> &'static str {
    match self {
      | AssignmentStatus::NotStarted => {
        "not-started"
      }
      | AssignmentStatus::Approved => {
        "approved"
      }
      | AssignmentStatus::Rejected => {
        "rejected"
      }
      | AssignmentStatus::Completed => {
        "completed"
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskType {
  #[default]
  #[serde(alias = "general")]
  General,
  #[serde(alias = "approval")]
  Approval
}

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
#[serde(
  rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum CompletionRule {
  #[default]
  AllAssignees,
  AnyAssignee
}

fn default_user_kind() -> String {
  "user".to_string()
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct User {
  pub id:         String,
  #[serde(default)]
  pub name:       String,
  #[serde(default)]
  pub login:      Option<String>,
  #[serde(default)]
  pub avatar_url: Option<String>,
  #[serde(
    rename = "type",
    default = "default_user_kind"
  )]
  pub kind:       String
}

impl User {
  pub fn placeholder() -> Self {
    Self {
      id:         PLACEHOLDER_USER_ID
        .to_string(),
      name:       String::new(),
      login:      None,
      avatar_url: None,
      kind:       default_user_kind()
    }
  }

  pub fn is_placeholder(&self) -> bool {
    self.id == PLACEHOLDER_USER_ID
      && self.name.is_empty()
  }
}

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
pub struct AssignmentPermissions {
  #[serde(default)]
  pub can_update: bool,
  #[serde(default)]
  pub can_delete: bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskAssignment {
  #[serde(default)]
  pub id:          String,
  #[serde(default)]
  pub target:      Option<User>,
  #[serde(default)]
  pub status:      AssignmentStatus,
  #[serde(default)]
  pub role:        Option<String>,
  #[serde(default)]
  pub permissions:
    Option<AssignmentPermissions>
}

impl TaskAssignment {
  pub fn target_id(&self) -> Option<&str> {
    self
      .target
      .as_ref()
      .map(|user| user.id.as_str())
  }

  pub fn can_update(&self) -> bool {
    self
      .permissions
      .is_some_and(|permissions| {
        permissions.can_update
      })
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskAssigneeCollection {
  #[serde(default)]
  pub entries:     Vec<TaskAssignment>,
  #[serde(default)]
  pub limit:       Option<u32>,
  #[serde(default)]
  pub next_marker: Option<String>
}

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
pub struct TaskPermissions {
  #[serde(default)]
  pub can_update: bool,
  #[serde(default)]
  pub can_delete: bool,
  #[serde(default)]
  pub can_create_task_collaborator:
    bool,
  #[serde(default)]
  pub can_create_task_link: bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskNew {
  pub id:              String,
  #[serde(default)]
  pub name:            String,
  #[serde(default)]
  pub description:     String,
  #[serde(default)]
  pub created_at:      String,
  #[serde(default)]
  pub created_by:      TaskAssignment,
  #[serde(default)]
  pub due_at:          Option<String>,
  #[serde(default)]
  pub task_type:       TaskType,
  #[serde(default)]
  pub status:          TaskStatus,
  #[serde(default)]
  pub completion_rule: CompletionRule,
  #[serde(default)]
  pub permissions:     TaskPermissions,
  #[serde(default)]
  pub assigned_to:
    Option<TaskAssigneeCollection>
}

impl TaskNew {
  pub fn assignments(
    &self
  ) -> &[TaskAssignment] {
    self
      .assigned_to
      .as_ref()
      .map(|collection| {
        collection.entries.as_slice()
      })
      .unwrap_or_default()
  }

  pub fn assignments_mut(
    &mut self
  ) -> Option<&mut Vec<TaskAssignment>> {
    self
      .assigned_to
      .as_mut()
      .map(|collection| {
        &mut collection.entries
      })
  }
}

/// Already-classified failure handed
/// to a card by the calling layer.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ActionItemError {
  pub title:   String,
  pub message: String,
  #[serde(default)]
  pub action:  Option<String>
}

/// Payload of `on_assignment_update`:
/// `(task id, assignment id, new
/// status)`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct AssignmentUpdate {
  pub task_id:       String,
  pub assignment_id: String,
  pub status:        AssignmentStatus
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn statuses_accept_wire_and_camel_case_values(
  ) {
    let wire: TaskStatus =
      serde_json::from_value(json!(
        "IN_PROGRESS"
      ))
      .expect("wire status");
    let camel: TaskStatus =
      serde_json::from_value(json!(
        "inProgress"
      ))
      .expect("camel status");
    assert_eq!(
      wire,
      TaskStatus::InProgress
    );
    assert_eq!(wire, camel);

    let kind: TaskType =
      serde_json::from_value(json!(
        "approval"
      ))
      .expect("task type");
    assert_eq!(kind, TaskType::Approval);
    assert_eq!(
      serde_json::to_value(
        AssignmentStatus::NotStarted
      )
      .expect("serialize"),
      json!("NOT_STARTED")
    );
  }

  #[test]
  fn partial_task_payload_fills_defaults(
  ) {
    let task: TaskNew =
      serde_json::from_value(json!({
        "id": "1",
        "task_type": "approval",
        "status": "inProgress",
        "assigned_to": {
          "entries": [{
            "id": "a1",
            "target": { "id": "u1" },
            "status": "notStarted",
            "permissions": { "can_update": true }
          }]
        }
      }))
      .expect("task payload");

    assert_eq!(task.due_at, None);
    assert_eq!(
      task.completion_rule,
      CompletionRule::AllAssignees
    );
    assert!(!task.permissions.can_update);
    assert_eq!(task.assignments().len(), 1);
    let assignment = &task.assignments()[0];
    assert_eq!(
      assignment.target_id(),
      Some("u1")
    );
    assert!(assignment.can_update());
    assert_eq!(
      assignment
        .target
        .as_ref()
        .map(|user| user.kind.as_str()),
      Some("user")
    );
  }

  #[test]
  fn missing_collection_has_no_assignments(
  ) {
    let task = TaskNew {
      id: "9".to_string(),
      ..TaskNew::default()
    };
    assert!(task.assignments().is_empty());

    let assignment =
      TaskAssignment::default();
    assert!(!assignment.can_update());
    assert_eq!(
      assignment.target_id(),
      None
    );
  }
}
