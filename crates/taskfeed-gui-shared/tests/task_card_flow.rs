use serde_json::json;
use taskfeed_gui_shared::{
  AssignmentStatus,
  AssignmentUpdate,
  CardFooter,
  HeadlineMessage,
  MAX_AVATARS,
  TaskAction,
  TaskNew,
  TaskStatus,
  TaskType,
  User,
  apply_assignment_update,
  assignees_view,
  task_card_view
};

fn approval_task() -> TaskNew {
  serde_json::from_value(json!({
    "id": "1",
    "name": "Sign off on @[u3:Grace] draft",
    "created_at": "2026-10-01T09:30:00Z",
    "created_by": { "id": "c1", "target": { "id": "u9", "name": "Lin" } },
    "task_type": "approval",
    "status": "inProgress",
    "permissions": { "can_update": true, "can_delete": true },
    "assigned_to": {
      "entries": [
        {
          "id": "a1",
          "target": { "id": "u1", "name": "Ada" },
          "status": "notStarted",
          "permissions": { "can_update": true }
        },
        { "id": "a2", "target": { "id": "u2", "name": "Bo" }, "status": "APPROVED" },
        { "id": "a3", "status": "NOT_STARTED" },
        { "id": "a4", "target": { "id": "u4", "name": "Cy" } },
        { "id": "a5", "target": { "id": "u5", "name": "Di" } }
      ]
    }
  }))
  .expect("task fixture")
}

fn viewer(id: &str) -> User {
  User {
    id: id.to_string(),
    name: "Viewer".to_string(),
    ..User::placeholder()
  }
}

#[test]
fn assigned_viewer_gets_actions_and_personal_headline(
) {
  let task = approval_task();
  let view = task_card_view(
    &task,
    &viewer("u1"),
    false,
    false
  );

  assert_eq!(
    view.headline,
    HeadlineMessage::ApprovalCurrentUser
  );
  assert_eq!(
    view.footer,
    CardFooter::Actions {
      assignment_id: "a1".to_string(),
      task_type:     TaskType::Approval
    }
  );
  assert!(!view.permissions.can_edit);
  assert!(view.permissions.can_delete);
  assert!(!view.pending_visual);

  let update = view
    .gate
    .dispatch(
      &task.id,
      "a1",
      TaskAction::Approve
    )
    .expect("open gate dispatches");
  assert_eq!(
    update,
    AssignmentUpdate {
      task_id:       "1".to_string(),
      assignment_id: "a1".to_string(),
      status:        AssignmentStatus::Approved
    }
  );
}

#[test]
fn pending_card_suppresses_every_trigger() {
  let task = approval_task();
  let view = task_card_view(
    &task,
    &viewer("u1"),
    true,
    false
  );

  assert!(view.pending_visual);
  assert!(matches!(
    view.footer,
    CardFooter::Actions { .. }
  ));
  for action in [
    TaskAction::Approve,
    TaskAction::Reject,
    TaskAction::Complete
  ] {
    assert!(
      view
        .gate
        .dispatch(&task.id, "a1", action)
        .is_none()
    );
  }
}

#[test]
fn other_viewer_sees_status_and_overflow() {
  let task = approval_task();
  let view = task_card_view(
    &task,
    &viewer("u7"),
    false,
    false
  );
  assert_eq!(
    view.headline,
    HeadlineMessage::Approval
  );
  assert_eq!(
    view.footer,
    CardFooter::Status(
      TaskStatus::InProgress
    )
  );

  let assignees = assignees_view(
    task.assigned_to.as_ref(),
    MAX_AVATARS
  );
  assert_eq!(assignees.avatars.len(), 3);
  assert!(
    assignees.avatars[2]
      .user
      .is_placeholder()
  );
  assert_eq!(
    assignees.overflow_label().as_deref(),
    Some("+2")
  );
}

#[test]
fn applied_update_closes_the_action_footer()
{
  let mut task = approval_task();
  if let Some(entries) =
    task.assignments_mut()
  {
    entries.retain(|entry| {
      entry.id == "a1"
    });
  }

  let status = apply_assignment_update(
    &mut task,
    &AssignmentUpdate {
      task_id:       "1".to_string(),
      assignment_id: "a1".to_string(),
      status:        AssignmentStatus::Rejected
    }
  )
  .expect("update applies");
  assert_eq!(status, TaskStatus::Rejected);

  let view = task_card_view(
    &task,
    &viewer("u1"),
    false,
    false
  );
  assert_eq!(
    view.footer,
    CardFooter::Status(
      TaskStatus::Rejected
    )
  );
  assert_eq!(
    view.headline,
    HeadlineMessage::ApprovalCurrentUser
  );
}

#[test]
fn due_date_follows_payload() {
  let mut task = approval_task();
  let view = task_card_view(
    &task,
    &viewer("u1"),
    false,
    false
  );
  assert_eq!(view.due_at, None);

  task.due_at =
    Some("2026-10-20T17:00:00Z".to_string());
  let view = task_card_view(
    &task,
    &viewer("u1"),
    false,
    false
  );
  assert_eq!(
    view.due_at.as_deref(),
    Some("2026-10-20T17:00:00Z")
  );
}
