use taskfeed_gui_shared::{
  AssignmentStatus,
  HeadlineMessage,
  TaskAction,
  TaskStatus
};

/// English message catalog for the
/// task card.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum Message {
  TasksFeedHeadlineApprovalCurrentUser,
  TasksFeedHeadlineGeneralCurrentUser,
  TasksFeedHeadlineApproval,
  TasksFeedHeadlineGeneral,
  TaskDeletePrompt,
  TaskApprove,
  TaskReject,
  TaskComplete,
  TaskDueDate,
  TaskOverdue,
  TaskStatusNotStarted,
  TaskStatusInProgress,
  TaskStatusApproved,
  TaskStatusRejected,
  TaskStatusCompleted,
  AssigneeNotStarted,
  AssigneeApproved,
  AssigneeRejected,
  AssigneeCompleted,
  UnknownUser,
  Translate,
  ShowOriginal,
  Edit,
  Delete,
  Save,
  Cancel
}

impl Message {
  pub fn text(self) -> &'static str {
    match self {
      | Message::TasksFeedHeadlineApprovalCurrentUser => {
        "{user} assigned you an approval \
         task"
      }
      | Message::TasksFeedHeadlineGeneralCurrentUser => {
        "{user} assigned you a task"
      }
      | Message::TasksFeedHeadlineApproval => {
        "{user} created an approval task"
      }
      | Message::TasksFeedHeadlineGeneral => {
        "{user} created a task"
      }
      | Message::TaskDeletePrompt => {
        "Are you sure you want to \
         permanently delete this task?"
      }
      | Message::TaskApprove => "Approve",
      | Message::TaskReject => "Reject",
      | Message::TaskComplete => {
        "Mark as Complete"
      }
      | Message::TaskDueDate => {
        "Due {date}"
      }
      | Message::TaskOverdue => "Overdue",
      | Message::TaskStatusNotStarted => {
        "Not Started"
      }
      | Message::TaskStatusInProgress => {
        "In Progress"
      }
      | Message::TaskStatusApproved => {
        "Approved"
      }
      | Message::TaskStatusRejected => {
        "Rejected"
      }
      | Message::TaskStatusCompleted => {
        "Completed"
      }
      | Message::AssigneeNotStarted => {
        "{user} has not responded"
      }
      | Message::AssigneeApproved => {
        "{user} approved"
      }
      | Message::AssigneeRejected => {
        "{user} rejected"
      }
      | Message::AssigneeCompleted => {
        "{user} completed"
      }
      | Message::UnknownUser => {
        "Unknown user"
      }
      | Message::Translate => "Translate",
      | Message::ShowOriginal => {
        "Show original"
      }
      | Message::Edit => "Edit",
      | Message::Delete => "Delete",
      | Message::Save => "Save",
      | Message::Cancel => "Cancel"
    }
  }
}

pub fn headline(
  message: HeadlineMessage
) -> Message {
  match message {
    | HeadlineMessage::ApprovalCurrentUser => {
      Message::TasksFeedHeadlineApprovalCurrentUser
    }
    | HeadlineMessage::GeneralCurrentUser => {
      Message::TasksFeedHeadlineGeneralCurrentUser
    }
    | HeadlineMessage::Approval => {
      Message::TasksFeedHeadlineApproval
    }
    | HeadlineMessage::General => {
      Message::TasksFeedHeadlineGeneral
    }
  }
}

pub fn task_status(
  status: TaskStatus
) -> Message {
  match status {
    | TaskStatus::NotStarted => {
      Message::TaskStatusNotStarted
    }
    | TaskStatus::InProgress => {
      Message::TaskStatusInProgress
    }
    | TaskStatus::Approved => {
      Message::TaskStatusApproved
    }
    | TaskStatus::Rejected => {
      Message::TaskStatusRejected
    }
    | TaskStatus::Completed => {
      Message::TaskStatusCompleted
    }
  }
}

pub fn assignee_status(
  status: AssignmentStatus
) -> Message {
  match status {
    | AssignmentStatus::NotStarted => {
      Message::AssigneeNotStarted
    }
    | AssignmentStatus::Approved => {
      Message::AssigneeApproved
    }
    | AssignmentStatus::Rejected => {
      Message::AssigneeRejected
    }
    | AssignmentStatus::Completed => {
      Message::AssigneeCompleted
    }
  }
}

pub fn task_action(
  action: TaskAction
) -> Message {
  match action {
    | TaskAction::Approve => {
      Message::TaskApprove
    }
    | TaskAction::Reject => {
      Message::TaskReject
    }
    | TaskAction::Complete => {
      Message::TaskComplete
    }
  }
}

/// Splits a template around its
/// `{name}` placeholder so markup can be
/// inserted in between.
pub fn split_placeholder<'a>(
  template: &'a str,
  name: &str
) -> (&'a str, Option<&'a str>) {
  let token = format!("{{{name}}}");
  match template.split_once(&token) {
    | Some((before, after)) => {
      (before, Some(after))
    }
    | None => (template, None)
  }
}

pub fn format_message(
  message: Message,
  name: &str,
  value: &str
) -> String {
  message
    .text()
    .replace(&format!("{{{name}}}"), value)
}
