use chrono::Utc;
use taskfeed_gui_shared::TaskStatus;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_context
};

use crate::app::DisplaySettings;
use crate::datetime::{
  format_timestamp,
  is_overdue
};
use crate::messages::{
  Message,
  format_message
};

#[derive(Properties, PartialEq)]
pub struct TaskDueDateProps {
  pub due_date: String,
  pub status:   TaskStatus
}

#[function_component(TaskDueDate)]
pub fn task_due_date(
  props: &TaskDueDateProps
) -> Html {
  let settings =
    use_context::<DisplaySettings>()
      .unwrap_or_default();
  let label = format_message(
    Message::TaskDueDate,
    "date",
    &format_timestamp(
      &props.due_date,
      settings.timezone,
      &settings.date_format
    )
  );
  let overdue = is_overdue(
    &props.due_date,
    props.status,
    Utc::now()
  );

  html! {
      <div class={classes!("bcs-task-due-date", overdue.then_some("bcs-is-overdue"))} data-testid="task-due-date">
          <span class="bcs-task-due-date-text">{ label }</span>
          {
              if overdue {
                  html! { <span class="badge bcs-task-overdue">{ Message::TaskOverdue.text() }</span> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
