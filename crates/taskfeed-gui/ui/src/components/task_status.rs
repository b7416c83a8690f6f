use yew::{
  Html,
  Properties,
  function_component,
  html
};

use crate::messages::task_status;

#[derive(Properties, PartialEq)]
pub struct TaskStatusBadgeProps {
  pub status:
    taskfeed_gui_shared::TaskStatus
}

#[function_component(TaskStatusBadge)]
pub fn task_status_badge(
  props: &TaskStatusBadgeProps
) -> Html {
  let class = format!(
    "badge bcs-task-status bcs-task-status-{}",
    props.status.as_key()
  );
  html! {
      <span {class} data-testid="task-status">{ task_status(props.status).text() }</span>
  }
}
