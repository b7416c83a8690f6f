use taskfeed_gui_shared::{
  AssignmentStatus,
  User
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::Avatar;
use crate::messages::{
  Message,
  assignee_status,
  format_message
};

#[derive(Properties, PartialEq)]
pub struct AssigneeStatusProps {
  pub user:           User,
  pub status:         AssignmentStatus,
  pub get_avatar_url:
    Callback<String, Option<String>>
}

#[function_component(AssigneeStatus)]
pub fn assignee_status_view(
  props: &AssigneeStatusProps
) -> Html {
  let name = if props.user.name.is_empty()
  {
    Message::UnknownUser
      .text()
      .to_string()
  } else {
    props.user.name.clone()
  };
  let title = format_message(
    assignee_status(props.status),
    "user",
    &name
  );
  let status_class = format!(
    "bcs-is-{}",
    props.status.as_key()
  );

  html! {
      <div class={classes!("bcs-task-assignment", status_class)} {title} data-testid="task-assignment-status">
          <Avatar
              user={props.user.clone()}
              get_avatar_url={props.get_avatar_url.clone()}
              class={Some("bcs-task-assignment-avatar".to_string())}
          />
          <span class="bcs-task-assignment-status" aria-hidden="true"></span>
      </div>
  }
}
