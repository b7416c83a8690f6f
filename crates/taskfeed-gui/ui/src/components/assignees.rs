use taskfeed_gui_shared::{
  MAX_AVATARS,
  TaskAssigneeCollection,
  assignees_view
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::AssigneeStatus;

#[derive(Properties, PartialEq)]
pub struct AssigneesProps {
  pub assignees:
    Option<TaskAssigneeCollection>,
  pub get_avatar_url:
    Callback<String, Option<String>>,
  #[prop_or(MAX_AVATARS)]
  pub max_avatars: usize
}

/// Avatar row for a task. Only re-renders
/// when its own props change.
#[function_component(Assignees)]
pub fn assignees(
  props: &AssigneesProps
) -> Html {
  let view = assignees_view(
    props.assignees.as_ref(),
    props.max_avatars
  );
  let overflow = view.overflow_label();

  html! {
      <div class="bcs-task-assignment-container">
          <div class="bcs-task-assignments">
              {
                  for view.avatars.into_iter().map(|avatar| html! {
                      <AssigneeStatus
                          key={avatar.assignment_id.clone()}
                          user={avatar.user}
                          status={avatar.status}
                          get_avatar_url={props.get_avatar_url.clone()}
                      />
                  })
              }
              {
                  if let Some(label) = overflow {
                      html! { <span class="bcs-task-assignment-avatar bcs-task-assignment-count">{ label }</span> }
                  } else {
                      html! {}
                  }
              }
          </div>
      </div>
  }
}
