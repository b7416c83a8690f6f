use taskfeed_gui_shared::{
  TaskAction,
  TaskType
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use crate::messages::task_action;

#[derive(Properties, PartialEq)]
pub struct TaskActionsProps {
  pub task_type: TaskType,
  pub on_action: Callback<TaskAction>
}

#[function_component(TaskActions)]
pub fn task_actions(
  props: &TaskActionsProps
) -> Html {
  html! {
      <div class="bcs-task-actions">
          {
              for TaskAction::for_task_type(props.task_type).iter().copied().map(|action| {
                  let on_action = props.on_action.clone();
                  let class = match action {
                      | TaskAction::Approve => "btn ok bcs-task-approve-btn",
                      | TaskAction::Reject => "btn danger bcs-task-reject-btn",
                      | TaskAction::Complete => "btn ok bcs-task-complete-btn"
                  };
                  html! {
                      <button {class} type="button" onclick={Callback::from(move |_| on_action.emit(action))}>
                          { task_action(action).text() }
                      </button>
                  }
              })
          }
      </div>
  }
}
