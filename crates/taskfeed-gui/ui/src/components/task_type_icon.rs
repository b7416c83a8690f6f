use taskfeed_gui_shared::TaskType;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskTypeIconProps {
  pub task_type: TaskType,
  #[prop_or(20)]
  pub size:      u32
}

#[function_component(TaskTypeIcon)]
pub fn task_type_icon(
  props: &TaskTypeIconProps
) -> Html {
  let (class, glyph) =
    match props.task_type {
      | TaskType::Approval => (
        "bcs-task-avatar-badge bcs-task-icon-approval",
        "✓"
      ),
      | TaskType::General => (
        "bcs-task-avatar-badge bcs-task-icon-general",
        "•"
      )
    };
  let style = format!(
    "width:{size}px;height:{size}px;",
    size = props.size
  );

  html! {
      <span {class} {style} aria-hidden="true">{ glyph }</span>
  }
}
