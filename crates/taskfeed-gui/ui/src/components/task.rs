use taskfeed_gui_shared::{
  ActionItemError,
  AssignmentUpdate,
  CardFooter,
  TaskAction,
  TaskNew,
  User,
  fill_user_placeholder,
  task_card_view
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_context
};

use super::{
  Assignees,
  Comment,
  CommentEdit,
  CommentInlineError,
  TaskActions,
  TaskDueDate,
  TaskStatusBadge,
  TaskTypeIcon,
  Translations
};
use crate::app::DisplaySettings;
use crate::messages::{
  Message,
  headline,
  split_placeholder
};

#[derive(Properties, PartialEq)]
pub struct TaskProps {
  pub task:         TaskNew,
  pub current_user: User,
  #[prop_or_default]
  pub error:
    Option<ActionItemError>,
  pub get_avatar_url:
    Callback<String, Option<String>>,
  #[prop_or_default]
  pub get_mention_with_query:
    Option<Callback<String>>,
  #[prop_or_default]
  pub get_user_profile_url: Option<
    Callback<String, Option<String>>
  >,
  #[prop_or_default]
  pub is_disabled:  bool,
  #[prop_or_default]
  pub is_pending:   bool,
  #[prop_or_default]
  pub mention_selector_contacts:
    Vec<User>,
  #[prop_or_default]
  pub on_assignment_update:
    Callback<AssignmentUpdate>,
  #[prop_or_default]
  pub on_delete:
    Option<Callback<String>>,
  #[prop_or_default]
  pub on_edit:
    Option<Callback<CommentEdit>>,
  #[prop_or_default]
  pub translated_tagged_message:
    Option<String>,
  #[prop_or_default]
  pub translations:
    Option<Translations>
}

/// One task card in the activity feed.
#[function_component(Task)]
pub fn task(props: &TaskProps) -> Html {
  let settings =
    use_context::<DisplaySettings>()
      .unwrap_or_default();
  let task = &props.task;
  let view = task_card_view(
    task,
    &props.current_user,
    props.is_pending,
    props.error.is_some()
  );
  let creator =
    fill_user_placeholder(&task.created_by)
      .target
      .unwrap_or_else(User::placeholder);

  let avatar_renderer = {
    let task_type = task.task_type;
    Callback::from(move |avatar: Html| {
      html! {
          <div class="bcs-task-avatar">
              { avatar }
              <TaskTypeIcon {task_type} />
          </div>
      }
    })
  };
  let user_headline_renderer = {
    let template =
      headline(view.headline).text();
    Callback::from(move |user: Html| {
      let (before, after) =
        split_placeholder(template, "user");
      html! {
          <span class="bcs-task-headline">
              { before }
              {
                  if let Some(after) = after {
                      html! { <>{ user }{ after }</> }
                  } else {
                      html! {}
                  }
              }
          </span>
      }
    })
  };

  let footer = match &view.footer {
    | CardFooter::Actions {
      assignment_id,
      task_type
    } => {
      let on_action = {
        let gate = view.gate;
        let task_id = task.id.clone();
        let assignment_id =
          assignment_id.clone();
        let on_assignment_update = props
          .on_assignment_update
          .clone();
        Callback::from(
          move |action: TaskAction| {
            if let Some(update) = gate
              .dispatch(
                &task_id,
                &assignment_id,
                action
              )
            {
              tracing::debug!(
                task_id = %update.task_id,
                assignment_id = %update.assignment_id,
                status = ?update.status,
                "dispatching assignment update"
              );
              on_assignment_update
                .emit(update);
            }
          }
        )
      };
      html! {
          <TaskActions task_type={*task_type} {on_action} />
      }
    }
    | CardFooter::Status(status) => {
      html! { <TaskStatusBadge status={*status} /> }
    }
  };

  html! {
      <div class="bcs-task-container">
          {
              if let Some(error) = props.error.clone() {
                  html! { <CommentInlineError {error} /> }
              } else {
                  html! {}
              }
          }
          <div class={classes!("bcs-task", view.pending_visual.then_some("bcs-is-pending"))} data-testid="task-card">
              <Comment
                  id={task.id.clone()}
                  created_at={task.created_at.clone()}
                  created_by={creator}
                  current_user={props.current_user.clone()}
                  tagged_message={task.name.clone()}
                  translated_tagged_message={props.translated_tagged_message.clone()}
                  translations={props.translations.clone()}
                  permissions={view.permissions}
                  inline_delete_message={Message::TaskDeletePrompt}
                  is_pending={props.is_pending}
                  is_disabled={props.is_disabled}
                  get_avatar_url={props.get_avatar_url.clone()}
                  get_user_profile_url={props.get_user_profile_url.clone()}
                  get_mention_with_query={props.get_mention_with_query.clone()}
                  mention_selector_contacts={props.mention_selector_contacts.clone()}
                  on_delete={props.on_delete.clone()}
                  on_edit={props.on_edit.clone()}
                  {avatar_renderer}
                  {user_headline_renderer}
              />
              <div class="bcs-task-content">
                  {
                      if let Some(due_date) = view.due_at.clone() {
                          html! { <TaskDueDate {due_date} status={task.status} /> }
                      } else {
                          html! {}
                      }
                  }
              </div>
              <div class="bcs-task-content">
                  <Assignees
                      assignees={task.assigned_to.clone()}
                      get_avatar_url={props.get_avatar_url.clone()}
                      max_avatars={settings.max_avatars}
                  />
              </div>
              <div class="bcs-task-content">{ footer }</div>
          </div>
      </div>
  }
}
